//! Shared listing page fixtures.

#![allow(dead_code)]

/// One work card. Count and date strings are inserted verbatim so callers
/// can choose plain or separated numbers (or broken ones).
pub struct Card<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub author_href: &'a str,
    pub points: &'a str,
    pub episodes: &'a str,
    pub characters: &'a str,
    pub modified: &'a str,
    pub introduction: Option<&'a str>,
    pub reviews: &'a [ReviewFixture<'a>],
}

pub struct ReviewFixture<'a> {
    pub user: &'a str,
    pub name: &'a str,
    pub body: &'a str,
    pub style: Option<&'a str>,
}

impl Default for Card<'_> {
    fn default() -> Self {
        Self {
            id: "1177354054880238351",
            name: "異世界の本屋さん",
            author_href: "/users/kaku-yomu",
            points: "★1,234",
            episodes: "12話",
            characters: "123,456文字",
            modified: "2015年12月25日 10:30 更新",
            introduction: Some("剣と魔法の世界で本屋を営む話。"),
            reviews: &[],
        }
    }
}

impl Card<'_> {
    pub fn html(&self) -> String {
        let introduction = self
            .introduction
            .map(|text| format!(r#"<p class="widget-work-introduction">{text}</p>"#))
            .unwrap_or_default();
        let reviews: String = self
            .reviews
            .iter()
            .map(|r| {
                let style = r.style.map(|s| format!(r#" style="{s}""#)).unwrap_or_default();
                format!(
                    r#"<div class="widget-work-review" itemscope itemtype="https://schema.org/Review">
                        <p class="widget-work-reviewTitle"{style}>★★★ 最高</p>
                        <p><a href="/users/{user}">{name}</a></p>
                        <p itemprop="reviewBody">{body}</p>
                    </div>"#,
                    user = r.user,
                    name = r.name,
                    body = r.body,
                )
            })
            .collect();

        format!(
            r#"<div class="widget-work float-parent" itemscope itemtype="https://schema.org/CreativeWork">
                <div class="widget-work-header">
                    <h3><a href="/works/{id}" itemprop="name" class="widget-workCard-titleLabel">{name}</a></h3>
                    <p class="widget-workCard-author"><a href="{author_href}" itemprop="author">カクヨム運営</a></p>
                </div>
                <p class="widget-work-summary">
                    <span class="widget-work-reviewPoints">{points}</span>
                    <span itemprop="genre">異世界ファンタジー</span>
                    <span class="widget-work-statusLabel">連載中</span>
                    <span class="widget-work-episodeCount">{episodes}</span>
                    <span itemprop="characterCount">{characters}</span>
                    <time itemprop="dateModified">{modified}</time>
                </p>
                {introduction}
                <ul class="widget-work-flags">
                    <li><span itemprop="keywords">残酷描写有り</span></li>
                    <li><span itemprop="keywords">暴力描写有り</span></li>
                </ul>
                <ul class="widget-work-tags">
                    <li><a href="/tags/ファンタジー" itemprop="keywords">ファンタジー</a></li>
                    <li><a href="/tags/本屋" itemprop="keywords">本屋</a></li>
                </ul>
                <div class="widget-work-buttons">
                    <a href="/works/{id}">作品詳細</a>
                    <a href="/works/{id}/episodes/1177354054880238999">1話目から読む</a>
                </div>
                <div class="widget-work-reviews">{reviews}</div>
            </div>"#,
            id = self.id,
            name = self.name,
            author_href = self.author_href,
            points = self.points,
            episodes = self.episodes,
            characters = self.characters,
            modified = self.modified,
        )
    }
}

/// Wrap cards in a listing page.
pub fn page(cards: &[Card<'_>]) -> String {
    let body: String = cards.iter().map(Card::html).collect();
    format!(
        r#"<!DOCTYPE html>
        <html lang="ja">
        <head><meta charset="utf-8"><title>異世界ファンタジーの小説一覧 - カクヨム</title></head>
        <body>
            <div class="widget-media-genresWorkList">{body}</div>
        </body>
        </html>"#
    )
}
