//! Performance benchmarks for rs-kakuyomu.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Parse + eager extraction of a synthetic listing
//! - Eager vs lazy walks over an already-parsed listing, by page size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_kakuyomu::{scrape_works, Scraper};

const CARD: &str = r#"
<div class="widget-work float-parent" itemscope itemtype="https://schema.org/CreativeWork">
    <h3><a href="/works/1177354054880238351" itemprop="name">異世界の本屋さん</a></h3>
    <p><a href="/users/kaku-yomu" itemprop="author">カクヨム運営</a></p>
    <p class="widget-work-summary">
        <span class="widget-work-reviewPoints">★1,234</span>
        <span itemprop="genre">異世界ファンタジー</span>
        <span class="widget-work-statusLabel">連載中</span>
        <span class="widget-work-episodeCount">12話</span>
        <span itemprop="characterCount">123,456文字</span>
        <time itemprop="dateModified">2016年3月1日 12:05 更新</time>
    </p>
    <p class="widget-work-introduction">剣と魔法の世界で本屋を営む話。</p>
    <ul class="widget-work-flags"><li><span itemprop="keywords">残酷描写有り</span></li></ul>
    <ul class="widget-work-tags">
        <li><a itemprop="keywords">ファンタジー</a></li>
        <li><a itemprop="keywords">本屋</a></li>
    </ul>
    <div class="widget-work-buttons">
        <a href="/works/1177354054880238351/episodes/1177354054880238400">1話目から読む</a>
    </div>
    <div itemscope itemtype="https://schema.org/Review">
        <p style="color: #3366cc"><a href="/users/reader_01">読者一号</a></p>
        <p itemprop="reviewBody">面白い</p>
    </div>
</div>
"#;

fn listing(cards: usize) -> String {
    format!(
        r#"<html><body><div class="widget-media-genresWorkList">{}</div></body></html>"#,
        CARD.repeat(cards)
    )
}

fn bench_scrape_works(c: &mut Criterion) {
    let html = listing(20);
    c.bench_function("scrape_works_20", |b| {
        b.iter(|| scrape_works(black_box(&html)));
    });
}

/// Walk modes over a pre-parsed page, so parsing cost is excluded
fn bench_walk_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for cards in [1usize, 20, 100] {
        let html = listing(cards);
        let scraper = Scraper::new(&html);
        group.throughput(Throughput::Elements(cards as u64));
        group.bench_with_input(BenchmarkId::new("eager", cards), &scraper, |b, s| {
            b.iter(|| s.works());
        });
        group.bench_with_input(BenchmarkId::new("lazy", cards), &scraper, |b, s| {
            b.iter(|| s.iter_works().filter_map(Result::ok).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scrape_works, bench_walk_modes);
criterion_main!(benches);
