use criterion::{criterion_group, criterion_main, Criterion, black_box};

use modem_scrape::{parse_document, ParseOptions};
use modem_scrape::core::html::Document;
use modem_scrape::scrape::read_downstream;

fn load_sample() -> Vec<u8> {
    std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/status.html"))
        .expect("read tests/fixtures/status.html")
}

fn bench_parse(c: &mut Criterion) {
    let page = load_sample();
    let opts = ParseOptions::default();

    c.bench_function("parse_document", |b| {
        b.iter(|| {
            let result = parse_document(black_box(&page), &opts).expect("fixture parses");
            black_box(result.downstream_channels().len())
        })
    });

    let doc = Document::parse(&page);
    c.bench_function("read_downstream_only", |b| {
        b.iter(|| {
            let table = read_downstream(black_box(&doc), &opts).expect("downstream present");
            black_box(table.channels.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
