use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use xembed::{build, parse_str, serialize, Document};

fn sample_document() -> String {
    let payload = xembed::codec::encode(&[0x5Au8; 600]);
    let specs = xembed::embed::image_specs("scenery.png", Some(payload));
    serialize(&Document::new(build("root", specs)))
}

fn bench_parse(c: &mut Criterion) {
    let xml = sample_document();
    c.bench_function("xembed_parse", |b| b.iter(|| parse_str(black_box(&xml))));
}

fn bench_serialize(c: &mut Criterion) {
    let doc = parse_str(&sample_document()).unwrap();
    c.bench_function("xembed_serialize", |b| {
        b.iter(|| serialize(black_box(&doc)))
    });
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
