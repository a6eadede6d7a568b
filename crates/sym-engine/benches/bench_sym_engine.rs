use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sym_core::Context;
use sym_engine::SymbolectEngine;

const VOCAB: &[&str] = &[
    "login", "form", "password", "validation", "user", "management", "dashboard", "real",
    "time", "payment", "checkout", "search", "database", "api", "upload", "file", "notification",
    "email", "create", "delete", "with", "the", "a", "and", "for", "page", "secure", "fast",
];

fn generate_descriptions(count: usize, words: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            (0..words)
                .map(|_| *VOCAB.choose(&mut rng).unwrap())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let texts = generate_descriptions(1000, 24);
    let mut context = Context::new();
    context.insert("project_type".into(), "ecommerce dashboard".into());

    c.bench_function("compress_1000_cold", |b| {
        b.iter(|| {
            let engine = SymbolectEngine::new();
            for text in &texts {
                black_box(engine.compress(black_box(text), Some(&context)));
            }
        })
    });

    let warm = SymbolectEngine::new();
    for text in &texts {
        warm.compress(text, Some(&context));
    }
    c.bench_function("compress_1000_warm", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(warm.compress(black_box(text), Some(&context)));
            }
        })
    });
}

fn bench_decompress(c: &mut Criterion) {
    let engine = SymbolectEngine::new();
    let compressed: Vec<String> = generate_descriptions(1000, 24)
        .iter()
        .map(|t| engine.compress(t, None).compressed)
        .collect();

    c.bench_function("decompress_1000", |b| {
        b.iter(|| {
            for s in &compressed {
                black_box(engine.decompress(black_box(s), None));
            }
        })
    });
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
