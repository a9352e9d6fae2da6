use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagediff::diff::{Alignment, DiffEngine, DiffOptions, Granularity};

fn generate_page(sentences: usize, edit_every: usize, seed: usize) -> String {
    let mut content = Vec::with_capacity(sentences);

    for i in 0..sentences {
        if edit_every > 0 && i % edit_every == seed % edit_every {
            content.push(format!("Revised note {} from contributor {}.", i, seed));
        } else {
            content.push(format!("Sentence {} describes the notebook page in detail.", i));
        }
    }

    content.join(" ")
}

fn benchmark_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_alignment");

    for size in [50, 200, 1000].iter() {
        let old = generate_page(*size, 0, 0);
        let new = generate_page(*size, 10, 3);
        let engine = DiffEngine::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), &(new, old), |b, (new, old)| {
            b.iter(|| engine.diff(black_box(new), black_box(old)));
        });
    }

    group.finish();
}

fn benchmark_legacy(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_alignment");

    for size in [50, 200, 1000].iter() {
        let old = generate_page(*size, 0, 0);
        let new = generate_page(*size, 10, 3);
        let engine = DiffEngine::new(DiffOptions {
            alignment: Alignment::Legacy,
            ..Default::default()
        });

        group.bench_with_input(BenchmarkId::from_parameter(size), &(new, old), |b, (new, old)| {
            b.iter(|| engine.diff(black_box(new), black_box(old)));
        });
    }

    group.finish();
}

fn benchmark_word_granularity(c: &mut Criterion) {
    let old = generate_page(200, 0, 0);
    let new = generate_page(200, 7, 2);
    let engine = DiffEngine::new(DiffOptions {
        granularity: Granularity::Word,
        ..Default::default()
    });

    c.bench_function("word_granularity_200", |b| {
        b.iter(|| engine.diff(black_box(&new), black_box(&old)));
    });
}

criterion_group!(
    benches,
    benchmark_sequence,
    benchmark_legacy,
    benchmark_word_granularity
);
criterion_main!(benches);
