use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use identsplit::splitters::dictionary::Dictionary;
use identsplit::splitters::gentest::generate_potential_splits;
use identsplit::splitters::resources::Resources;
use identsplit::{GenTest, Samurai, Splitter};

const TOKENS: &[&str] = &["car", "numsize", "allocatedsize", "veryverylongtokennameforsplitting"];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_potential_splits");

    for token in TOKENS {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| generate_potential_splits(black_box(token)))
        });
    }

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let dictionary = Dictionary::embedded();
    let gentest = GenTest::new(&dictionary);
    let resources = Resources::default();
    let samurai = Samurai::new(&resources);

    c.bench_function("gentest_split_allocatedsize", |b| {
        b.iter(|| gentest.split(black_box("allocatedsize")))
    });
    c.bench_function("samurai_split_allocatedsize", |b| {
        b.iter(|| samurai.split(black_box("allocatedsize")))
    });
}

criterion_group!(benches, bench_generate, bench_split);
criterion_main!(benches);
