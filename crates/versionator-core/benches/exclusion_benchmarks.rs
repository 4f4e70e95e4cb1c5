//! Benchmarks for version parsing and the exclusion walk
//!
//! Copyright (c) 2025 Versionator Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use versionator_core::{
    compute_exclusions, ExclusionCalculator, FieldSchema, NoopSink, SchemaRegistry, TypeSchema,
    Version,
};

/// Build a schema `depth` levels deep where each level declares `width`
/// leaf fields with staggered bounds and one nested field.
fn create_schema(depth: usize, width: usize) -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    for level in 0..depth {
        let mut schema = TypeSchema::new();
        for i in 0..width {
            let field = FieldSchema::new(format!("field{}", i), "string")
                .since(format!("{}.{}", i % 5, level))
                .until(format!("{}.0", 5 + i % 3));
            schema = schema.field(field);
        }
        if level + 1 < depth {
            schema = schema.field(FieldSchema::new("child", format!("Level{}", level + 1)));
        }
        registry.register(format!("Level{}", level), schema);
    }

    registry
}

fn bench_version_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_parsing");

    for raw in ["1", "2.0.1", "10.20.30.40", "2024-06-01"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| Version::parse(black_box(raw)))
        });
    }

    group.finish();
}

fn bench_version_comparison(c: &mut Criterion) {
    let short = Version::parse("2.0").unwrap();
    let long = Version::parse("2.0.0.0.1").unwrap();

    c.bench_function("compare_padded", |b| {
        b.iter(|| black_box(&short).compare(black_box(&long)))
    });
}

fn bench_exclusions(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_exclusions");

    for (depth, width) in [(2, 10), (8, 10), (8, 100)] {
        let registry = create_schema(depth, width);
        let calculator = ExclusionCalculator::new(&registry).with_sink(NoopSink);

        group.bench_with_input(
            BenchmarkId::new("depth_width", format!("{}x{}", depth, width)),
            &registry,
            |b, _| b.iter(|| calculator.compute(black_box("Level0"), black_box("3.2"))),
        );
    }

    group.finish();
}

fn bench_exclusions_with_logging(c: &mut Criterion) {
    let registry = create_schema(4, 20);

    c.bench_function("compute_exclusions_tracing_sink", |b| {
        b.iter(|| compute_exclusions(&registry, black_box("Level0"), black_box("1.0")))
    });
}

criterion_group!(
    benches,
    bench_version_parsing,
    bench_version_comparison,
    bench_exclusions,
    bench_exclusions_with_logging
);
criterion_main!(benches);
