use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathview::path::normalize::normalize;
use pathview::{PathComparator, Platform, ReadablePathFormatter, StructuredPath};

const PLATFORMS: [Platform; 2] = [Platform::Windows, Platform::Posix];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("posix", |b| {
        b.iter(|| normalize(black_box("/absolute/path/to/file")));
    });

    group.bench_function("windows", |b| {
        b.iter(|| normalize(black_box(r"C:\Users\test\project\src\main.rs")));
    });

    group.bench_function("verbatim", |b| {
        b.iter(|| normalize(black_box(r"\\?\C:\Very\Long\Path")));
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for platform in PLATFORMS {
        group.bench_with_input(
            BenchmarkId::new("with_dots", platform),
            &platform,
            |b, &platform| {
                b.iter(|| StructuredPath::parse(black_box("/a/b/../c/./d//e"), platform));
            },
        );
    }

    group.bench_function("unc", |b| {
        b.iter(|| {
            StructuredPath::parse(black_box(r"\\server\share\team\notes.md"), Platform::Windows)
        });
    });

    group.finish();
}

fn bench_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("equal");

    for platform in PLATFORMS {
        let cmp = PathComparator::new(platform);
        group.bench_with_input(BenchmarkId::new("same", platform), &cmp, |b, cmp| {
            b.iter(|| {
                cmp.equal(
                    black_box(Some("/Users/Test/project/./src")),
                    black_box(Some("/users/test/project/src/")),
                )
            });
        });
    }

    group.finish();
}

fn bench_readable(c: &mut Criterion) {
    let mut group = c.benchmark_group("readable");
    let fmt = ReadablePathFormatter::new(Platform::Posix);
    let base = "/users/test/projects/pathview";

    group.bench_function("inside", |b| {
        b.iter(|| fmt.format(black_box(base), black_box(Some("/users/test/projects/pathview/src/path/mod.rs"))));
    });

    group.bench_function("outside", |b| {
        b.iter(|| fmt.format(black_box(base), black_box(Some("/etc/hosts"))));
    });

    group.bench_function("self", |b| {
        b.iter(|| fmt.format(black_box(base), None));
    });

    // Deep paths to see how segment comparison scales
    for depth in [4usize, 16, 64] {
        let deep_base = format!("/{}", vec!["dir"; depth].join("/"));
        let deep_target = format!("{deep_base}/file.txt");
        group.bench_with_input(
            BenchmarkId::new("depth", depth),
            &(deep_base, deep_target),
            |b, (base, target)| {
                b.iter(|| fmt.format(black_box(base), black_box(Some(target.as_str()))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_parse, bench_equal, bench_readable);
criterion_main!(benches);
