//! Performance benchmarks for dirtree

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dirtree::Node;
use dirtree::test_utils::wide_tree;

// 4 folders per level, 5 levels: 1365 folders, 5460 files
const FANOUT: usize = 4;
const DEPTH: usize = 5;

fn bench_folder_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("folder_size");

    group.bench_function("cold", |b| {
        b.iter_batched(
            || wide_tree(FANOUT, DEPTH),
            |mut tree| tree.folder_size(black_box("Root")),
            BatchSize::SmallInput,
        )
    });

    let mut warm = wide_tree(FANOUT, DEPTH);
    warm.total_size();
    group.bench_function("warm", |b| {
        b.iter(|| warm.folder_size(black_box("Root")))
    });

    group.bench_function("after_deep_insert", |b| {
        b.iter_batched(
            || {
                let mut tree = wide_tree(FANOUT, DEPTH);
                tree.total_size();
                let _ = tree
                    .insert("Root/Root_d3/Root_d3_d3", Node::file("new.bin", 64))
                    .expect("parent accepts files");
                tree
            },
            |mut tree| tree.folder_size(black_box("Root")),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_find_path(c: &mut Criterion) {
    let tree = wide_tree(FANOUT, DEPTH);
    let mut group = c.benchmark_group("find_path");

    group.bench_function("early", |b| {
        b.iter(|| tree.find_path(black_box("Root_d0")))
    });

    group.bench_function("last", |b| {
        b.iter(|| tree.find_path(black_box("Root_file3.txt")))
    });

    group.bench_function("missing", |b| {
        b.iter(|| tree.find_path(black_box("nothing")))
    });

    group.finish();
}

fn bench_find_matching(c: &mut Criterion) {
    let tree = wide_tree(FANOUT, DEPTH);
    let mut group = c.benchmark_group("find_matching");

    group.bench_function("star", |b| {
        b.iter(|| tree.find_matching(black_box("Root_d1*")))
    });

    group.bench_function("digits", |b| {
        b.iter(|| tree.find_matching(black_box("*file#.txt")))
    });

    group.finish();
}

criterion_group!(benches, bench_folder_size, bench_find_path, bench_find_matching);
criterion_main!(benches);
