//! Performance benchmarks for foldertree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use foldertree::test_utils::TestTree;
use foldertree::{TreeConfig, TreeRenderer, WriterSink, read_listing, render_lines};

fn bench_render_wide(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(1, 200);
    let config = TreeConfig::default();

    c.bench_function("render_wide_200x2", |b| {
        b.iter(|| render_lines(black_box(tree.path()), &config).unwrap())
    });
}

fn bench_render_deep(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(6, 3);
    let config = TreeConfig::default();

    c.bench_function("render_deep_6x3", |b| {
        b.iter(|| {
            let mut sink = WriterSink::new(Vec::with_capacity(64 * 1024));
            TreeRenderer::new(&config)
                .render(black_box(tree.path()), &mut sink)
                .unwrap();
            sink.finish().unwrap()
        })
    });
}

fn bench_render_with_exclusions(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(3, 4);
    for i in 0..50 {
        tree.add_file(&format!("target/debug/obj_{i}.o"), "");
        tree.add_file(&format!(".git/objects/{i:02}/blob"), "");
    }
    tree.add_file(".env", "SECRET=1");
    let config = TreeConfig {
        show_excluded_folders: true,
        ..Default::default()
    };

    c.bench_function("render_with_exclusions", |b| {
        b.iter(|| render_lines(black_box(tree.path()), &config).unwrap())
    });
}

fn bench_listing(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(0, 1000);

    c.bench_function("read_listing_1000", |b| {
        b.iter(|| read_listing(black_box(tree.path())).into_entries().len())
    });
}

criterion_group!(
    benches,
    bench_render_wide,
    bench_render_deep,
    bench_render_with_exclusions,
    bench_listing
);
criterion_main!(benches);
