//! Performance benchmarks for heft

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use heft::test_utils::TestDir;
use heft::{OutputConfig, SizeMode, SortOrder, TreeFormatter, TreeWalker, WalkerConfig};

/// A fixture with `dirs` directories of `files` small files each.
fn create_fixture(dirs: usize, files: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..dirs {
        for f in 0..files {
            dir.add_sized(&format!("dir_{}/file_{}.bin", d, f), 64 + (f as u64 % 7) * 100);
        }
    }
    dir
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small = create_fixture(5, 10);
    group.bench_function("small_50_files", |b| {
        let walker = TreeWalker::new(WalkerConfig {
            size_mode: SizeMode::Apparent,
        });
        b.iter(|| walker.walk(black_box(small.path())).unwrap())
    });

    let medium = create_fixture(20, 50);
    group.bench_function("medium_1000_files", |b| {
        let walker = TreeWalker::new(WalkerConfig {
            size_mode: SizeMode::Apparent,
        });
        b.iter(|| walker.walk(black_box(medium.path())).unwrap())
    });

    group.bench_function("medium_1000_files_blocks", |b| {
        let walker = TreeWalker::new(WalkerConfig {
            size_mode: SizeMode::Blocks,
        });
        b.iter(|| walker.walk(black_box(medium.path())).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let fixture = create_fixture(20, 50);
    let walker = TreeWalker::new(WalkerConfig {
        size_mode: SizeMode::Apparent,
    });
    let tree = walker.walk(fixture.path()).unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("name_order", |b| {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: false,
            sort: SortOrder::Name,
            percent: false,
            max_depth: None,
        });
        b.iter(|| {
            let mut tree = tree.clone();
            formatter.format(black_box(&mut tree))
        })
    });

    group.bench_function("size_order_percent", |b| {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: false,
            sort: SortOrder::Size,
            percent: true,
            max_depth: None,
        });
        b.iter(|| {
            let mut tree = tree.clone();
            formatter.format(black_box(&mut tree))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_walk, bench_render);
criterion_main!(benches);
