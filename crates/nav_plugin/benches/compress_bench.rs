//! Benchmark comparing the recursive compression against the eager
//! allocate-then-prune baseline.
//!
//! The fixture is a 512x512 grid with ~90% pathable cells from a seeded RNG,
//! compressed at threshold 8 - the map-scale workload this crate exists for.
//! The recursive variant is expected to dominate: it never materializes
//! children for regions that end up merging.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nav_plugin::{LabelCache, LayerStatsRegistry, NavLayer, QuadNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAP_SIZE: u32 = 512;
const SEED: u64 = 48873;

/// Map-scale fixture: ~90% pathable, scattered obstacles.
fn map_cache() -> LabelCache {
  let mut rng = StdRng::seed_from_u64(SEED);
  LabelCache::from_fn(MAP_SIZE, |_, _| rng.random_bool(0.9))
}

fn fresh_root() -> (QuadNode, LayerStatsRegistry) {
  (
    QuadNode::new(NavLayer::Air, 0, 0, MAP_SIZE, 0, 0),
    LayerStatsRegistry::new(),
  )
}

/// Recursive variant on the map-scale fixture.
fn bench_recursive(c: &mut Criterion) {
  let cache = map_cache();

  c.bench_function("quadtree::compress (512² threshold 8)", |b| {
    b.iter(|| {
      let (mut root, mut stats) = fresh_root();
      root.compress(black_box(&cache), 8, &mut stats);
      black_box(root)
    })
  });
}

/// Eager baseline on the same fixture.
fn bench_reference(c: &mut Criterion) {
  let cache = map_cache();

  c.bench_function("quadtree::compress_reference (512² threshold 8)", |b| {
    b.iter(|| {
      let (mut root, mut stats) = fresh_root();
      root.compress_reference(black_box(&cache), 8, &mut stats);
      black_box(root)
    })
  });
}

/// Direct comparison across thresholds.
fn bench_threshold_sweep(c: &mut Criterion) {
  let mut group = c.benchmark_group("compress_comparison");
  let cache = map_cache();

  for min_size in [1u32, 2, 4, 8] {
    group.bench_with_input(
      BenchmarkId::new("recursive", format!("min={}", min_size)),
      &min_size,
      |b, &min_size| {
        b.iter(|| {
          let (mut root, mut stats) = fresh_root();
          root.compress(black_box(&cache), min_size, &mut stats);
          black_box(root)
        })
      },
    );

    group.bench_with_input(
      BenchmarkId::new("reference", format!("min={}", min_size)),
      &min_size,
      |b, &min_size| {
        b.iter(|| {
          let (mut root, mut stats) = fresh_root();
          root.compress_reference(black_box(&cache), min_size, &mut stats);
          black_box(root)
        })
      },
    );
  }

  group.finish();
}

criterion_group!(benches, bench_recursive, bench_reference, bench_threshold_sweep);
criterion_main!(benches);
