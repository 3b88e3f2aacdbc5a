//! Preferred recursive compression.
//!
//! Single descent over the region: base-case regions AND-scan their cells,
//! recursive regions combine the four quadrant results. Uniform quadrants
//! collapse upward without ever materializing children - the four child nodes
//! are only built at the lowest level where quadrants actually disagree.
//!
//! # Counter Attribution
//!
//! Each leaf is counted exactly once, at the level where it became a definite
//! child of an internal node (or at the root for a fully uniform region).
//! Each internal node records exactly one subdivision. Merged regions record
//! nothing themselves; their single leaf increment lands wherever the merged
//! leaf finally surfaces.

use crate::grid::LabelCache;
use crate::stats::{LayerStats, LayerStatsRegistry};
use crate::types::NavLayer;

use super::node::{NodeKind, QuadNode};

/// Outcome of compressing one region: a definite label when uniform, or the
/// four materialized children when mixed.
pub(super) enum RegionResult {
  Uniform(bool),
  Mixed(Box<[QuadNode; 4]>),
}

impl RegionResult {
  fn label(&self) -> Option<bool> {
    match self {
      RegionResult::Uniform(label) => Some(*label),
      RegionResult::Mixed(_) => None,
    }
  }
}

/// AND-scan a region row-major (z outer, x inner), short-circuiting on the
/// first unpathable cell.
pub(super) fn region_is_pathable(cache: &LabelCache, origin_x: u32, origin_z: u32, size: u32) -> bool {
  for z in origin_z..origin_z + size {
    for x in origin_x..origin_x + size {
      if !cache.get(z, x) {
        return false;
      }
    }
  }
  true
}

/// Shared context for one compression run.
struct Compressor<'a> {
  cache: &'a LabelCache,
  layer: NavLayer,
  base_x: i32,
  base_z: i32,
  min_size: u32,
}

impl Compressor<'_> {
  fn compress_region(
    &self,
    origin_x: u32,
    origin_z: u32,
    size: u32,
    stats: &mut LayerStats,
  ) -> RegionResult {
    if size == self.min_size {
      return RegionResult::Uniform(region_is_pathable(self.cache, origin_x, origin_z, size));
    }

    // Quadrants in child storage order (row-major, z outer then x inner).
    let half = size / 2;
    let outcomes = [
      self.compress_region(origin_x, origin_z, half, stats),
      self.compress_region(origin_x + half, origin_z, half, stats),
      self.compress_region(origin_x, origin_z + half, half, stats),
      self.compress_region(origin_x + half, origin_z + half, half, stats),
    ];

    // Merge decision: four definite, equal quadrants collapse upward.
    if let Some(shared) = outcomes[0].label() {
      if outcomes.iter().all(|o| o.label() == Some(shared)) {
        return RegionResult::Uniform(shared);
      }
    }

    // Mixed: materialize all four children, counting quadrants that became
    // definite leaves at this step. Deeper levels already counted theirs.
    let [q0, q1, q2, q3] = outcomes;
    let children = Box::new([
      self.materialize(q0, origin_x, origin_z, half, stats),
      self.materialize(q1, origin_x + half, origin_z, half, stats),
      self.materialize(q2, origin_x, origin_z + half, half, stats),
      self.materialize(q3, origin_x + half, origin_z + half, half, stats),
    ]);
    stats.subdivisions += 1;

    RegionResult::Mixed(children)
  }

  /// Turn one quadrant outcome into a child node.
  fn materialize(
    &self,
    outcome: RegionResult,
    origin_x: u32,
    origin_z: u32,
    size: u32,
    stats: &mut LayerStats,
  ) -> QuadNode {
    match outcome {
      RegionResult::Uniform(label) => {
        stats.record_leaf(label);
        QuadNode::leaf(self.layer, self.base_x, self.base_z, size, origin_x, origin_z, label)
      }
      RegionResult::Mixed(grandchildren) => QuadNode::internal(
        self.layer,
        self.base_x,
        self.base_z,
        size,
        origin_x,
        origin_z,
        grandchildren,
      ),
    }
  }
}

impl QuadNode {
  /// Compress this node's region, populating children and label and
  /// updating the layer's statistics bucket.
  ///
  /// `min_size` is the compression threshold: the smallest region side
  /// length at which cells are scanned directly instead of subdividing
  /// further.
  ///
  /// # Panics
  ///
  /// Panics if `min_size == 0`, if `size` is not reachable from `min_size`
  /// by repeated doubling, or if the region extends past the cache.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "quadtree::compress")
  )]
  pub fn compress(&mut self, cache: &LabelCache, min_size: u32, stats: &mut LayerStatsRegistry) {
    self.assert_compressible(cache, min_size);

    let stats = stats.get_or_create(self.layer());
    let (origin_x, origin_z) = self.origin();
    let compressor = Compressor {
      cache,
      layer: self.layer(),
      base_x: self.base().0,
      base_z: self.base().1,
      min_size,
    };

    match compressor.compress_region(origin_x, origin_z, self.size(), stats) {
      // A region uniform all the way to the top is a single trivial leaf.
      RegionResult::Uniform(label) => {
        stats.record_leaf(label);
        self.set_kind(NodeKind::Leaf(label));
      }
      RegionResult::Mixed(children) => self.set_kind(NodeKind::Internal(children)),
    }
  }
}

#[cfg(test)]
#[path = "compress_test.rs"]
mod compress_test;
