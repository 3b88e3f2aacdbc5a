//! Eager allocate-then-prune baseline compression.
//!
//! Functionally equivalent to [`QuadNode::compress`], but structurally
//! different: every non-base region allocates all four child nodes up front,
//! recurses into them, and only then prunes back to a single leaf when the
//! four children came back as leaves sharing one label. Uniform regions
//! therefore build a full row of children that merging immediately throws
//! away, which is what makes this variant measurably slower - it exists as
//! the benchmark baseline and as a cross-check that both shapes produce
//! identical trees and statistics.

use crate::grid::LabelCache;
use crate::stats::{LayerStats, LayerStatsRegistry};
use crate::types::NavLayer;

use super::compress::region_is_pathable;
use super::node::QuadNode;

/// The shared label of four leaf children, if they agree.
fn shared_leaf_label(children: &[QuadNode; 4]) -> Option<bool> {
  let first = children[0].label()?;
  children[1..]
    .iter()
    .all(|child| child.label() == Some(first))
    .then_some(first)
}

/// Shared context for one reference compression run.
struct ReferenceBuilder<'a> {
  cache: &'a LabelCache,
  layer: NavLayer,
  base_x: i32,
  base_z: i32,
  min_size: u32,
}

impl ReferenceBuilder<'_> {
  fn build_node(&self, origin_x: u32, origin_z: u32, size: u32, stats: &mut LayerStats) -> QuadNode {
    if size == self.min_size {
      let label = region_is_pathable(self.cache, origin_x, origin_z, size);
      return QuadNode::leaf(
        self.layer, self.base_x, self.base_z, size, origin_x, origin_z, label,
      );
    }

    // Allocate the full row of children before deciding anything.
    let half = size / 2;
    let children = Box::new([
      self.build_node(origin_x, origin_z, half, stats),
      self.build_node(origin_x + half, origin_z, half, stats),
      self.build_node(origin_x, origin_z + half, half, stats),
      self.build_node(origin_x + half, origin_z + half, half, stats),
    ]);

    // Prune: four agreeing leaves collapse back into one. Their counts were
    // never recorded, so the merged leaf still counts exactly once, at the
    // level where it finally surfaces.
    if let Some(label) = shared_leaf_label(&children) {
      return QuadNode::leaf(
        self.layer, self.base_x, self.base_z, size, origin_x, origin_z, label,
      );
    }

    for child in children.iter() {
      if let Some(label) = child.label() {
        stats.record_leaf(label);
      }
    }
    stats.subdivisions += 1;

    QuadNode::internal(
      self.layer, self.base_x, self.base_z, size, origin_x, origin_z, children,
    )
  }
}

impl QuadNode {
  /// Compress this node's region with the eager baseline algorithm.
  ///
  /// Same contract and the same resulting tree and statistics as
  /// [`QuadNode::compress`]; see the module docs for why both exist.
  ///
  /// # Panics
  ///
  /// Panics under the same preconditions as [`QuadNode::compress`].
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "quadtree::compress_reference")
  )]
  pub fn compress_reference(
    &mut self,
    cache: &LabelCache,
    min_size: u32,
    stats: &mut LayerStatsRegistry,
  ) {
    self.assert_compressible(cache, min_size);

    let stats = stats.get_or_create(self.layer());
    let (origin_x, origin_z) = self.origin();
    let builder = ReferenceBuilder {
      cache,
      layer: self.layer(),
      base_x: self.base().0,
      base_z: self.base().1,
      min_size,
    };

    let built = builder.build_node(origin_x, origin_z, self.size(), stats);
    if let Some(label) = built.label() {
      stats.record_leaf(label);
    }
    self.set_kind(built.into_kind());
  }
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;
