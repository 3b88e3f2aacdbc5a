//! Per-layer compression statistics.
//!
//! Compression accumulates counters as a side effect: one subdivision per
//! internal node, one leaf increment per leaf, attributed at the lowest level
//! where the leaf became definite. Callers read the counters after
//! `compress` returns.
//!
//! The registry is an explicit context passed `&mut` into every compression
//! call - never a process-wide global. A fresh registry (or `reset`) before
//! each independent run keeps runs from leaking counters into each other, and
//! the `&mut` borrow makes concurrent updates to one layer a compile error
//! rather than a data race.

use std::collections::HashMap;

use crate::types::NavLayer;

/// Counters for one movement layer, updated during compression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerStats {
  /// Number of nodes split into four children.
  pub subdivisions: u32,
  /// Number of leaves labeled pathable.
  pub pathable_leaves: u32,
  /// Number of leaves labeled unpathable.
  pub unpathable_leaves: u32,
  /// Reserved for the neighbor-linking pass. Unused by compression.
  pub neighbors: u32,
  /// Reserved for the label-propagation pass. Unused by compression.
  pub labels: u32,
}

impl LayerStats {
  /// Total leaves recorded for this layer.
  #[inline]
  pub fn total_leaves(&self) -> u32 {
    self.pathable_leaves + self.unpathable_leaves
  }

  /// Record one leaf increment for the given label.
  #[inline]
  pub(crate) fn record_leaf(&mut self, pathable: bool) {
    if pathable {
      self.pathable_leaves += 1;
    } else {
      self.unpathable_leaves += 1;
    }
  }
}

/// Registry of per-layer statistics buckets.
///
/// Buckets are created lazily on first access and live until `reset` (or the
/// registry itself) drops them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerStatsRegistry {
  layers: HashMap<NavLayer, LayerStats>,
}

impl LayerStatsRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Get the bucket for a layer, inserting a zeroed one on first access.
  pub fn get_or_create(&mut self, layer: NavLayer) -> &mut LayerStats {
    self.layers.entry(layer).or_default()
  }

  /// Get the bucket for a layer, if it has been touched.
  pub fn get(&self, layer: NavLayer) -> Option<&LayerStats> {
    self.layers.get(&layer)
  }

  /// Drop all buckets. Call between independent compression runs.
  pub fn reset(&mut self) {
    self.layers.clear();
  }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
