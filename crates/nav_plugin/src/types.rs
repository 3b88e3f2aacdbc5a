//! Core types shared across the crate.

/// Movement layer - an independent movement domain with its own walkability
/// grid and its own statistics bucket.
///
/// Layers never interact: compressing the land grid reads and writes nothing
/// belonging to the air grid. The layer is stamped on every tree node so
/// downstream consumers (pathfinder, debug views) can tell trees apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NavLayer {
  /// Flying units - usually everything except map borders is pathable.
  Air,
  /// Ground units.
  Land,
  /// Units that traverse both land and shallow water.
  Amphibious,
}

impl NavLayer {
  /// All layers, in declaration order.
  pub const ALL: [NavLayer; 3] = [NavLayer::Air, NavLayer::Land, NavLayer::Amphibious];
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
