//! nav_plugin - Framework/engine independent navigation grid compression
//!
//! This crate compresses a dense per-cell walkability classification over a
//! square region into a sparse quadtree. Uniform regions merge into single
//! labeled leaves; only mixed regions subdivide. The result is the
//! precomputation input for tile-based pathfinding: a hierarchical structure a
//! pathfinder can traverse without rescanning every cell.
//!
//! # Features
//!
//! - **Recursive compression**: single-pass scan-and-merge construction that
//!   never materializes children for uniform regions
//! - **Reference compression**: eager allocate-then-prune baseline producing
//!   bit-identical trees and statistics, kept as a correctness and
//!   performance yardstick
//! - **Per-layer statistics**: subdivision and leaf counters accumulated per
//!   movement layer (air, land, amphibious) in an explicit registry
//!
//! # Example
//!
//! ```
//! use nav_plugin::{LabelCache, LayerStatsRegistry, NavLayer, QuadNode};
//!
//! // 4x4 grid, everything walkable except one cell.
//! let cache = LabelCache::from_fn(4, |z, x| !(z == 1 && x == 2));
//! let mut stats = LayerStatsRegistry::default();
//!
//! let mut root = QuadNode::new(NavLayer::Land, 0, 0, 4, 0, 0);
//! root.compress(&cache, 2, &mut stats);
//!
//! assert_eq!(root.children().len(), 4);
//! assert_eq!(stats.get_or_create(NavLayer::Land).subdivisions, 1);
//! ```

pub mod grid;
pub mod stats;
pub mod types;

pub use grid::LabelCache;
pub use stats::{LayerStats, LayerStatsRegistry};
pub use types::NavLayer;

// Quadtree module: the compressed label tree and both compression algorithms
pub mod quadtree;
pub use quadtree::{NodeKind, QuadNode};
