//! Quadtree module - the compressed label tree and its construction.
//!
//! A [`QuadNode`] describes an axis-aligned square sub-region of a
//! walkability grid. Compression turns a fresh root node into either a single
//! leaf (the whole region shares one label) or an internal node whose four
//! children recursively partition the region, subdividing only where cells
//! disagree.
//!
//! # Child Order
//!
//! Children are stored row-major over the quadrants (z outer, x inner):
//!
//! ```text
//! +---+---+
//! | 0 | 1 |   index 0: (ox,        oz)
//! +---+---+   index 1: (ox + half, oz)
//! | 2 | 3 |   index 2: (ox,        oz + half)
//! +---+---+   index 3: (ox + half, oz + half)
//! ```
//!
//! # Module Structure
//!
//! - [`node`]: `QuadNode` - tree node type, geometry, and read API
//! - [`compress`]: preferred single-pass recursive compression
//! - [`reference`]: eager allocate-then-prune baseline, kept for the
//!   benchmark comparison; produces bit-identical trees and statistics

pub mod compress;
pub mod node;
pub mod reference;

// Re-exports
pub use node::{NodeKind, QuadNode};
