//! QuadNode - one square region of the compressed label tree.
//!
//! A node owns its children exclusively; the tree has no back-references and
//! no sharing, so it is plain owned data with no cells or reference counting.
//! After compression the tree is read-only.

use crate::grid::LabelCache;
use crate::types::NavLayer;

/// Offsets of the four quadrants in units of `size / 2`, as `(dx, dz)`,
/// row-major (z outer, x inner). Also the child storage order.
pub(super) const QUADRANT_OFFSETS: [(u32, u32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Compression state of a node.
///
/// Leaf/internal exclusivity is structural: a leaf carries its label and
/// nothing else, an internal node carries exactly four children and no label.
/// A node can never hold 1, 2, or 3 children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
  /// Fresh node; `compress` has not run yet.
  Uncompressed,
  /// Uniform region: `true` = fully pathable, `false` = fully unpathable.
  Leaf(bool),
  /// Mixed region subdivided into four quadrants.
  Internal(Box<[QuadNode; 4]>),
}

/// One square region of a compressed label tree.
///
/// Constructed by the caller for the full region, then compressed exactly
/// once via [`QuadNode::compress`] or [`QuadNode::compress_reference`].
/// Compressing the same node twice is caller misuse and unsupported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadNode {
  /// Movement layer this tree belongs to.
  layer: NavLayer,
  /// World-space base offset, carried for downstream consumers (pathfinder
  /// coordinate mapping). Not used by compression.
  base_x: i32,
  base_z: i32,
  /// Top-left cell of this region within the grid.
  origin_x: u32,
  origin_z: u32,
  /// Side length in cells. Halves at each tree level down to the
  /// compression threshold.
  size: u32,
  kind: NodeKind,
}

impl QuadNode {
  /// Create a fresh, uncompressed node covering `size * size` cells at
  /// `(origin_x, origin_z)`.
  pub fn new(
    layer: NavLayer,
    base_x: i32,
    base_z: i32,
    size: u32,
    origin_x: u32,
    origin_z: u32,
  ) -> Self {
    Self {
      layer,
      base_x,
      base_z,
      origin_x,
      origin_z,
      size,
      kind: NodeKind::Uncompressed,
    }
  }

  /// Build a leaf node directly.
  pub(super) fn leaf(
    layer: NavLayer,
    base_x: i32,
    base_z: i32,
    size: u32,
    origin_x: u32,
    origin_z: u32,
    label: bool,
  ) -> Self {
    Self {
      layer,
      base_x,
      base_z,
      origin_x,
      origin_z,
      size,
      kind: NodeKind::Leaf(label),
    }
  }

  /// Build an internal node from its four children.
  pub(super) fn internal(
    layer: NavLayer,
    base_x: i32,
    base_z: i32,
    size: u32,
    origin_x: u32,
    origin_z: u32,
    children: Box<[QuadNode; 4]>,
  ) -> Self {
    Self {
      layer,
      base_x,
      base_z,
      origin_x,
      origin_z,
      size,
      kind: NodeKind::Internal(children),
    }
  }

  pub(super) fn set_kind(&mut self, kind: NodeKind) {
    self.kind = kind;
  }

  pub(super) fn into_kind(self) -> NodeKind {
    self.kind
  }

  /// Movement layer this node is stamped with.
  #[inline]
  pub fn layer(&self) -> NavLayer {
    self.layer
  }

  /// World-space base offset `(base_x, base_z)`.
  #[inline]
  pub fn base(&self) -> (i32, i32) {
    (self.base_x, self.base_z)
  }

  /// Top-left cell `(origin_x, origin_z)` of this region within the grid.
  #[inline]
  pub fn origin(&self) -> (u32, u32) {
    (self.origin_x, self.origin_z)
  }

  /// Side length of this region in cells.
  #[inline]
  pub fn size(&self) -> u32 {
    self.size
  }

  /// Compression state of this node.
  #[inline]
  pub fn kind(&self) -> &NodeKind {
    &self.kind
  }

  /// Definite label, if this node is a leaf.
  ///
  /// `Some(true)` = fully pathable, `Some(false)` = fully unpathable,
  /// `None` = internal (mixed, subdivided) or not yet compressed.
  #[inline]
  pub fn label(&self) -> Option<bool> {
    match &self.kind {
      NodeKind::Leaf(label) => Some(*label),
      _ => None,
    }
  }

  /// Whether this node is a leaf with a definite label.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.kind, NodeKind::Leaf(_))
  }

  /// Read-only view of the children: four nodes for an internal node, empty
  /// otherwise.
  pub fn children(&self) -> &[QuadNode] {
    match &self.kind {
      NodeKind::Internal(children) => &children[..],
      _ => &[],
    }
  }

  /// Origin of the quadrant stored at `index` (0-3), in child storage order.
  pub fn quadrant_origin(&self, index: usize) -> (u32, u32) {
    let half = self.size / 2;
    let (dx, dz) = QUADRANT_OFFSETS[index];
    (self.origin_x + dx * half, self.origin_z + dz * half)
  }

  /// Count leaves by traversal. An uncompressed node has none.
  pub fn leaf_count(&self) -> u32 {
    match &self.kind {
      NodeKind::Uncompressed => 0,
      NodeKind::Leaf(_) => 1,
      NodeKind::Internal(children) => children.iter().map(QuadNode::leaf_count).sum(),
    }
  }

  /// Validate the region/threshold pair before compression.
  ///
  /// Fails fast on a bad pair instead of recursing forever or producing a
  /// plausible-but-wrong tree.
  pub(super) fn assert_compressible(&self, cache: &LabelCache, min_size: u32) {
    assert!(min_size >= 1, "min_size must be at least 1");
    assert!(
      self.size >= min_size
        && self.size % min_size == 0
        && (self.size / min_size).is_power_of_two(),
      "region size {} is not reachable from min_size {} by repeated doubling",
      self.size,
      min_size
    );
    assert!(
      self.origin_x + self.size <= cache.size() && self.origin_z + self.size <= cache.size(),
      "region at ({}, {}) with size {} exceeds grid of size {}",
      self.origin_x,
      self.origin_z,
      self.size,
      cache.size()
    );
    debug_assert!(
      matches!(self.kind, NodeKind::Uncompressed),
      "compress called twice on the same node"
    );
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
