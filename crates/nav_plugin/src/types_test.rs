use std::collections::HashSet;

use super::*;

/// Layers are distinct hashable keys (registry invariant).
#[test]
fn layers_are_distinct_keys() {
  let set: HashSet<NavLayer> = NavLayer::ALL.iter().copied().collect();
  assert_eq!(set.len(), 3, "All layers must hash to distinct keys");
}

#[test]
fn all_covers_every_variant() {
  assert!(NavLayer::ALL.contains(&NavLayer::Air));
  assert!(NavLayer::ALL.contains(&NavLayer::Land));
  assert!(NavLayer::ALL.contains(&NavLayer::Amphibious));
}
