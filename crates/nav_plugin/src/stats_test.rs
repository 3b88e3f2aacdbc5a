use super::*;

/// First access creates a zeroed bucket.
#[test]
fn get_or_create_starts_zeroed() {
  let mut registry = LayerStatsRegistry::new();
  let stats = registry.get_or_create(NavLayer::Land);

  assert_eq!(stats.subdivisions, 0);
  assert_eq!(stats.pathable_leaves, 0);
  assert_eq!(stats.unpathable_leaves, 0);
  assert_eq!(stats.neighbors, 0);
  assert_eq!(stats.labels, 0);
}

#[test]
fn get_returns_none_for_untouched_layer() {
  let mut registry = LayerStatsRegistry::new();
  registry.get_or_create(NavLayer::Air).subdivisions = 3;

  assert!(registry.get(NavLayer::Air).is_some());
  assert!(registry.get(NavLayer::Land).is_none());
}

/// Layers accumulate independently.
#[test]
fn layers_do_not_share_buckets() {
  let mut registry = LayerStatsRegistry::new();
  registry.get_or_create(NavLayer::Air).pathable_leaves = 5;
  registry.get_or_create(NavLayer::Amphibious).unpathable_leaves = 7;

  assert_eq!(registry.get(NavLayer::Air).unwrap().pathable_leaves, 5);
  assert_eq!(registry.get(NavLayer::Air).unwrap().unpathable_leaves, 0);
  assert_eq!(
    registry.get(NavLayer::Amphibious).unwrap().unpathable_leaves,
    7
  );
}

/// Reset isolates independent runs.
#[test]
fn reset_drops_all_buckets() {
  let mut registry = LayerStatsRegistry::new();
  registry.get_or_create(NavLayer::Land).subdivisions = 9;

  registry.reset();

  assert!(registry.get(NavLayer::Land).is_none());
  assert_eq!(registry.get_or_create(NavLayer::Land).subdivisions, 0);
}

#[test]
fn total_leaves_sums_both_labels() {
  let stats = LayerStats {
    pathable_leaves: 6,
    unpathable_leaves: 1,
    ..Default::default()
  };
  assert_eq!(stats.total_leaves(), 7);
}
