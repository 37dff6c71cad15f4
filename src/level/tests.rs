//! Level domain: tests for layouts and sequencing.

use super::components::GoalLatch;
use super::spawn::layout_for;
use crate::core::LevelProgress;

#[test]
fn test_every_level_has_a_layout() {
    let progress = LevelProgress::default();
    for id in &progress.levels {
        let layout = layout_for(id);
        assert!(!layout.slabs.is_empty(), "level '{}' has no geometry", id);
        assert_ne!(layout.spawn, layout.goal);
    }
}

#[test]
fn test_unknown_level_falls_back() {
    let layout = layout_for("level_999");
    assert!(!layout.slabs.is_empty());
}

#[test]
fn test_layouts_differ_between_levels() {
    let first = layout_for("level_1");
    let second = layout_for("level_2");
    assert_ne!(first.spawn, second.spawn);
    assert_ne!(first.key, second.key);
}

#[test]
fn test_progress_advances_and_wraps() {
    let mut progress = LevelProgress::default();
    assert_eq!(progress.current_id(), "level_1");

    progress.advance();
    assert_eq!(progress.current_id(), "level_2");

    progress.advance();
    assert_eq!(progress.current_id(), "level_1");
}

#[test]
fn test_progress_with_empty_level_list() {
    let mut progress = LevelProgress::new(Vec::new());
    assert_eq!(progress.current_id(), "level_1");
    progress.advance();
    assert_eq!(progress.current_id(), "level_1");
}

#[test]
fn test_goal_latch_starts_unfired() {
    let latch = GoalLatch::default();
    assert!(!latch.fired);
}
