use blob_core::PointerTracker;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn converge(tracker: &mut PointerTracker) {
    for _ in 0..400 {
        tracker.update(0.1);
    }
}

#[test]
fn starts_at_origin_with_zero_proximity() {
    let tracker = PointerTracker::new(VIEWPORT);
    assert_eq!(tracker.position(), Vec2::ZERO);
    // The origin IS the reference distance from the center, so proximity is 0.
    assert!(tracker.proximity(VIEWPORT).abs() < 1e-6);
}

#[test]
fn proximity_is_one_at_viewport_center() {
    let mut tracker = PointerTracker::new(VIEWPORT);
    tracker.set_target(VIEWPORT * 0.5);
    converge(&mut tracker);
    assert!(
        (tracker.proximity(VIEWPORT) - 1.0).abs() < 1e-3,
        "proximity at center: {}",
        tracker.proximity(VIEWPORT)
    );
}

#[test]
fn zero_reference_distance_yields_zero_proximity() {
    // A zero-area viewport puts the center on the origin pointer; the
    // division is skipped rather than producing NaN.
    let mut tracker = PointerTracker::new(Vec2::ZERO);
    assert_eq!(tracker.proximity(Vec2::ZERO), 0.0);
    tracker.set_target(Vec2::new(50.0, 50.0));
    converge(&mut tracker);
    assert_eq!(tracker.proximity(Vec2::ZERO), 0.0);
}

#[test]
fn reference_distance_is_not_recomputed_for_new_viewports() {
    // Captured once at construction: distance (0,0) -> (400,300) = 500.
    let tracker = PointerTracker::new(VIEWPORT);
    assert!((tracker.max_center_distance() - 500.0).abs() < 1e-4);

    // Against a half-size viewport the pointer sits 250 from the new center,
    // still normalized by the stale 500.
    let small = Vec2::new(400.0, 300.0);
    assert!(
        (tracker.proximity(small) - 0.5).abs() < 1e-4,
        "stale normalization changed: {}",
        tracker.proximity(small)
    );
}

#[test]
fn proximity_is_unclamped_beyond_reference_distance() {
    let mut tracker = PointerTracker::new(VIEWPORT);
    // (-400, -300) is 1000 from the center, twice the reference distance.
    tracker.set_target(Vec2::new(-400.0, -300.0));
    converge(&mut tracker);
    let p = tracker.proximity(VIEWPORT);
    assert!(p < 0.0, "expected a negative factor, got {p}");
    assert!((p + 1.0).abs() < 1e-2, "expected roughly -1, got {p}");
}

#[test]
fn easing_approaches_target_monotonically() {
    let mut tracker = PointerTracker::new(VIEWPORT);
    let target = Vec2::new(640.0, 120.0);
    tracker.set_target(target);
    let mut prev = tracker.position().distance(target);
    for _ in 0..20 {
        tracker.update(0.016);
        let d = tracker.position().distance(target);
        assert!(d < prev, "distance to target increased: {d} > {prev}");
        prev = d;
    }
}

#[test]
fn zero_dt_update_does_not_move() {
    let mut tracker = PointerTracker::new(VIEWPORT);
    tracker.set_target(Vec2::new(100.0, 100.0));
    tracker.update(0.0);
    assert_eq!(tracker.position(), Vec2::ZERO);
}
