use blob_core::{BlobSession, FrameParams, SessionError, ShapeKind};
use glam::{Vec2, Vec3};

fn make_session() -> BlobSession {
    BlobSession::new(Vec2::new(900.0, 600.0), 42).expect("session")
}

#[test]
fn first_shape_is_a_dense_sphere() {
    let session = make_session();
    assert_eq!(session.kind(), ShapeKind::Sphere);
    // 900 px wide viewport selects 80 segments: an 81x81 vertex grid.
    assert_eq!(session.live_positions().len(), 81 * 81);
    assert_eq!(
        session.live_positions().len(),
        session.reference_positions().len()
    );
}

#[test]
fn zero_area_viewport_is_a_construction_error() {
    let err = BlobSession::new(Vec2::ZERO, 0).unwrap_err();
    assert!(matches!(err, SessionError::EmptyViewport { .. }), "{err}");
}

#[test]
fn three_activations_visit_torus_box_sphere() {
    let mut session = make_session();
    let mut seen = Vec::new();
    for _ in 0..3 {
        session.cycle_shape();
        seen.push(session.kind());
    }
    assert_eq!(seen, [ShapeKind::Torus, ShapeKind::Box, ShapeKind::Sphere]);
}

#[test]
fn cycle_uses_the_current_viewport_density() {
    let mut session = make_session();
    session.resize(Vec2::new(400.0, 300.0));
    session.cycle_shape();
    assert_eq!(session.kind(), ShapeKind::Torus);
    // 400 px wide viewport selects 40 segments: a 41x41 vertex grid.
    assert_eq!(session.live_positions().len(), 41 * 41);
    assert_eq!(
        session.live_positions().len(),
        session.reference_positions().len()
    );
}

#[test]
fn tick_keeps_live_and_reference_in_lockstep() {
    let mut session = make_session();
    session.tick(123.0, 0.016);
    assert_eq!(
        session.live_positions().len(),
        session.reference_positions().len()
    );
    let changed = session
        .live_positions()
        .iter()
        .zip(session.reference_positions())
        .any(|(l, r)| l != r);
    assert!(changed, "displacement left the reference untouched");
}

#[test]
fn tick_is_repeatable_for_fixed_inputs() {
    let mut session = make_session();
    session.tick(50.0, 0.0);
    let first: Vec<Vec3> = session.live_positions().to_vec();
    session.tick(50.0, 0.0);
    assert_eq!(
        first,
        session.live_positions(),
        "same (time, pointer) must reproduce the same geometry"
    );
}

#[test]
fn rotation_defaults_with_pointer_at_origin() {
    let mut session = make_session();
    let params = session.tick(0.0, 0.0);
    assert!((params.yaw - -4.0).abs() < 1e-5, "yaw {}", params.yaw);
    assert!((params.roll - 4.0).abs() < 1e-5, "roll {}", params.roll);
    assert_eq!(params.scale, 1.0);
}

#[test]
fn rotation_at_viewport_center_is_halfway() {
    let mut session = make_session();
    session.pointer_moved(Vec2::new(450.0, 300.0));
    let mut params = session.tick(0.0, 0.0);
    for _ in 0..200 {
        params = session.tick(0.0, 0.1);
    }
    assert!((params.yaw - -2.0).abs() < 1e-2, "yaw {}", params.yaw);
    assert!((params.roll - 2.0).abs() < 1e-2, "roll {}", params.roll);
}

#[test]
fn external_spring_scale_passes_through() {
    let mut session = make_session();
    session.set_scale(1.4);
    let params = session.tick(0.0, 0.0);
    assert_eq!(params.scale, 1.4);
}

#[test]
fn model_matrix_applies_uniform_scale() {
    let params = FrameParams {
        yaw: 0.0,
        roll: 0.0,
        scale: 2.0,
    };
    let p = params.model_matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5, "{p:?}");
}

#[test]
fn resize_ignores_degenerate_viewports() {
    let mut session = make_session();
    session.resize(Vec2::new(0.0, 600.0));
    assert_eq!(session.viewport(), Vec2::new(900.0, 600.0));
    session.resize(Vec2::new(1200.0, 700.0));
    assert_eq!(session.viewport(), Vec2::new(1200.0, 700.0));
}
