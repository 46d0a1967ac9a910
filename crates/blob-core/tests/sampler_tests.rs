use blob_core::constants::{BASE_RATIO, DISPLACEMENT_GAIN, PROXIMITY_BIAS};
use blob_core::DisplacementField;
use glam::Vec3;
use noise::{NoiseFn, Simplex};

fn test_points() -> Vec<Vec3> {
    vec![
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(0.0, 100.0, 0.0),
        Vec3::new(0.0, 0.0, 100.0),
        Vec3::new(-70.7, 70.7, 0.0),
        Vec3::new(33.0, -45.0, 81.0),
        Vec3::new(-12.5, -60.0, -27.0),
    ]
}

#[test]
fn output_is_uniform_scaling_of_reference() {
    let field = DisplacementField::new(1);
    let reference = test_points();
    let live = field.displace(&reference, 1234.0, 0.6);
    assert_eq!(live.len(), reference.len());
    for (r, out) in reference.iter().zip(&live) {
        // Collinear through the origin: per-component ratios must agree
        // wherever the reference component is meaningfully nonzero.
        let mut ratios = Vec::new();
        for (rc, oc) in [(r.x, out.x), (r.y, out.y), (r.z, out.z)] {
            if rc.abs() > 1e-3 {
                ratios.push(oc / rc);
            } else {
                assert!(oc.abs() < 1e-3, "zero component became nonzero: {oc}");
            }
        }
        let min = ratios.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ratios.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(
            max - min < 1e-4,
            "non-uniform scaling for {r:?}: ratios {ratios:?}"
        );
    }
}

#[test]
fn ratio_stays_in_nominal_bounds() {
    let field = DisplacementField::new(3);
    for &proximity in &[0.0f32, 0.25, 0.5, 0.75, 1.0] {
        for step in 0..50 {
            let time = step as f32 * 97.0;
            for r in test_points() {
                let ratio = field.ratio_at(r, time, proximity);
                assert!(
                    (0.47 - 1e-2..=1.13 + 1e-2).contains(&ratio),
                    "ratio {ratio} out of bounds at t={time} proximity={proximity}"
                );
            }
        }
    }
}

#[test]
fn sampler_is_deterministic() {
    let field = DisplacementField::new(9);
    let reference = test_points();
    let a = field.displace(&reference, 555.0, 0.4);
    let b = field.displace(&reference, 555.0, 0.4);
    assert_eq!(a, b, "identical inputs must yield identical output");
}

#[test]
fn sampler_is_stateless_across_frames() {
    let field = DisplacementField::new(9);
    let reference = test_points();
    let first = field.displace(&reference, 10.0, 0.3);
    // An unrelated frame in between must not perturb a repeat of the first.
    let _other = field.displace(&reference, 9999.0, 0.9);
    let again = field.displace(&reference, 10.0, 0.3);
    assert_eq!(first, again, "sampler output depends on prior frames");
}

#[test]
fn empty_reference_is_a_noop() {
    let field = DisplacementField::new(0);
    assert!(field.displace(&[], 100.0, 0.5).is_empty());

    let mut live = vec![Vec3::ONE; 4];
    field.displace_into(&[], 100.0, 0.5, &mut live);
    assert!(live.is_empty(), "stale live vertices were kept");
}

#[test]
fn single_vertex_matches_hand_computed_ratio() {
    // ReferenceGeometry = [(100, 0, 0)], time = 0, proximity = 0:
    // the noise coordinate is (100 * 0.006, 0, 0) = (0.6, 0, 0).
    let seed = 7;
    let field = DisplacementField::new(seed);
    let n = Simplex::new(seed).get([0.6, 0.0, 0.0]) as f32;
    let expected_ratio = n * DISPLACEMENT_GAIN * PROXIMITY_BIAS + BASE_RATIO;

    let live = field.displace(&[Vec3::new(100.0, 0.0, 0.0)], 0.0, 0.0);
    assert_eq!(live.len(), 1);
    assert!(
        (live[0].x - 100.0 * expected_ratio).abs() < 1e-4,
        "x = {}, expected {}",
        live[0].x,
        100.0 * expected_ratio
    );
    assert!(live[0].y.abs() < 1e-6);
    assert!(live[0].z.abs() < 1e-6);
}

#[test]
fn displace_into_reuses_buffer_len() {
    let field = DisplacementField::new(2);
    let reference = test_points();
    let mut live = Vec::new();
    field.displace_into(&reference, 42.0, 0.1, &mut live);
    assert_eq!(live.len(), reference.len());
    field.displace_into(&reference[..2], 42.0, 0.1, &mut live);
    assert_eq!(live.len(), 2, "live buffer must track the reference length");
}
