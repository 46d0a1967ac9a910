use glam::Vec3;
use noise::{NoiseFn, Simplex};

use crate::constants::{
    BASE_RATIO, DISPLACEMENT_GAIN, NOISE_FREQ_XY, NOISE_FREQ_Z, NOISE_TIME_FREQ, PROXIMITY_BIAS,
};

/// Simplex-noise displacement field driving the per-frame blob deformation.
///
/// Each output vertex is the reference vertex scaled uniformly by a ratio
/// sampled from the field, so every frame is an independent function of
/// (reference, time, proximity). Nothing accumulates onto the previous
/// frame's output, which keeps the deformation drift-free.
#[derive(Debug)]
pub struct DisplacementField {
    simplex: Simplex,
}

impl DisplacementField {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
        }
    }

    /// Scale ratio for a single reference point.
    ///
    /// With the noise sample in [-1, 1] and proximity in its nominal [0, 1]
    /// range the ratio stays inside [0.47, 1.13].
    pub fn ratio_at(&self, r: Vec3, time: f32, proximity: f32) -> f32 {
        let n = self.simplex.get([
            (r.x * NOISE_FREQ_XY + time * NOISE_TIME_FREQ) as f64,
            (r.y * NOISE_FREQ_XY + time * NOISE_TIME_FREQ) as f64,
            (r.z * NOISE_FREQ_Z) as f64,
        ]) as f32;
        n * DISPLACEMENT_GAIN * (proximity + PROXIMITY_BIAS) + BASE_RATIO
    }

    /// Displace `reference` into `live`, replacing its previous contents.
    /// An empty reference simply produces an empty output.
    pub fn displace_into(
        &self,
        reference: &[Vec3],
        time: f32,
        proximity: f32,
        live: &mut Vec<Vec3>,
    ) {
        live.clear();
        live.extend(
            reference
                .iter()
                .map(|&r| r * self.ratio_at(r, time, proximity)),
        );
    }

    /// Allocating convenience form of [`displace_into`](Self::displace_into).
    pub fn displace(&self, reference: &[Vec3], time: f32, proximity: f32) -> Vec<Vec3> {
        let mut live = Vec::with_capacity(reference.len());
        self.displace_into(reference, time, proximity, &mut live);
        live
    }
}
