use glam::Vec2;

use crate::constants::POINTER_EASE_TAU_SEC;

/// Smoothed pointer position plus the proximity factor derived from it.
///
/// The reference distance used to normalize proximity is captured once at
/// construction, from the default origin pointer to the initial viewport
/// center, and is never recomputed afterwards -- resizing the viewport moves
/// the center but keeps the old normalization. Tests pin this behavior.
#[derive(Debug)]
pub struct PointerTracker {
    position: Vec2,
    target: Vec2,
    max_center_distance: f32,
}

impl PointerTracker {
    /// The pointer starts at the origin until the first move event arrives.
    pub fn new(viewport: Vec2) -> Self {
        let position = Vec2::ZERO;
        Self {
            position,
            target: position,
            max_center_distance: position.distance(viewport * 0.5),
        }
    }

    /// Record the latest raw pointer position; `update` eases toward it.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn max_center_distance(&self) -> f32 {
        self.max_center_distance
    }

    /// Ease the smoothed position toward the latest target. Exponential
    /// approach, so the step size is frame-rate independent.
    pub fn update(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec / POINTER_EASE_TAU_SEC).exp();
        self.position += (self.target - self.position) * alpha;
    }

    /// 1 at the viewport center, 0 at the captured reference distance.
    ///
    /// Not clamped: a pointer farther out than the reference distance yields
    /// a negative factor, which the displacement ratio tolerates. A zero
    /// reference distance yields 0 rather than a NaN.
    pub fn proximity(&self, viewport: Vec2) -> f32 {
        if self.max_center_distance <= f32::EPSILON {
            return 0.0;
        }
        1.0 - self.position.distance(viewport * 0.5) / self.max_center_distance
    }
}
