use glam::{Mat4, Vec2, Vec3};

use crate::constants::{ROLL_BASE, ROLL_SPAN, YAW_BASE, YAW_SPAN};
use crate::math::map_range;
use crate::pointer::PointerTracker;
use crate::sampler::DisplacementField;
use crate::shape::{segments_for_width, ShapeGeometry, ShapeKind};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("viewport has zero area: {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

/// Per-frame parameters for the renderer, produced by [`BlobSession::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Rotation about Y, radians; sweeps [-4, 0] as the pointer crosses the
    /// viewport left to right.
    pub yaw: f32,
    /// Rotation about Z, radians; sweeps [4, 0] top to bottom.
    pub roll: f32,
    /// Uniform mesh scale from the external spring hook.
    pub scale: f32,
}

impl FrameParams {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
            * Mat4::from_rotation_z(self.roll)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Owns the active shape, its reference and live geometry, and the pointer
/// state, and advances them once per frame.
///
/// The live buffer is recomputed wholesale from the reference every tick;
/// the two always have equal length and index correspondence.
#[derive(Debug)]
pub struct BlobSession {
    kind: ShapeKind,
    reference: ShapeGeometry,
    live: Vec<Vec3>,
    pointer: PointerTracker,
    field: DisplacementField,
    viewport: Vec2,
    scale: f32,
}

impl BlobSession {
    /// The first shape is always a sphere; cycling starts from there.
    pub fn new(viewport: Vec2, seed: u32) -> Result<Self, SessionError> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Err(SessionError::EmptyViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        let kind = ShapeKind::Sphere;
        let reference = ShapeGeometry::build(kind, segments_for_width(viewport.x));
        let live = reference.positions.clone();
        Ok(Self {
            kind,
            reference,
            live,
            pointer: PointerTracker::new(viewport),
            field: DisplacementField::new(seed),
            viewport,
            scale: 1.0,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn live_positions(&self) -> &[Vec3] {
        &self.live
    }

    pub fn reference_positions(&self) -> &[Vec3] {
        &self.reference.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.reference.indices
    }

    pub fn proximity(&self) -> f32 {
        self.pointer.proximity(self.viewport)
    }

    /// Advance to the next shape and rebuild the reference geometry at the
    /// density for the current viewport width. The previous geometry is
    /// discarded wholesale; there is no morph between shapes.
    pub fn cycle_shape(&mut self) {
        self.kind = self.kind.next();
        self.reference = ShapeGeometry::build(self.kind, segments_for_width(self.viewport.x));
        self.live = self.reference.positions.clone();
        log::debug!(
            "shape cycled to {:?} ({} vertices)",
            self.kind,
            self.live.len()
        );
    }

    /// Record the latest raw pointer position in viewport coordinates.
    pub fn pointer_moved(&mut self, p: Vec2) {
        self.pointer.set_target(p);
    }

    /// Update the viewport used for rotation mapping, proximity, and the
    /// density of subsequently built shapes. The pointer's reference distance
    /// stays as captured at construction.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.viewport = viewport;
        }
    }

    /// Uniform scale hook for an externally animated spring. Defaults to 1.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// One frame: ease the pointer, derive the rotation angles from it, then
    /// refresh the live geometry from the reference through the displacement
    /// field. `time` is a monotonic millisecond clock.
    pub fn tick(&mut self, time: f32, dt_sec: f32) -> FrameParams {
        self.pointer.update(dt_sec);
        let p = self.pointer.position();
        let yaw = YAW_BASE + map_range(p.x, 0.0, self.viewport.x, 0.0, YAW_SPAN);
        let roll = ROLL_BASE + map_range(p.y, 0.0, self.viewport.y, 0.0, ROLL_SPAN);
        let proximity = self.pointer.proximity(self.viewport);
        self.field
            .displace_into(&self.reference.positions, time, proximity, &mut self.live);
        FrameParams {
            yaw,
            roll,
            scale: self.scale,
        }
    }
}
