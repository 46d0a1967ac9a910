use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::constants::{
    BOX_SIZE, DENSE_MIN_VIEWPORT_WIDTH, DENSE_SEGMENTS, SHAPE_RADIUS, SPARSE_SEGMENTS,
    TORUS_TUBE_RADIUS,
};

/// The three blob shapes, cycled on activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Sphere,
    Torus,
}

impl ShapeKind {
    /// Fixed rotation: box -> sphere -> torus -> box.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Box => ShapeKind::Sphere,
            ShapeKind::Sphere => ShapeKind::Torus,
            ShapeKind::Torus => ShapeKind::Box,
        }
    }
}

/// Vertex density per axis/ring: dense on wide viewports, sparse otherwise.
pub fn segments_for_width(width: f32) -> u32 {
    if width > DENSE_MIN_VIEWPORT_WIDTH {
        DENSE_SEGMENTS
    } else {
        SPARSE_SEGMENTS
    }
}

/// Indexed triangle mesh: the reference vertex positions for a shape plus an
/// index buffer that makes it drawable. Positions are centered on the origin
/// so the displacement field can scale them radially.
#[derive(Clone, Debug, Default)]
pub struct ShapeGeometry {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl ShapeGeometry {
    pub fn build(kind: ShapeKind, segments: u32) -> Self {
        match kind {
            ShapeKind::Sphere => sphere(SHAPE_RADIUS, segments),
            ShapeKind::Box => cuboid(BOX_SIZE, segments),
            ShapeKind::Torus => torus(SHAPE_RADIUS, TORUS_TUBE_RADIUS, segments),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

// Two triangles per cell over a (cols+1) x (rows+1) vertex grid.
fn grid_indices(cols: u32, rows: u32, base: u32, out: &mut Vec<u32>) {
    for r in 0..rows {
        for c in 0..cols {
            let i0 = base + r * (cols + 1) + c;
            let i1 = i0 + 1;
            let i2 = i0 + (cols + 1);
            let i3 = i2 + 1;
            out.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
}

fn sphere(radius: f32, segments: u32) -> ShapeGeometry {
    let side = (segments + 1) as usize;
    let mut positions = Vec::with_capacity(side * side);
    for row in 0..=segments {
        let theta = row as f32 / segments as f32 * PI;
        for col in 0..=segments {
            let phi = col as f32 / segments as f32 * TAU;
            positions.push(Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.cos(),
                radius * theta.sin() * phi.sin(),
            ));
        }
    }
    let mut indices = Vec::new();
    grid_indices(segments, segments, 0, &mut indices);
    ShapeGeometry { positions, indices }
}

fn cuboid(size: f32, segments: u32) -> ShapeGeometry {
    let half = size * 0.5;
    let side = (segments + 1) as usize;
    let mut positions = Vec::with_capacity(6 * side * side);
    let mut indices = Vec::new();
    // One subdivided grid per face: outward normal plus the two in-plane axes.
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::X, Vec3::Y),
    ];
    for (normal, u_axis, v_axis) in faces {
        let base = positions.len() as u32;
        for row in 0..=segments {
            let fv = row as f32 / segments as f32 * size - half;
            for col in 0..=segments {
                let fu = col as f32 / segments as f32 * size - half;
                positions.push(normal * half + u_axis * fu + v_axis * fv);
            }
        }
        grid_indices(segments, segments, base, &mut indices);
    }
    ShapeGeometry { positions, indices }
}

fn torus(radius: f32, tube: f32, segments: u32) -> ShapeGeometry {
    let side = (segments + 1) as usize;
    let mut positions = Vec::with_capacity(side * side);
    for ring in 0..=segments {
        let u = ring as f32 / segments as f32 * TAU;
        for seg in 0..=segments {
            let v = seg as f32 / segments as f32 * TAU;
            let ring_radius = radius + tube * v.cos();
            positions.push(Vec3::new(
                ring_radius * u.cos(),
                ring_radius * u.sin(),
                tube * v.sin(),
            ));
        }
    }
    let mut indices = Vec::new();
    grid_indices(segments, segments, 0, &mut indices);
    ShapeGeometry { positions, indices }
}
