// Shared tuning constants for the blob visualizer.

// Displacement field. Spatial frequencies are per world unit; the time
// frequency assumes a millisecond clock.
pub const NOISE_FREQ_XY: f32 = 0.006;
pub const NOISE_FREQ_Z: f32 = 0.010;
pub const NOISE_TIME_FREQ: f32 = 0.0005;
pub const DISPLACEMENT_GAIN: f32 = 0.3; // how far noise pushes the surface
pub const PROXIMITY_BIAS: f32 = 0.1; // keeps the blob breathing with the pointer far away
pub const BASE_RATIO: f32 = 0.8; // resting scale of every vertex

pub const NOISE_SEED: u32 = 0;

// Shape sizing
pub const SHAPE_RADIUS: f32 = 100.0;
pub const TORUS_TUBE_RADIUS: f32 = 25.0;
pub const BOX_SIZE: f32 = 100.0;

// Vertex density per axis/ring, chosen from the viewport width
pub const DENSE_SEGMENTS: u32 = 80;
pub const SPARSE_SEGMENTS: u32 = 40;
pub const DENSE_MIN_VIEWPORT_WIDTH: f32 = 575.0;

// Pointer smoothing time constant (exponential ease toward the raw pointer)
pub const POINTER_EASE_TAU_SEC: f32 = 0.25;

// Mesh rotation driven by pointer position, in radians:
// yaw sweeps [-4, 0] left to right, roll sweeps [4, 0] top to bottom.
pub const YAW_BASE: f32 = -4.0;
pub const YAW_SPAN: f32 = 4.0;
pub const ROLL_BASE: f32 = 4.0;
pub const ROLL_SPAN: f32 = -4.0;

// Camera: wide lens pulled back along +Z so the 100-unit blob fills the frame
pub const CAMERA_FOV_DEG: f32 = 100.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_Z: f32 = 300.0;

// Background clear color (light gray page backdrop)
pub const CLEAR_COLOR: [f64; 4] = [0.922, 0.922, 0.922, 1.0];
