//! Core logic for the blob visualizer: shape cycling, pointer smoothing, and
//! the simplex-noise displacement field that deforms the mesh each frame.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for both native and web targets. The front-ends consume them to
//! drive a wgpu surface; nothing in this crate touches a window or the DOM.

pub mod camera;
pub mod constants;
pub mod math;
pub mod pointer;
pub mod sampler;
pub mod session;
pub mod shape;

pub static BLOB_WGSL: &str = include_str!("../shaders/blob.wgsl");

pub use camera::Camera;
pub use pointer::PointerTracker;
pub use sampler::DisplacementField;
pub use session::{BlobSession, FrameParams, SessionError};
pub use shape::{segments_for_width, ShapeGeometry, ShapeKind};
