//! Camera module - scene camera, per-pass framing, and cull frustum.
//!
//! The scene camera is owned outside the render pass and shared through
//! `Arc`. `CameraFraming` decides whether queries go to that camera or to
//! the fallback framing stored on the pass.

mod camera;
mod framing;
mod frustum;

pub use camera::SceneCamera;
pub use framing::{CameraFraming, CameraSource};
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
