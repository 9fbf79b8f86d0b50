//! Geometry, camera and color types shared by the compositor and its hosts.
//!
//! Canonical 2D space:
//! - World units (logical pixels at zoom 1)
//! - Origin top-left
//! - +X right, +Y down

mod camera;
mod color;
mod rect;
mod vec2;
mod vec3;
mod viewport;

pub use camera::{Camera2D, Camera3D};
pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;
