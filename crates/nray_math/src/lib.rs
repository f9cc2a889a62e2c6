//! Vector algebra for nray.
//!
//! Provides a const-generic [`Vector`] usable in any fixed dimension and the
//! [`Ray`] type built on top of it. glam types convert to and from the 2-, 3-
//! and 4-dimensional aliases.

mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{vec2, vec3, vec4, Vector, Vector2, Vector3, Vector4};

// Re-export glam for callers that want to interoperate
pub use glam;
