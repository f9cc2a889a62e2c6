//! nray renderer - dimension-generic CPU path tracing
//!
//! A Monte Carlo path tracer whose scenes live in any number of spatial
//! dimensions. Geometry is n-spheres; surfaces are flat emitters, mirrors
//! and (in 3-D) diffuse reflectors. Images come from a [`Camera`] looking
//! into a [`Scene`], rendered in parallel by [`render`].

mod buffer;
mod camera;
mod color;
mod config;
mod error;
mod material;
mod renderer;
mod scanline;
mod scene;
mod shape;
mod sphere;
mod tracer;

pub use buffer::{PixelBuffer, Rgba8};
pub use camera::{Camera, Facing, RegularCamera, SliceCamera};
pub use color::Color;
pub use config::{Config, ConfigError, ConfigResult, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use material::{Behavior, Diffuse, FlatColor, Material, Mirror};
pub use renderer::{pixel_offset, render, render_pixel};
pub use scanline::{render_scanline, rows_for_worker, Scanline};
pub use scene::Scene;
pub use shape::{Intersection, Shape};
pub use sphere::{Circle, Hypersphere, Sphere, Sphere3};
pub use tracer::{trace, TraceSettings};

/// Re-export vector and ray types from nray_math
pub use nray_math::{vec2, vec3, vec4, Ray, Vector, Vector2, Vector3, Vector4};
