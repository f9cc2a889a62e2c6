//! Material trait for surface interaction.

use crate::Color;
use nray_math::{Ray, Vector, Vector3};
use rand::{Rng, RngCore};
use std::f64::consts::TAU;
use std::sync::Arc;

/// A material's response to an incoming ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior<const N: usize> {
    /// Light emitted at the intersection
    pub emission: Color,
    /// Multiplier applied to the light arriving along `next_bounce`
    pub attenuation: Color,
    /// Continuation of the path, `None` terminates it
    pub next_bounce: Option<Ray<N>>,
}

impl<const N: usize> Behavior<N> {
    /// A behavior that ends the path after emitting `emission`.
    pub fn terminal(emission: Color, attenuation: Color) -> Self {
        Self {
            emission,
            attenuation,
            next_bounce: None,
        }
    }

    /// A behavior that continues the path along `next_bounce`.
    pub fn bounce(emission: Color, attenuation: Color, next_bounce: Ray<N>) -> Self {
        Self {
            emission,
            attenuation,
            next_bounce: Some(next_bounce),
        }
    }
}

/// Trait for materials that describe how light interacts with surfaces in an
/// `N`-dimensional scene.
pub trait Material<const N: usize>: Send + Sync {
    /// Evaluate the surface response.
    ///
    /// - `direction`: direction of the incoming ray
    /// - `intersection`: the hit point
    /// - `normal`: surface normal at the hit point, not necessarily unit length
    /// - `rng`: random source for stochastic materials
    fn behavior(
        &self,
        direction: Vector<N>,
        intersection: Vector<N>,
        normal: Vector<N>,
        rng: &mut dyn RngCore,
    ) -> Behavior<N>;
}

impl<const N: usize, M: Material<N> + ?Sized> Material<N> for &M {
    fn behavior(
        &self,
        direction: Vector<N>,
        intersection: Vector<N>,
        normal: Vector<N>,
        rng: &mut dyn RngCore,
    ) -> Behavior<N> {
        (**self).behavior(direction, intersection, normal, rng)
    }
}

impl<const N: usize, M: Material<N> + ?Sized> Material<N> for Box<M> {
    fn behavior(
        &self,
        direction: Vector<N>,
        intersection: Vector<N>,
        normal: Vector<N>,
        rng: &mut dyn RngCore,
    ) -> Behavior<N> {
        (**self).behavior(direction, intersection, normal, rng)
    }
}

impl<const N: usize, M: Material<N> + ?Sized> Material<N> for Arc<M> {
    fn behavior(
        &self,
        direction: Vector<N>,
        intersection: Vector<N>,
        normal: Vector<N>,
        rng: &mut dyn RngCore,
    ) -> Behavior<N> {
        (**self).behavior(direction, intersection, normal, rng)
    }
}

/// Constant-radiance surface. Used for light sources and flat shading; the
/// path always ends here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatColor {
    pub color: Color,
}

impl FlatColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl<const N: usize> Material<N> for FlatColor {
    fn behavior(
        &self,
        _direction: Vector<N>,
        _intersection: Vector<N>,
        _normal: Vector<N>,
        _rng: &mut dyn RngCore,
    ) -> Behavior<N> {
        Behavior::terminal(self.color, self.color)
    }
}

/// Perfect mirror in any dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mirror;

impl<const N: usize> Material<N> for Mirror {
    fn behavior(
        &self,
        direction: Vector<N>,
        intersection: Vector<N>,
        normal: Vector<N>,
        _rng: &mut dyn RngCore,
    ) -> Behavior<N> {
        let reflected = direction.reflect(normal);
        Behavior::bounce(Color::CLEAR, Color::WHITE, Ray::new(intersection, reflected))
    }
}

/// Diffuse surface in 3-D.
///
/// Scatters into the hemisphere around the normal (flipped to face the
/// incoming ray). The azimuth is uniform in `[0, 2π)` and the polar angle is
/// a uniform value in `[0, 1)` radians, so the lobe is narrower than a true
/// hemisphere and no importance weighting is applied.
///
/// The tangent frame is seeded from the +X axis. A normal colinear with X
/// has no such frame and panics; scenes must avoid exactly axis-aligned
/// normals along X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diffuse {
    pub color: Color,
}

impl Diffuse {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Sample a bounce direction around `normal` given two uniform numbers.
    pub fn sample_direction(
        direction: Vector3,
        normal: Vector3,
        azimuth_sample: f64,
        polar_sample: f64,
    ) -> Vector3 {
        let azimuth = azimuth_sample * TAU;
        let polar = polar_sample;
        let x = polar.sin() * azimuth.cos();
        let y = polar.sin() * azimuth.sin();
        let z = polar.cos();

        let n = if normal.dot(direction) > 0.0 { -normal } else { normal };
        let w = n.normalized();
        let u = Vector3::unit(0).cross(w).try_normalized().unwrap_or_else(|| {
            panic!("degenerate diffuse basis: normal {normal:?} is colinear with the X axis")
        });
        let v = w.cross(u).normalized();

        u * x + v * y + w * z
    }
}

impl Material<3> for Diffuse {
    fn behavior(
        &self,
        direction: Vector3,
        intersection: Vector3,
        normal: Vector3,
        rng: &mut dyn RngCore,
    ) -> Behavior<3> {
        let azimuth_sample: f64 = rng.gen();
        let polar_sample: f64 = rng.gen();
        let bounce = Self::sample_direction(direction, normal, azimuth_sample, polar_sample);

        Behavior::bounce(Color::BLACK, self.color, Ray::new(intersection, bounce))
    }
}
