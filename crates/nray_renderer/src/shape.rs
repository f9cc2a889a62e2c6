//! Shape trait and the deferred intersection handle.

use crate::Behavior;
use nray_math::Ray;
use rand::RngCore;

/// Trait for objects that can be hit by rays in an `N`-dimensional scene.
///
/// Intersection testing and material evaluation are separate calls so that
/// a scene only evaluates the material of the nearest hit.
pub trait Shape<const N: usize>: Send + Sync {
    /// Distance along `ray` to the first hit beyond `near_clipping`, if any.
    ///
    /// Distances are measured in units of the normalized ray direction so
    /// they compare across shapes regardless of the ray's direction length.
    fn first_intersection(&self, ray: &Ray<N>, near_clipping: f64) -> Option<f64>;

    /// Evaluate the material at a hit previously reported by
    /// [`Shape::first_intersection`] for the same ray.
    fn behavior_at(&self, ray: &Ray<N>, distance: f64, rng: &mut dyn RngCore) -> Behavior<N>;
}

/// The nearest hit found along a ray.
///
/// Holds a handle to the shape that was hit; its material is only evaluated
/// when [`Intersection::behavior`] is called.
#[derive(Clone, Copy)]
pub struct Intersection<'a, const N: usize> {
    /// Distance along the normalized ray direction
    pub distance: f64,
    /// Shape that produced this hit
    pub shape: &'a dyn Shape<N>,
}

impl<'a, const N: usize> Intersection<'a, N> {
    pub fn new(distance: f64, shape: &'a dyn Shape<N>) -> Self {
        Self { distance, shape }
    }

    /// Evaluate the hit shape's material for `ray`.
    pub fn behavior(&self, ray: &Ray<N>, rng: &mut dyn RngCore) -> Behavior<N> {
        self.shape.behavior_at(ray, self.distance, rng)
    }
}

impl<const N: usize> std::fmt::Debug for Intersection<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intersection")
            .field("distance", &self.distance)
            .finish_non_exhaustive()
    }
}

impl<const N: usize, S: Shape<N> + ?Sized> Shape<N> for Box<S> {
    fn first_intersection(&self, ray: &Ray<N>, near_clipping: f64) -> Option<f64> {
        (**self).first_intersection(ray, near_clipping)
    }

    fn behavior_at(&self, ray: &Ray<N>, distance: f64, rng: &mut dyn RngCore) -> Behavior<N> {
        (**self).behavior_at(ray, distance, rng)
    }
}
