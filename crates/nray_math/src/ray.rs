use crate::Vector;

/// A ray in `N`-dimensional space with an origin and a direction.
///
/// Rays are used for path tracing - they represent a half-line starting at
/// `origin` and traveling along `direction`. The direction is not required
/// to be unit length; algorithms that need a unit direction normalize it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray<const N: usize> {
    pub origin: Vector<N>,
    pub direction: Vector<N>,
}

impl<const N: usize> Ray<N> {
    /// Create a new ray.
    pub const fn new(origin: Vector<N>, direction: Vector<N>) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector<N> {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector<N> {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector<N> {
        self.origin + self.direction * t
    }
}
