//! Dimension-generic Euclidean vectors.
//!
//! `Vector<N>` is a plain value type over `[f64; N]`. Every arithmetic
//! operator is componentwise, and `dot`/`norm` are defined for any `N`.
//! The cross product is a 3-D capability and only exists on [`Vector3`].

use glam::{DVec2, DVec3, DVec4};
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// An `N`-dimensional vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

/// A 2-D vector (also used for normalized screen offsets).
pub type Vector2 = Vector<2>;
/// A 3-D vector.
pub type Vector3 = Vector<3>;
/// A 4-D vector.
pub type Vector4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// The zero vector.
    pub const ZERO: Self = Self([0.0; N]);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Create a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self([value; N])
    }

    /// The basis vector along `axis`.
    ///
    /// Panics if `axis >= N`.
    pub fn unit(axis: usize) -> Self {
        assert!(axis < N, "axis {axis} out of range for a {N}-dimensional vector");
        let mut components = [0.0; N];
        components[axis] = 1.0;
        Self(components)
    }

    /// Number of components.
    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    /// Borrow the raw components.
    #[inline]
    pub const fn components(&self) -> &[f64; N] {
        &self.0
    }

    /// Consume the vector, returning its components.
    #[inline]
    pub const fn into_components(self) -> [f64; N] {
        self.0
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    #[inline]
    fn zip_with(mut self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        for (a, b) in self.0.iter_mut().zip(other.0) {
            *a = f(*a, b);
        }
        self
    }

    /// Sum of componentwise products.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// `self · self`.
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length.
    ///
    /// Panics if the vector has zero (or non-finite) length.
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        assert!(
            norm > 0.0 && norm.is_finite(),
            "cannot normalize vector {self:?} of length {norm}"
        );
        self / norm
    }

    /// Scale to unit length, or `None` for a zero-length vector.
    pub fn try_normalized(self) -> Option<Self> {
        let norm = self.norm();
        (norm > 0.0 && norm.is_finite()).then(|| self / norm)
    }

    /// Reflect `self` about `normal`: `d − 2(d·n̂)n̂`.
    ///
    /// The normal does not need to be unit length, but must be non-zero.
    pub fn reflect(self, normal: Self) -> Self {
        let n = normal.normalized();
        self - 2.0 * self.dot(n) * n
    }
}

impl Vector3 {
    /// Cross product `self × other`.
    pub fn cross(self, other: Self) -> Self {
        DVec3::from(self).cross(DVec3::from(other)).into()
    }
}

macro_rules! axis_accessors {
    ($n:literal => $($name:ident: $axis:literal),+) => {
        impl Vector<$n> {
            $(
                #[inline]
                pub const fn $name(&self) -> f64 {
                    self.0[$axis]
                }
            )+
        }
    };
}

axis_accessors!(2 => x: 0, y: 1);
axis_accessors!(3 => x: 0, y: 1, z: 2);
axis_accessors!(4 => x: 0, y: 1, z: 2, w: 3);

/// Shorthand for `Vector2::new([x, y])`.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vector2 {
    Vector::new([x, y])
}

/// Shorthand for `Vector3::new([x, y, z])`.
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector::new([x, y, z])
}

/// Shorthand for `Vector4::new([x, y, z, w])`.
#[inline]
pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
    Vector::new([x, y, z, w])
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(components: [f64; N]) -> Self {
        Self(components)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.0[axis]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f64) -> Self {
        self.map(|c| c * scale)
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, v: Vector<N>) -> Vector<N> {
        v * self
    }
}

impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;

    #[inline]
    fn div(self, scale: f64) -> Self {
        self.map(|c| c / scale)
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    fn mul_assign(&mut self, scale: f64) {
        *self = *self * scale;
    }
}

impl<const N: usize> DivAssign<f64> for Vector<N> {
    fn div_assign(&mut self, scale: f64) {
        *self = *self / scale;
    }
}

impl<const N: usize> Sum for Vector<N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// glam interop for the dimensions glam covers

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self(v.to_array())
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::from_array(v.0)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self(v.to_array())
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::from_array(v.0)
    }
}

impl From<DVec4> for Vector4 {
    fn from(v: DVec4) -> Self {
        Self(v.to_array())
    }
}

impl From<Vector4> for DVec4 {
    fn from(v: Vector4) -> Self {
        DVec4::from_array(v.0)
    }
}
