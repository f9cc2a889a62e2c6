//! N-sphere primitive for ray tracing.

use crate::{Behavior, Material, Shape};
use nray_math::{Ray, Vector};
use rand::RngCore;

/// A sphere in `N` dimensions: all points at `radius` from `center`.
pub struct Sphere<const N: usize, M: Material<N>> {
    center: Vector<N>,
    radius: f64,
    material: M,
}

/// A circle in a 2-D scene.
pub type Circle<M> = Sphere<2, M>;
/// An ordinary sphere in a 3-D scene.
pub type Sphere3<M> = Sphere<3, M>;
/// A hypersphere in a 4-D scene.
pub type Hypersphere<M> = Sphere<4, M>;

impl<const N: usize, M: Material<N>> Sphere<N, M> {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vector<N>, radius: f64, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn center(&self) -> Vector<N> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &M {
        &self.material
    }
}

impl<const N: usize, M: Material<N>> Shape<N> for Sphere<N, M> {
    fn first_intersection(&self, ray: &Ray<N>, near_clipping: f64) -> Option<f64> {
        let direction = ray.direction().normalized();
        let offset_center = self.center - ray.origin();

        // The center must lie in front of the origin. This also rejects
        // origins inside a sphere whose center is behind them.
        let projection_length = offset_center.dot(direction);
        if projection_length <= 0.0 {
            return None;
        }

        // Distance from the projected center to the sphere edge (pythagoras)
        let projection = direction * projection_length;
        let hypotenuse_sq = self.radius * self.radius;
        let cathetus_sq = (offset_center - projection).norm_squared();
        if hypotenuse_sq <= cathetus_sq {
            return None;
        }

        let distance = projection_length - (hypotenuse_sq - cathetus_sq).sqrt();
        (distance > near_clipping).then_some(distance)
    }

    fn behavior_at(&self, ray: &Ray<N>, distance: f64, rng: &mut dyn RngCore) -> Behavior<N> {
        let intersection = ray.origin() + ray.direction().normalized() * distance;
        self.material.behavior(
            ray.direction(),
            intersection,
            intersection - self.center,
            rng,
        )
    }
}

impl<const N: usize, M: Material<N> + std::fmt::Debug> std::fmt::Debug for Sphere<N, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sphere")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .field("material", &self.material)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Diffuse, FlatColor, Mirror};
    use nray_math::{vec2, vec3, vec4, Vector3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NEAR: f64 = 1e-6;

    #[test]
    fn test_sphere_hit_towards_center() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, Diffuse::new(Color::WHITE));
        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, -1.0));

        let distance = sphere.first_intersection(&ray, NEAR).expect("ray points at center");
        assert!((distance - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hit_distance_matches_center_distance_minus_radius() {
        let center = vec3(3.0, -2.0, 9.0);
        let radius = 1.75;
        let sphere = Sphere::new(center, radius, FlatColor::new(Color::RED));

        for origin in [Vector3::ZERO, vec3(-4.0, 1.0, 2.0), vec3(10.0, 10.0, 10.0)] {
            // Direction length should not matter
            let direction = (center - origin) * 3.7;
            let ray = Ray::new(origin, direction);
            let distance = sphere.first_intersection(&ray, NEAR).expect("aimed at center");
            let expected = (center - origin).norm() - radius;
            assert!((distance - expected).abs() < 1e-9, "{distance} != {expected}");
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, Mirror);

        // Perpendicular offset from the center larger than the radius
        let ray = Ray::new(vec3(0.6, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(sphere.first_intersection(&ray, NEAR).is_none());

        // Tangent rays miss as well
        let ray = Ray::new(vec3(0.5, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(sphere.first_intersection(&ray, NEAR).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let sphere = Sphere::new(vec3(0.0, 0.0, -1.0), 0.5, Mirror);
        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        assert!(sphere.first_intersection(&ray, NEAR).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_is_missed() {
        // Known simplification: only the near root is considered, so an
        // origin inside the sphere sees a negative distance and no hit.
        let sphere = Sphere::new(vec3(0.0, 0.0, 1.0), 5.0, Mirror);
        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        assert!(sphere.first_intersection(&ray, NEAR).is_none());
    }

    #[test]
    fn test_near_clipping_rejects_close_hits() {
        let sphere = Sphere::new(vec2(2.0, 0.0), 1.0, FlatColor::new(Color::GREEN));
        let ray = Ray::new(vec2(0.0, 0.0), vec2(1.0, 0.0));

        assert!(sphere.first_intersection(&ray, 0.5).is_some());
        assert!(sphere.first_intersection(&ray, 1.0).is_none());
    }

    #[test]
    fn test_hypersphere_hit() {
        let sphere: Hypersphere<_> =
            Sphere::new(vec4(0.0, 0.0, 0.0, 10.0), 2.0, FlatColor::new(Color::BLUE));
        let ray = Ray::new(vec4(0.0, 0.0, 0.0, 0.0), vec4(0.0, 0.0, 0.0, 1.0));
        let distance = sphere.first_intersection(&ray, NEAR).expect("aimed at center");
        assert!((distance - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_behavior_uses_hit_point_and_outward_normal() {
        let mut rng = StdRng::seed_from_u64(3);
        let sphere: Circle<_> = Sphere::new(vec2(4.0, 0.0), 1.0, Mirror);
        let ray = Ray::new(vec2(0.0, 0.0), vec2(2.0, 0.0));

        let distance = sphere.first_intersection(&ray, NEAR).expect("hit");
        let behavior = sphere.behavior_at(&ray, distance, &mut rng);
        let next = behavior.next_bounce.expect("mirror bounces");

        assert!((next.origin - vec2(3.0, 0.0)).norm() < 1e-9);
        // Reflected straight back
        assert!((next.direction - vec2(-2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_negative_radius_is_clamped() {
        let sphere = Sphere::new(vec3(0.0, 0.0, 5.0), -1.0, Mirror);
        assert_eq!(sphere.radius(), 0.0);
        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        assert!(sphere.first_intersection(&ray, NEAR).is_none());
    }
}
