//! Recursive light transport.

use crate::{Color, Scene};
use nray_math::Ray;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Per-camera tracing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Radiance returned for rays that escape the scene
    pub background: Color,
    /// Bounces followed after the primary hit
    pub max_bounces: u32,
    /// Hits closer than this are ignored to avoid self-intersection
    pub near_clipping: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            background: Color::CLEAR,
            max_bounces: 5,
            near_clipping: 1e-6,
        }
    }
}

/// Compute the radiance arriving along `ray`.
///
/// `bounce` is the number of bounces already taken. Paths stop when a
/// material ends them or once `settings.max_bounces` is reached, in which
/// case only the hit's emission counts.
pub fn trace<const N: usize>(
    scene: &Scene<N>,
    settings: &TraceSettings,
    ray: &Ray<N>,
    bounce: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(hit) = scene.first_intersection(ray, settings.near_clipping) else {
        return settings.background;
    };

    let behavior = hit.behavior(ray, rng);
    match behavior.next_bounce {
        Some(next) if bounce < settings.max_bounces => {
            behavior.emission
                + behavior.attenuation * trace(scene, settings, &next, bounce + 1, rng)
        }
        _ => behavior.emission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Behavior, Diffuse, FlatColor, Mirror, Shape, Sphere};
    use nray_math::{vec3, Vector3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Emits a fixed color and always bounces straight on.
    struct Glow(Color);

    impl Shape<3> for Glow {
        fn first_intersection(&self, _ray: &Ray<3>, _near_clipping: f64) -> Option<f64> {
            Some(1.0)
        }

        fn behavior_at(&self, ray: &Ray<3>, _distance: f64, _rng: &mut dyn RngCore) -> Behavior<3> {
            Behavior::bounce(self.0, Color::WHITE, *ray)
        }
    }

    #[test]
    fn test_empty_scene_returns_background() {
        let scene = Scene::<3>::new();
        let settings = TraceSettings {
            background: Color::rgba(0.1, 0.2, 0.3, 0.4),
            ..TraceSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        for direction in [vec3(0.0, 0.0, 1.0), vec3(1.0, -1.0, 0.5), vec3(0.0, 3.0, 0.0)] {
            let ray = Ray::new(Vector3::ZERO, direction);
            assert_eq!(trace(&scene, &settings, &ray, 0, &mut rng), settings.background);
        }
    }

    #[test]
    fn test_zero_bounces_returns_first_emission() {
        let mut scene = Scene::<3>::new();
        scene.add(Glow(Color::rgba(0.25, 0.5, 0.75, 1.0)));
        let settings = TraceSettings {
            max_bounces: 0,
            background: Color::WHITE,
            ..TraceSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        assert_eq!(
            trace(&scene, &settings, &ray, 0, &mut rng),
            Color::rgba(0.25, 0.5, 0.75, 1.0)
        );
    }

    #[test]
    fn test_bounce_limit_counts_emissions() {
        let mut scene = Scene::<3>::new();
        scene.add(Glow(Color::rgba(1.0, 0.0, 0.0, 0.0)));
        let settings = TraceSettings {
            max_bounces: 3,
            ..TraceSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        // One primary hit plus three bounces, each emitting once
        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        let color = trace(&scene, &settings, &ray, 0, &mut rng);
        assert_eq!(color, Color::rgba(4.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mirror_shows_what_it_reflects() {
        // Mirror ahead, light behind the camera
        let mut scene = Scene::<3>::new();
        scene.add(Sphere::new(vec3(0.0, 0.0, 5.0), 1.0, Mirror));
        scene.add(Sphere::new(vec3(0.0, 0.0, -5.0), 1.0, FlatColor::new(Color::YELLOW)));
        let settings = TraceSettings::default();
        let mut rng = StdRng::seed_from_u64(0);

        let ray = Ray::new(Vector3::ZERO, vec3(0.0, 0.0, 1.0));
        let color = trace(&scene, &settings, &ray, 0, &mut rng);
        assert_eq!(color, Color::CLEAR + Color::WHITE * Color::YELLOW);
    }

    #[test]
    fn test_diffuse_under_uniform_light_is_attenuated() {
        // Huge emitter overhead, looking straight down at the floor
        let mut scene = Scene::<3>::new();
        let floor = Color::new(0.5, 0.5, 0.5);
        scene.add(Sphere::new(vec3(0.0, -1000.0, 0.0), 999.0, Diffuse::new(floor)));
        scene.add(Sphere::new(vec3(0.0, 1000.0, 0.0), 990.0, FlatColor::new(Color::WHITE)));
        let settings = TraceSettings {
            background: Color::BLACK,
            max_bounces: 1,
            ..TraceSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(11);

        let ray = Ray::new(Vector3::ZERO, vec3(0.01, -1.0, 0.02));
        for _ in 0..32 {
            let color = trace(&scene, &settings, &ray, 0, &mut rng);
            // Bounces stay within a radian of straight up and all reach the light
            assert!((color.red - 0.5).abs() < 1e-9, "{color:?}");
            assert!((color.alpha - 2.0).abs() < 1e-9, "{color:?}");
        }
    }
}
