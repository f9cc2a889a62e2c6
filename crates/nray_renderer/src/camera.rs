//! Cameras map normalized screen offsets to primary rays.

use crate::tracer::{trace, TraceSettings};
use crate::{Color, Scene};
use nray_math::{vec3, Ray, Vector, Vector2, Vector3};
use rand::RngCore;

/// Anything the renderer can look through.
pub trait Camera: Sync {
    /// Radiance seen through `offset`.
    ///
    /// Offset components range from -1 to 1, x to the right and y up.
    fn trace_through(&self, offset: Vector2, rng: &mut dyn RngCore) -> Color;
}

/// Viewing direction plus the up vector that orients the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    pub direction: Vector3,
    pub up: Vector3,
}

impl Default for Facing {
    /// Looking into +z with +y up.
    fn default() -> Self {
        Self {
            direction: vec3(0.0, 0.0, 1.0),
            up: vec3(0.0, 1.0, 0.0),
        }
    }
}

/// A 2-D image plane in a 3-D scene.
#[derive(Clone)]
pub struct RegularCamera<'s> {
    scene: &'s Scene<3>,
    position: Vector3,
    facing: Facing,
    settings: TraceSettings,

    // Derived from `facing` by update_axes()
    x_axis: Vector3,
    y_axis: Vector3,
}

impl<'s> RegularCamera<'s> {
    /// Camera at the origin looking into +z.
    pub fn new(scene: &'s Scene<3>) -> Self {
        let mut camera = Self {
            scene,
            position: Vector3::ZERO,
            facing: Facing::default(),
            settings: TraceSettings::default(),
            x_axis: Vector3::ZERO,
            y_axis: Vector3::ZERO,
        };
        camera.update_axes();
        camera
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    /// Set viewing direction and up vector.
    pub fn with_facing(mut self, direction: Vector3, up: Vector3) -> Self {
        self.set_facing(Facing { direction, up });
        self
    }

    /// Set tracing parameters.
    pub fn with_settings(mut self, settings: TraceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Change where the camera looks. Recomputes the screen axes.
    ///
    /// Panics if `up` is zero or parallel to `direction`.
    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
        self.update_axes();
    }

    pub fn set_settings(&mut self, settings: TraceSettings) {
        self.settings = settings;
    }

    fn update_axes(&mut self) {
        self.x_axis = self.facing.up.cross(self.facing.direction).normalized();
        self.y_axis = self.facing.up.normalized();
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    pub fn scene(&self) -> &'s Scene<3> {
        self.scene
    }

    pub fn x_axis(&self) -> Vector3 {
        self.x_axis
    }

    pub fn y_axis(&self) -> Vector3 {
        self.y_axis
    }

    /// Primary ray through a normalized screen offset.
    pub fn primary_ray(&self, offset: Vector2) -> Ray<3> {
        let coord = self.x_axis * offset.x() + self.y_axis * offset.y();
        Ray::new(self.position, self.facing.direction + coord)
    }

    /// Radiance along `ray`, which has already bounced `bounce` times.
    pub fn trace(&self, ray: &Ray<3>, bounce: u32, rng: &mut dyn RngCore) -> Color {
        trace(self.scene, &self.settings, ray, bounce, rng)
    }
}

impl Camera for RegularCamera<'_> {
    fn trace_through(&self, offset: Vector2, rng: &mut dyn RngCore) -> Color {
        self.trace(&self.primary_ray(offset), 0, rng)
    }
}

/// Views an `N`-dimensional scene through the plane spanned by two
/// explicit screen axes.
///
/// Without a cross product in general dimensions the axes cannot be derived,
/// so they are supplied directly. This is the camera for circles and
/// hyperspheres.
#[derive(Clone)]
pub struct SliceCamera<'s, const N: usize> {
    scene: &'s Scene<N>,
    position: Vector<N>,
    forward: Vector<N>,
    x_axis: Vector<N>,
    y_axis: Vector<N>,
    settings: TraceSettings,
}

impl<'s, const N: usize> SliceCamera<'s, N> {
    /// Camera at `position` looking along `forward`, with the screen spanned
    /// by `x_axis` (right) and `y_axis` (up).
    pub fn new(
        scene: &'s Scene<N>,
        position: Vector<N>,
        forward: Vector<N>,
        x_axis: Vector<N>,
        y_axis: Vector<N>,
    ) -> Self {
        Self {
            scene,
            position,
            forward,
            x_axis,
            y_axis,
            settings: TraceSettings::default(),
        }
    }

    /// Set tracing parameters.
    pub fn with_settings(mut self, settings: TraceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    /// Primary ray through a normalized screen offset.
    pub fn primary_ray(&self, offset: Vector2) -> Ray<N> {
        let coord = self.x_axis * offset.x() + self.y_axis * offset.y();
        Ray::new(self.position, self.forward + coord)
    }
}

impl<const N: usize> Camera for SliceCamera<'_, N> {
    fn trace_through(&self, offset: Vector2, rng: &mut dyn RngCore) -> Color {
        trace(self.scene, &self.settings, &self.primary_ray(offset), 0, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatColor, Sphere};
    use nray_math::{vec2, vec4, Vector4};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_default_axes() {
        let scene = Scene::new();
        let camera = RegularCamera::new(&scene);

        // up × +z = +x
        assert!((camera.x_axis() - vec3(1.0, 0.0, 0.0)).norm() < EPSILON);
        assert!((camera.y_axis() - vec3(0.0, 1.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn test_axes_follow_facing() {
        let scene = Scene::new();
        let mut camera = RegularCamera::new(&scene);
        camera.set_facing(Facing {
            direction: vec3(1.0, 0.0, 0.0),
            up: vec3(0.0, 0.0, 2.0),
        });

        assert!((camera.x_axis() - vec3(0.0, 1.0, 0.0)).norm() < EPSILON);
        assert!((camera.y_axis() - vec3(0.0, 0.0, 1.0)).norm() < EPSILON);
    }

    #[test]
    fn test_primary_ray() {
        let scene = Scene::new();
        let camera = RegularCamera::new(&scene).with_position(vec3(1.0, 2.0, 3.0));

        let center = camera.primary_ray(vec2(0.0, 0.0));
        assert_eq!(center.origin, vec3(1.0, 2.0, 3.0));
        assert!((center.direction - vec3(0.0, 0.0, 1.0)).norm() < EPSILON);

        let corner = camera.primary_ray(vec2(1.0, -1.0));
        assert!((corner.direction - vec3(1.0, -1.0, 1.0)).norm() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "cannot normalize")]
    fn test_up_parallel_to_direction_panics() {
        let scene = Scene::new();
        let _ = RegularCamera::new(&scene).with_facing(vec3(0.0, 1.0, 0.0), vec3(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_empty_scene_shows_background() {
        let scene = Scene::new();
        let settings = TraceSettings {
            background: Color::MAGENTA,
            ..TraceSettings::default()
        };
        let camera = RegularCamera::new(&scene).with_settings(settings);
        let mut rng = StdRng::seed_from_u64(0);

        for offset in [vec2(0.0, 0.0), vec2(-1.0, 1.0), vec2(0.3, -0.7)] {
            assert_eq!(camera.trace_through(offset, &mut rng), Color::MAGENTA);
        }
    }

    #[test]
    fn test_slice_camera_sees_hypersphere() {
        let mut scene = Scene::<4>::new();
        scene.add(Sphere::new(vec4(0.0, 0.0, 0.0, 5.0), 1.0, FlatColor::new(Color::CYAN)));

        let camera = SliceCamera::new(
            &scene,
            Vector4::ZERO,
            vec4(0.0, 0.0, 0.0, 1.0),
            vec4(1.0, 0.0, 0.0, 0.0),
            vec4(0.0, 1.0, 0.0, 0.0),
        );
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(camera.trace_through(vec2(0.0, 0.0), &mut rng), Color::CYAN);
        assert_eq!(camera.trace_through(vec2(1.0, 1.0), &mut rng), Color::CLEAR);
    }
}
