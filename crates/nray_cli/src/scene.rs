//! The demo scene: a mirror ball in a box of five huge diffuse spheres,
//! lit from above.

use nray_renderer::{vec3, Color, Diffuse, FlatColor, Mirror, Scene, Sphere3};

/// Radius of the wall spheres, big enough to look flat from inside the box.
const WALL_RADIUS: f64 = 990.0;

pub fn demo_box() -> Scene<3> {
    let mut scene = Scene::new();

    scene.add(Sphere3::new(vec3(-2.0, -3.0, 7.0), 2.0, Mirror));
    scene.add(Sphere3::new(
        vec3(0.0, 100.0, 5.0),
        90.2,
        FlatColor::new(Color::brightness(5.0)),
    ));

    let pale_red = Color::new(0.75, 0.25, 0.25);
    let pale_blue = Color::new(0.25, 0.25, 0.75);
    let walls = [
        (vec3(-1000.0, 0.0, 0.0), pale_red),
        (vec3(1000.0, 0.0, 0.0), pale_blue),
        (vec3(0.0, -1000.0, 5.0), Color::WHITE),
        (vec3(0.0, 1000.0, 5.0), Color::WHITE),
        (vec3(0.0, 0.0, 1005.0), Color::WHITE),
    ];
    for (center, color) in walls {
        scene.add(Sphere3::new(center, WALL_RADIUS, Diffuse::new(color)));
    }

    scene
}
