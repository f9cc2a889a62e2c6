//! Slices through a 4-D scene.
//!
//! Renders a hypersphere cluster through a 2-D screen plane and saves to
//! PPM format. Run with `RUST_LOG=debug` to watch the snapshots.

use nray_renderer::{
    render, vec4, Color, FlatColor, Hypersphere, Mirror, PixelBuffer, RenderConfig, Scene,
    SliceCamera, TraceSettings, Vector4,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("nray - Hypersphere Slice");
    println!("========================");

    let scene = build_scene();
    println!("Created {} shapes", scene.len());

    // Looking along +w, screen spanned by x and y
    let settings = TraceSettings {
        background: Color::BLACK,
        max_bounces: 4,
        ..TraceSettings::default()
    };
    let camera = SliceCamera::new(
        &scene,
        Vector4::ZERO,
        vec4(0.0, 0.0, 0.0, 1.0),
        vec4(1.0, 0.0, 0.0, 0.0),
        vec4(0.0, 1.0, 0.0, 0.0),
    )
    .with_settings(settings);

    let config = RenderConfig::default()
        .with_resolution(256, 256)
        .with_samples(1)
        .with_seed(4);

    let mut snapshots = 0;
    let image = render(&camera, &config, |_| snapshots += 1)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    println!("Received {} snapshots", snapshots);

    let filename = "hypersphere.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Scene<4> {
    let mut scene = Scene::new();

    // A mirror ball in the middle, offset along z so only a slice of it shows
    scene.add(Hypersphere::new(vec4(0.0, 0.0, 0.5, 6.0), 1.5, Mirror));

    // Coloured lights around it, each at a different depth in z
    let lights = [
        (vec4(-3.0, 0.0, 0.0, 6.0), Color::RED),
        (vec4(3.0, 0.0, -1.0, 6.0), Color::GREEN),
        (vec4(0.0, 3.0, 1.0, 6.0), Color::BLUE),
        (vec4(0.0, -3.0, 0.0, 7.0), Color::YELLOW),
        (vec4(0.0, 0.0, 0.0, -4.0), Color::brightness(0.5)),
    ];
    for (center, color) in lights {
        scene.add(Hypersphere::new(center, 1.2, FlatColor::new(color)));
    }

    scene
}

fn save_ppm(image: &PixelBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    for pixel in image.to_rgba8() {
        writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
    }

    Ok(())
}
