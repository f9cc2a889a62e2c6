//! Parallel scanline renderer.
//!
//! Rows are split across a rayon pool (see [`crate::scanline`]). Workers
//! send finished rows back over a channel to the calling thread, which owns
//! the [`PixelBuffer`] and hands it to the snapshot callback at a fixed
//! interval while the render runs.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use nray_math::{vec2, Vector2};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::buffer::PixelBuffer;
use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::scanline::{render_scanline, rows_for_worker, Scanline};
use crate::Color;

/// Screen offset of the centre of pixel `(x, y)`.
///
/// Both components range over (-1, 1); x grows to the right and y grows up,
/// so row 0 is the top of the image.
pub fn pixel_offset(x: u32, y: u32, width: u32, height: u32) -> Vector2 {
    vec2(
        (2.0 * x as f64 + 1.0) / width as f64 - 1.0,
        1.0 - (2.0 * y as f64 + 1.0) / height as f64,
    )
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel<C: Camera + ?Sized>(
    camera: &C,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let offset = pixel_offset(x, y, config.width, config.height);
    let total: Color = (0..config.samples)
        .map(|_| camera.trace_through(offset, rng))
        .sum();

    // Average the samples
    total / config.samples as f64
}

/// Generator for one row. Depends only on the base seed and the row, so a
/// seeded image does not change with the worker count. The row is mixed in
/// multiplicatively so neighbouring seeds do not share row streams.
fn row_rng(base_seed: u64, y: u32) -> StdRng {
    StdRng::seed_from_u64(base_seed ^ (y as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Render the whole image.
///
/// `on_snapshot` is called on the calling thread every
/// `config.snapshot_interval_ms` with the rows finished so far (unfinished
/// rows are still [`Color::CLEAR`]), and once more with the complete image
/// after every worker has finished. Cancellation is not supported.
pub fn render<C, F>(
    camera: &C,
    config: &RenderConfig,
    mut on_snapshot: F,
) -> RenderResult<PixelBuffer>
where
    C: Camera + ?Sized,
    F: FnMut(&PixelBuffer),
{
    config.validate()?;

    if config.threads > config.height {
        log::warn!(
            "{} threads for {} rows, {} workers will idle",
            config.threads,
            config.height,
            config.threads - config.height
        );
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads as usize)
        .thread_name(|index| format!("nray-worker-{index}"))
        .build()?;

    let base_seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "Rendering {}x{} at {} spp on {} threads (seed {})",
        config.width,
        config.height,
        config.samples,
        config.threads,
        base_seed
    );
    let start = Instant::now();

    let mut buffer = PixelBuffer::new(config.width, config.height);
    let (sender, receiver) = mpsc::channel::<Scanline>();
    let workers = config.threads;

    let collected = pool.in_place_scope(|scope| {
        for worker in 0..workers {
            let sender = sender.clone();
            scope.spawn(move |_| {
                for y in rows_for_worker(config.height, workers, worker) {
                    let mut rng = row_rng(base_seed, y);
                    let scanline = render_scanline(camera, y, config, &mut rng);
                    log::trace!("Worker {worker} finished row {y}");

                    // The coordinator has given up
                    if sender.send(scanline).is_err() {
                        return;
                    }
                }
            });
        }
        drop(sender);

        collect_rows(receiver, &mut buffer, config.snapshot_interval(), &mut on_snapshot)
    });
    collected?;

    on_snapshot(&buffer);
    log::info!("Render complete in {:.2?}", start.elapsed());

    Ok(buffer)
}

/// Copy rows into `buffer` until every worker hangs up, publishing a
/// snapshot whenever `interval` has elapsed.
fn collect_rows<F: FnMut(&PixelBuffer)>(
    receiver: Receiver<Scanline>,
    buffer: &mut PixelBuffer,
    interval: Duration,
    on_snapshot: &mut F,
) -> RenderResult<()> {
    let height = buffer.height();
    let mut rows_done = 0u32;
    let mut next_snapshot = Instant::now() + interval;

    loop {
        let wait = next_snapshot.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(wait) {
            Ok(scanline) => {
                buffer.write_row(scanline.y, &scanline.pixels)?;
                rows_done += 1;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if Instant::now() >= next_snapshot {
            log::debug!(
                "Snapshot: {}/{} rows ({:.1}%)",
                rows_done,
                height,
                rows_done as f64 / height as f64 * 100.0
            );
            on_snapshot(buffer);
            next_snapshot = Instant::now() + interval;
        }
    }

    Ok(())
}
