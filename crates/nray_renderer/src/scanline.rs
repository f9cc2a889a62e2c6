//! Scanline partitioning for parallel rendering.
//!
//! Rows are dealt out round-robin, so worker `n` of `k` renders every row
//! with `y % k == n`. No two workers ever touch the same row.

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::renderer::render_pixel;
use crate::Color;
use rand::RngCore;

/// Rows owned by `worker` out of `workers`, top to bottom.
///
/// Panics if `workers` is zero.
pub fn rows_for_worker(height: u32, workers: u32, worker: u32) -> impl Iterator<Item = u32> {
    assert!(workers > 0, "cannot partition rows across zero workers");
    (worker..height).step_by(workers as usize)
}

/// A finished row of the image.
#[derive(Debug, Clone)]
pub struct Scanline {
    /// Row index, 0 at the top
    pub y: u32,
    /// Pixel colors left to right
    pub pixels: Vec<Color>,
}

impl Scanline {
    pub fn new(y: u32, pixels: Vec<Color>) -> Self {
        Self { y, pixels }
    }
}

/// Render one full row.
pub fn render_scanline<C: Camera + ?Sized>(
    camera: &C,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Scanline {
    let pixels = (0..config.width)
        .map(|x| render_pixel(camera, x, y, config, rng))
        .collect();
    Scanline::new(y, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_rows_are_round_robin() {
        assert_eq!(rows_for_worker(10, 4, 0).collect::<Vec<_>>(), vec![0, 4, 8]);
        assert_eq!(rows_for_worker(10, 4, 1).collect::<Vec<_>>(), vec![1, 5, 9]);
        assert_eq!(rows_for_worker(10, 4, 3).collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn test_rows_partition_image() {
        for (height, workers) in [(1, 1), (7, 3), (128, 4), (5, 8)] {
            let mut seen = BTreeSet::new();
            let mut total = 0;
            for worker in 0..workers {
                for y in rows_for_worker(height, workers, worker) {
                    assert_eq!(y % workers, worker);
                    seen.insert(y);
                    total += 1;
                }
            }
            // Every row exactly once
            assert_eq!(total, height as usize);
            assert_eq!(seen, (0..height).collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn test_idle_worker_gets_no_rows() {
        assert_eq!(rows_for_worker(3, 8, 5).count(), 0);
    }

    #[test]
    #[should_panic(expected = "zero workers")]
    fn test_zero_workers_panics() {
        let _ = rows_for_worker(4, 0, 0);
    }
}
