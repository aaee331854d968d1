//! Content producers: each one knows how to mutate the active grid once
//! per frame, and nothing else about the renderer.

use gridfx_core::{color, Color, Grid};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Logical resolution of the built-in effects' active grid.
pub const LOGICAL_DIM: usize = 16;

/// One frame's worth of content. `setup` runs once before the loop starts,
/// `advance` once per frame; both get exclusive access to the active grid
/// for the duration of the call.
pub trait Effect {
    fn setup(&mut self, _grid: &mut Grid) {}

    fn advance(&mut self, grid: &mut Grid);
}

/// Every cell's background becomes an independent uniform random color,
/// re-rolled each frame.
pub struct RandomColors {
    rng: ThreadRng,
}

impl RandomColors {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Effect for RandomColors {
    fn advance(&mut self, grid: &mut Grid) {
        for cell in grid.cells_mut() {
            cell.background.set(Color::new(
                self.rng.random_range(0..256) as f64,
                self.rng.random_range(0..256) as f64,
                self.rng.random_range(0..256) as f64,
            ));
        }
    }
}

/// A static vertical black-to-white gradient, one brightness step per row.
pub struct GrayscaleGradient;

impl Effect for GrayscaleGradient {
    fn setup(&mut self, grid: &mut Grid) {
        if grid.rows() == 0 {
            return;
        }
        let increment = 255.0 / grid.rows() as f64;
        let mut shade = color::BLACK;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                grid[(row, col)].background.set(shade);
            }
            shade.adjust(increment);
        }
    }

    // The gradient does not animate.
    fn advance(&mut self, _grid: &mut Grid) {}
}
