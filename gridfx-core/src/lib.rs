pub mod cell;
pub mod color;
pub mod grid;
pub mod resample;

pub use cell::Cell;
pub use color::Color;
pub use grid::Grid;
pub use resample::resample_background;

#[cfg(test)]
mod tests {
    use crate::color::{self, Color};
    use crate::grid::Grid;
    use crate::resample::resample_background;

    // The shape of one whole frame: a small logical grid scaled onto an
    // 80x24 "terminal" and serialized.
    #[test]
    fn frame_pipeline_scales_and_serializes() {
        let mut active = Grid::new(4, 4);
        for row in 0..4 {
            for col in 0..4 {
                let v = ((row * 4 + col) * 16) as f64;
                active[(row, col)].background.set(Color::new(v, v, v));
            }
        }

        let mut scaled = Grid::new(24, 80);
        resample_background(&active, &mut scaled, true);
        assert_eq!(scaled.rows(), 24);
        assert_eq!(scaled.cols(), 80);

        // Aspect lock: both scales become max(4/24, 4/80) = 1/6, so the
        // content occupies the left 24 columns and the remainder keeps its
        // default background.
        assert_ne!(scaled[(0, 0)].background, color::WHITE);
        assert_eq!(scaled[(0, 79)].background, color::WHITE);

        // Averages of a bounded field stay bounded over the covered region.
        for row in 0..24 {
            for col in 0..24 {
                assert!(scaled[(row, col)].background.r() <= 240.0);
            }
        }

        let mut frame = Vec::new();
        for cell in scaled.cells() {
            cell.write_ansi(&mut frame);
        }
        let text = String::from_utf8(frame).unwrap();
        assert_eq!(text.matches("\x1b[48;2;").count(), 24 * 80);
        assert_eq!(text.matches("\x1b[0m").count(), 24 * 80);
    }
}
