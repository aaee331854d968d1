//! Area-weighted background-color resampling between grids.
//!
//! Each destination cell covers a continuous rectangle of the source grid;
//! its background becomes the average of the source backgrounds weighted by
//! geometric overlap area. This box filter is exact for both upsampling and
//! downsampling, so the terminal can grow or shrink relative to the content
//! grid without aliasing and without branching on direction.

use crate::color::Color;
use crate::grid::Grid;

/// Resamples `src`'s background colors into `dst` at `dst`'s dimensions.
///
/// With `preserve_aspect`, both axes use the larger of the two scale
/// factors, so downsampling never stretches one axis disproportionately.
/// Only background color is resampled; destination symbols and foreground
/// colors are left untouched. A degenerate source (either dimension zero)
/// leaves `dst` unmodified.
pub fn resample_background(src: &Grid, dst: &mut Grid, preserve_aspect: bool) {
    if src.is_empty() || dst.is_empty() {
        return;
    }

    let mut row_scale = src.rows() as f64 / dst.rows() as f64;
    let mut col_scale = src.cols() as f64 / dst.cols() as f64;
    if preserve_aspect {
        let scale = row_scale.max(col_scale);
        row_scale = scale;
        col_scale = scale;
    }

    for i in 0..dst.rows() {
        // Source footprint of destination row i: [row_lo, row_hi)
        let row_lo = i as f64 * row_scale;
        let row_hi = row_lo + row_scale;
        let row_first = row_lo.floor() as usize;
        let row_last = (row_hi.ceil() as usize).min(src.rows());

        for j in 0..dst.cols() {
            let col_lo = j as f64 * col_scale;
            let col_hi = col_lo + col_scale;
            let col_first = col_lo.floor() as usize;
            let col_last = (col_hi.ceil() as usize).min(src.cols());

            let mut sum_r = 0.0;
            let mut sum_g = 0.0;
            let mut sum_b = 0.0;
            let mut weight = 0.0;

            for row in row_first..row_last {
                let row_overlap =
                    (row_hi.min((row + 1) as f64) - row_lo.max(row as f64)).max(0.0);
                if row_overlap == 0.0 {
                    continue;
                }
                for col in col_first..col_last {
                    let col_overlap =
                        (col_hi.min((col + 1) as f64) - col_lo.max(col as f64)).max(0.0);
                    if col_overlap == 0.0 {
                        continue;
                    }
                    let area = row_overlap * col_overlap;
                    let bg = src[(row, col)].background;
                    sum_r += area * bg.r();
                    sum_g += area * bg.g();
                    sum_b += area * bg.b();
                    weight += area;
                }
            }

            // Footprints entirely off the source edge contribute nothing;
            // leave such destination cells as they were.
            if weight > 0.0 {
                dst[(i, j)]
                    .background
                    .set(Color::new(sum_r / weight, sum_g / weight, sum_b / weight));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{self, Color};

    fn grid_with_backgrounds(rows: usize, cols: usize, colors: &[Color]) -> Grid {
        assert_eq!(colors.len(), rows * cols);
        let mut grid = Grid::new(rows, cols);
        for (cell, color) in grid.cells_mut().iter_mut().zip(colors) {
            cell.background.set(*color);
        }
        grid
    }

    #[test]
    fn uniform_source_stays_uniform_at_any_size() {
        let teal = Color::new(0.0, 128.0, 128.0);
        let mut src = Grid::new(3, 7);
        src.fill_background(teal);

        for &(rows, cols) in &[(1, 1), (3, 7), (24, 80), (5, 2)] {
            let mut dst = Grid::new(rows, cols);
            resample_background(&src, &mut dst, false);
            for cell in dst.cells() {
                assert_eq!(cell.background, teal);
            }

            let mut dst = Grid::new(rows, cols);
            resample_background(&src, &mut dst, true);
            for cell in dst.cells() {
                assert_eq!(cell.background, teal);
            }
        }
    }

    #[test]
    fn energy_is_conserved_without_aspect_lock() {
        let colors: Vec<Color> = (0..12)
            .map(|i| Color::new((i * 20) as f64, (255 - i * 10) as f64, (i * i) as f64))
            .collect();
        let src = grid_with_backgrounds(3, 4, &colors);

        let mut dst = Grid::new(8, 6);
        resample_background(&src, &mut dst, false);

        let row_scale = 3.0 / 8.0;
        let col_scale = 4.0 / 6.0;
        let area = row_scale * col_scale;

        for channel in [Color::r, Color::g, Color::b] {
            let src_sum: f64 = src.cells().iter().map(|c| channel(&c.background)).sum();
            let dst_sum: f64 = dst
                .cells()
                .iter()
                .map(|c| channel(&c.background) * area)
                .sum();
            assert!(
                (src_sum - dst_sum).abs() < 1e-9,
                "channel sum {src_sum} vs {dst_sum}"
            );
        }
    }

    #[test]
    fn checkerboard_upsample_has_no_overshoot() {
        let src = grid_with_backgrounds(
            2,
            2,
            &[color::BLACK, color::WHITE, color::WHITE, color::BLACK],
        );
        let mut dst = Grid::new(4, 4);
        resample_background(&src, &mut dst, false);

        for cell in dst.cells() {
            for raw in [cell.background.r(), cell.background.g(), cell.background.b()] {
                assert!((0.0..=255.0).contains(&raw));
            }
        }
        // Integer-factor upsampling replicates source cells exactly.
        assert_eq!(dst[(0, 0)].background, color::BLACK);
        assert_eq!(dst[(0, 3)].background, color::WHITE);
        assert_eq!(dst[(3, 0)].background, color::WHITE);
        assert_eq!(dst[(3, 3)].background, color::BLACK);
    }

    #[test]
    fn downsample_averages_covered_cells() {
        let src = grid_with_backgrounds(
            2,
            2,
            &[
                Color::new(0.0, 0.0, 0.0),
                Color::new(100.0, 100.0, 100.0),
                Color::new(200.0, 200.0, 200.0),
                Color::new(60.0, 60.0, 60.0),
            ],
        );
        let mut dst = Grid::new(1, 1);
        resample_background(&src, &mut dst, false);
        // Equal quarters: plain mean of the four cells.
        assert_eq!(dst[(0, 0)].background, Color::new(90.0, 90.0, 90.0));
    }

    #[test]
    fn aspect_lock_uses_larger_scale_on_both_axes() {
        // 4 source rows with distinct grays; terminal twice as wide as tall.
        let mut src = Grid::new(4, 4);
        for row in 0..4 {
            let v = (row * 60) as f64;
            for col in 0..4 {
                src[(row, col)].background.set(Color::new(v, v, v));
            }
        }
        let mut dst = Grid::new(2, 4);
        resample_background(&src, &mut dst, true);

        // Both scales become 4/2 = 2, so column j draws from source columns
        // 2j..2j+2; columns past the source edge (j >= 2) get no coverage
        // and keep their default background.
        assert_eq!(dst[(0, 0)].background, Color::new(30.0, 30.0, 30.0));
        assert_eq!(dst[(1, 1)].background, Color::new(150.0, 150.0, 150.0));
        assert_eq!(dst[(0, 2)].background, color::WHITE);
        assert_eq!(dst[(0, 3)].background, color::WHITE);
    }

    #[test]
    fn degenerate_source_leaves_destination_unmodified() {
        let src = Grid::new(0, 4);
        let mut dst = Grid::new(2, 2);
        dst.fill_background(color::ORANGE);
        resample_background(&src, &mut dst, true);
        for cell in dst.cells() {
            assert_eq!(cell.background, color::ORANGE);
        }

        // Empty destination is a no-op rather than a panic.
        let src = Grid::new(2, 2);
        let mut dst = Grid::new(0, 0);
        resample_background(&src, &mut dst, false);
    }

    #[test]
    fn fractional_footprint_weights_by_overlap() {
        // 3 source columns onto 2 destination columns: col_scale = 1.5.
        // dst(0,0) covers [0, 1.5): cell 0 fully, cell 1 half.
        let src = grid_with_backgrounds(
            1,
            3,
            &[
                Color::new(30.0, 30.0, 30.0),
                Color::new(90.0, 90.0, 90.0),
                Color::new(150.0, 150.0, 150.0),
            ],
        );
        let mut dst = Grid::new(1, 2);
        resample_background(&src, &mut dst, false);

        // (1.0*30 + 0.5*90) / 1.5 = 50
        assert_eq!(dst[(0, 0)].background, Color::new(50.0, 50.0, 50.0));
        // (0.5*90 + 1.0*150) / 1.5 = 130
        assert_eq!(dst[(0, 1)].background, Color::new(130.0, 130.0, 130.0));
    }
}
