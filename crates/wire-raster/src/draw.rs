//! Dot and line rasterization.
//!
//! Both routines consume already-transformed integer screen
//! coordinates and write through [`Canvas::set`], which drops
//! out-of-bounds pixels. Nothing here clips or culls: callers may pass
//! coordinates far outside the canvas and get exactly the visible
//! portion.
//!
//! # Example
//!
//! ```rust
//! use wire_core::{Canvas, Rgb};
//! use wire_raster::{draw_dot, draw_line};
//!
//! let mut canvas = Canvas::new(100, 100)?;
//! draw_dot(&mut canvas, 50, 50, Rgb::RED);
//! draw_line(&mut canvas, 10, 10, 90, 40, Rgb::WHITE);
//! # Ok::<(), wire_core::Error>(())
//! ```

use tracing::trace;
use wire_core::{Canvas, Rgb};
use wire_math::round_half_up;

/// Marker pixels relative to the dot center, (dx, dy).
const DOT_OFFSETS: [(i32, i32); 11] = [
    (-2, 0),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    (2, 0),
];

/// Draws a clearly visible dot (more than 1 pixel) centered at (x, y).
///
/// The marker covers 11 pixels, a 3x3 block with single-pixel tips on
/// the left and right:
///
/// ```text
/// . X X X .
/// X X X X X
/// . X X X .
/// ```
///
/// Pixels falling outside the canvas are dropped, so a dot near an
/// edge draws partially.
pub fn draw_dot(canvas: &mut Canvas, x: i32, y: i32, color: Rgb) {
    trace!(x, y, "draw_dot");
    for (dx, dy) in DOT_OFFSETS {
        canvas.set(x.saturating_add(dx), y.saturating_add(dy), color);
    }
}

/// Draws a 1 pixel thick line between (x1, y1) and (x2, y2).
///
/// Rasterized with a fixed-step parametric walk rather than
/// per-octant Bresenham branching: the line is walked from the
/// endpoint with smaller x to the one with larger x (endpoints swap
/// together, so the drawn pixels are order-independent), using
/// `steps = max(|dx|, |dy|)` samples plus one. Fractional per-step
/// increments accumulate in f64 and every sample is rounded half-up
/// to a pixel.
///
/// Coincident endpoints write exactly one pixel.
pub fn draw_line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
    trace!(x1, y1, x2, y2, "draw_line");
    // Always draw from left to right (x1 <= x2).
    let (x1, y1, x2, y2) = if x1 > x2 {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };
    // Widened so coordinate spans near the i32 limits cannot overflow.
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        canvas.set(x1, y1, color);
        return;
    }
    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(x1);
    let mut y = f64::from(y1);
    for _ in 0..=steps {
        canvas.set(round_half_up(x), round_half_up(y), color);
        x += x_inc;
        y += y_inc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colored_pixels(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get(x, y) != Some(Rgb::BLACK) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_draw_dot_center() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        draw_dot(&mut canvas, 50, 50, Rgb::RED);
        assert_eq!(canvas.get(50, 50), Some(Rgb::RED));
        assert_eq!(canvas.get(48, 50), Some(Rgb::RED));
        assert_eq!(canvas.get(52, 50), Some(Rgb::RED));
        assert_eq!(canvas.get(49, 49), Some(Rgb::RED));
        assert_eq!(canvas.get(51, 51), Some(Rgb::RED));
        // Tips exist only on the horizontal axis.
        assert_eq!(canvas.get(50, 48), Some(Rgb::BLACK));
        assert_eq!(canvas.get(50, 52), Some(Rgb::BLACK));
        assert_eq!(colored_pixels(&canvas).len(), 11);
    }

    #[test]
    fn test_draw_dot_clipped_at_corner() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        draw_dot(&mut canvas, 0, 0, Rgb::WHITE);
        let px = colored_pixels(&canvas);
        assert_eq!(px, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 10, 10, 12, 12, Rgb::WHITE);
        assert_eq!(colored_pixels(&canvas), vec![(10, 10), (11, 11), (12, 12)]);
    }

    #[test]
    fn test_draw_line_endpoint_order_independent() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 10, 10, 9, 9, Rgb::WHITE);
        assert_eq!(colored_pixels(&canvas), vec![(9, 9), (10, 10)]);

        let mut reversed = Canvas::new(20, 20).unwrap();
        draw_line(&mut reversed, 9, 9, 10, 10, Rgb::WHITE);
        assert_eq!(canvas, reversed);
    }

    #[test]
    fn test_draw_line_shallow() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 10, 10, 13, 11, Rgb::WHITE);
        assert_eq!(
            colored_pixels(&canvas),
            vec![(10, 10), (11, 10), (12, 11), (13, 11)]
        );
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 3, 7, 8, 7, Rgb::WHITE);
        let expected: Vec<_> = (3..=8).map(|x| (x, 7)).collect();
        assert_eq!(colored_pixels(&canvas), expected);
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 5, 2, 5, 6, Rgb::WHITE);
        let expected: Vec<_> = (2..=6).map(|y| (5, y)).collect();
        assert_eq!(colored_pixels(&canvas), expected);
    }

    #[test]
    fn test_draw_line_single_point() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 7, 7, 7, 7, Rgb::WHITE);
        assert_eq!(colored_pixels(&canvas), vec![(7, 7)]);
    }

    #[test]
    fn test_draw_line_partially_off_canvas() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        draw_line(&mut canvas, -5, -5, 3, 3, Rgb::WHITE);
        assert_eq!(
            colored_pixels(&canvas),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn test_draw_line_colors_with_given_color() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        draw_line(&mut canvas, 0, 0, 4, 0, Rgb::new(10, 20, 30));
        assert_eq!(canvas.get(2, 0), Some(Rgb::new(10, 20, 30)));
    }
}
