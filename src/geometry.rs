//! Canvas geometry: sizes, bounding rectangles and polar layout.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Logical canvas every generator draws on.
pub const CANVAS: CanvasSize = CanvasSize::new(400.0, 600.0);

/// A 2D size in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions at the given export scale, never smaller than 1x1.
    pub fn to_pixels(self, scale: f32) -> (u32, u32) {
        let scale = f64::from(scale);
        (
            ((self.width * scale).round() as u32).max(1),
            ((self.height * scale).round() as u32).max(1),
        )
    }
}

/// An axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the point lies inside, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Splits the rectangle into `count` equal-width columns, left to right.
    pub fn columns(&self, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let width = self.width / count as f64;
        (0..count)
            .map(|i| Rect::new(self.x + width * i as f64, self.y, width, self.height))
            .collect()
    }
}

/// Converts a polar offset around `(cx, cy)` to cartesian coordinates.
///
/// `angle` is in radians, measured clockwise from the positive x axis (canvas
/// y grows downward).
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// `count` evenly spaced angles around a full turn, starting at 0.
pub fn ring_angles(count: usize) -> impl Iterator<Item = f64> {
    let step = if count == 0 { 0.0 } else { TAU / count as f64 };
    (0..count).map(move |i| step * i as f64)
}

/// `count` evenly spaced positions from `start` to `end` inclusive.
///
/// A single position sits at the midpoint.
pub fn spread(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    let origin = if count > 1 { start } else { (start + end) / 2.0 };
    (0..count).map(move |i| origin + step * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 220.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(60.0, 120.0));
        assert!(!rect.contains(111.0, 120.0));
    }

    #[test]
    fn columns_tile_the_rect() {
        let cols = Rect::new(0.0, 0.0, 120.0, 10.0).columns(4);
        assert_eq!(cols.len(), 4);
        assert_eq!(cols[1].x, 30.0);
        assert_eq!(cols[3].right(), 120.0);
        assert!(Rect::default().columns(0).is_empty());
    }

    #[test]
    fn polar_quarter_turn_points_down() {
        let (x, y) = polar(100.0, 100.0, 50.0, std::f64::consts::FRAC_PI_2);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn spread_is_inclusive() {
        let xs: Vec<f64> = spread(100.0, 300.0, 5).collect();
        assert_eq!(xs, vec![100.0, 150.0, 200.0, 250.0, 300.0]);
        let single: Vec<f64> = spread(100.0, 300.0, 1).collect();
        assert_eq!(single, vec![200.0]);
    }

    #[test]
    fn canvas_pixels_follow_scale() {
        assert_eq!(CANVAS.to_pixels(1.0), (400, 600));
        assert_eq!(CANVAS.to_pixels(2.0), (800, 1200));
        assert_eq!(CANVAS.to_pixels(0.0), (1, 1));
    }
}
