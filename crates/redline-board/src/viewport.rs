//! Marker coordinate mapping for design images.
//!
//! Converts a pointer position inside a rendered image into percentage
//! coordinates relative to that image, and back for rendering. Because a
//! comment stores percentages rather than pixels, its marker stays
//! anchored at the same relative position however large the image is
//! rendered later.

/// A marker position in percentage coordinates: `(0, 0)` is the image's
/// top-left corner, `(100, 100)` its bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
}

impl MarkerPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rendered image element's bounding rectangle at the moment of
/// interaction, in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBounds {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl ImageBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Converts an absolute pointer position into percentage coordinates.
    ///
    /// Formula:
    /// ```text
    /// x = (pointer_x - left) / width * 100
    /// y = (pointer_y - top) / height * 100
    /// ```
    ///
    /// The result is **not clamped** to `[0, 100]`: callers must only feed
    /// pointer events that originate within these bounds. A click exactly
    /// on the boundary yields exactly 0 or 100.
    pub fn point_to_percent(&self, pointer_x: f64, pointer_y: f64) -> MarkerPoint {
        MarkerPoint {
            x: (pointer_x - self.left) / self.width * 100.0,
            y: (pointer_y - self.top) / self.height * 100.0,
        }
    }

    /// Converts stored percentages back to an absolute pixel position
    /// within these bounds (which need not be the bounds the marker was
    /// placed in).
    pub fn percent_to_point(&self, marker: MarkerPoint) -> (f64, f64) {
        (
            self.left + marker.x / 100.0 * self.width,
            self.top + marker.y / 100.0 * self.height,
        )
    }

    /// Top-left pixel position for drawing a marker of `diameter` so that
    /// its visual center sits exactly on the stored point.
    pub fn marker_anchor(&self, marker: MarkerPoint, diameter: f64) -> (f64, f64) {
        let (center_x, center_y) = self.percent_to_point(marker);
        (center_x - diameter / 2.0, center_y - diameter / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_core::constants::MARKER_DIAMETER;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pointer_maps_to_percentages() {
        let bounds = ImageBounds::new(40.0, 80.0, 600.0, 400.0);
        let marker = bounds.point_to_percent(40.0 + 0.3 * 600.0, 80.0 + 0.4 * 400.0);
        assert!(approx_eq(marker.x, 30.0));
        assert!(approx_eq(marker.y, 40.0));
    }

    #[test]
    fn test_boundary_clicks_yield_exact_extremes() {
        let bounds = ImageBounds::new(10.0, 20.0, 200.0, 100.0);
        let top_left = bounds.point_to_percent(10.0, 20.0);
        assert!(approx_eq(top_left.x, 0.0));
        assert!(approx_eq(top_left.y, 0.0));

        let bottom_right = bounds.point_to_percent(210.0, 120.0);
        assert!(approx_eq(bottom_right.x, 100.0));
        assert!(approx_eq(bottom_right.y, 100.0));
    }

    #[test]
    fn test_mapping_is_stable_under_resize() {
        // Place in one box, render in another: the marker keeps the same
        // relative position.
        let placed_in = ImageBounds::new(0.0, 0.0, 800.0, 600.0);
        let marker = placed_in.point_to_percent(240.0, 240.0);

        let rendered_in = ImageBounds::new(15.0, 5.0, 320.0, 240.0);
        let (x, y) = rendered_in.percent_to_point(marker);
        assert!(approx_eq((x - 15.0) / 320.0, 240.0 / 800.0));
        assert!(approx_eq((y - 5.0) / 240.0, 240.0 / 600.0));
    }

    #[test]
    fn test_round_trip_within_one_box() {
        let bounds = ImageBounds::new(33.0, 7.0, 512.0, 384.0);
        let marker = bounds.point_to_percent(100.0, 200.0);
        let (x, y) = bounds.percent_to_point(marker);
        assert!(approx_eq(x, 100.0));
        assert!(approx_eq(y, 200.0));
    }

    #[test]
    fn test_marker_anchor_centers_the_marker() {
        let bounds = ImageBounds::new(0.0, 0.0, 100.0, 100.0);
        let marker = MarkerPoint::new(50.0, 50.0);
        let (left, top) = bounds.marker_anchor(marker, MARKER_DIAMETER);
        assert!(approx_eq(left, 50.0 - MARKER_DIAMETER / 2.0));
        assert!(approx_eq(top, 50.0 - MARKER_DIAMETER / 2.0));
    }
}
