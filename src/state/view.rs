//! View and visualization state

use crate::constants::zoom::{MAX_SCALE, MIN_SCALE};

/// Horizontal pan/zoom applied to a chart's x axis
///
/// Maps a base-scale pixel `px` to `k * px + x`. `k` stays within the
/// configured zoom extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    k: f64,
    x: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub const fn identity() -> Self {
        Self { k: 1.0, x: 0.0 }
    }

    pub fn scale(&self) -> f64 {
        self.k
    }

    pub fn offset(&self) -> f64 {
        self.x
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.x == 0.0
    }

    pub fn apply_x(&self, px: f64) -> f64 {
        self.k * px + self.x
    }

    pub fn invert_x(&self, px: f64) -> f64 {
        (px - self.x) / self.k
    }

    /// Multiply the scale by `factor`, keeping the pixel under `anchor_x` fixed
    pub fn zoom_at(&mut self, anchor_x: f64, factor: f64) {
        if !(factor > 0.0) || !factor.is_finite() || !anchor_x.is_finite() {
            return;
        }
        let k = (self.k * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.x = anchor_x - (anchor_x - self.x) * k / self.k;
        self.k = k;
    }

    pub fn pan(&mut self, dx: f64) {
        if dx.is_finite() {
            self.x += dx;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}

/// Display options shared by every chart
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help window
    pub show_help: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Colour legend visibility
    pub show_legend: bool,

    /// Runtime size legend visibility (revenue chart only)
    pub show_size_legend: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_help: false,
            show_grid: true,
            show_legend: true,
            show_size_legend: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut t = ViewTransform::identity();
        t.zoom_at(300.0, 2.0);
        assert_eq!(t.scale(), 2.0);
        assert_eq!(t.apply_x(300.0), 300.0);
        assert_eq!(t.apply_x(400.0), 500.0);
        assert_eq!(t.invert_x(500.0), 400.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut t = ViewTransform::identity();
        t.zoom_at(100.0, 0.25);
        assert!(t.is_identity());

        t.zoom_at(100.0, 1000.0);
        assert_eq!(t.scale(), MAX_SCALE);
        assert!((t.apply_x(100.0) - 100.0).abs() < 1e-9);

        t.zoom_at(100.0, f64::NAN);
        assert_eq!(t.scale(), MAX_SCALE);
    }

    #[test]
    fn test_pan_and_reset() {
        let mut t = ViewTransform::identity();
        t.zoom_at(0.0, 4.0);
        t.pan(-30.0);
        assert_eq!(t.offset(), -30.0);
        assert_eq!(t.apply_x(10.0), 10.0);

        t.reset();
        assert!(t.is_identity());
    }
}
