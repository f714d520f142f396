/// Device-pixel dimensions of the drawing surface.
///
/// Recomputed wholesale on every resize from the window's CSS size and
/// device pixel ratio; never partially updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Backing-store size for a canvas covering `css_width × css_height`
    /// CSS pixels on a display with the given pixel ratio.
    pub fn from_css(css_width: f64, css_height: f64, pixel_ratio: f64) -> Self {
        Self {
            width: (css_width * pixel_ratio).round().max(0.0) as u32,
            height: (css_height * pixel_ratio).round().max(0.0) as u32,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        let vp = Viewport::from_css(800.0, 600.0, 1.0);
        assert_eq!(vp, Viewport { width: 800, height: 600 });
        assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_ratio_scales_backing_store() {
        let vp = Viewport::from_css(1024.0, 768.0, 2.0);
        assert_eq!(vp, Viewport { width: 2048, height: 1536 });
    }

    #[test]
    fn recomputing_same_metrics_is_a_no_op() {
        let a = Viewport::from_css(1920.0, 1080.0, 1.25);
        let b = Viewport::from_css(1920.0, 1080.0, 1.25);
        assert_eq!(a, b);
    }

    #[test]
    fn fractional_css_sizes_round_to_nearest_pixel() {
        let vp = Viewport::from_css(100.4, 100.6, 1.0);
        assert_eq!(vp, Viewport { width: 100, height: 101 });
    }
}
