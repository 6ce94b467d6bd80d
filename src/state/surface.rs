//! Canvas surface measurements.

/// Device pixel scale used when the window reports nothing sensible.
const DEFAULT_PIXEL_SCALE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    width_px: f64,
    pixel_scale: f64,
}

impl Surface {
    pub fn new(pixel_scale: f64) -> Self {
        Self {
            width_px: 0.0,
            pixel_scale: if pixel_scale > 0.0 {
                pixel_scale
            } else {
                DEFAULT_PIXEL_SCALE
            },
        }
    }

    /// Record a fresh width measurement in CSS pixels.
    pub fn set_width(&mut self, width_px: f64) {
        self.width_px = width_px.max(0.0);
    }

    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Backing-store width in device pixels.
    pub fn render_width(&self) -> u32 {
        (self.width_px * self.pixel_scale).round() as u32
    }

    /// Identical to the width: the globe surface stays square.
    pub fn render_height(&self) -> u32 {
        self.render_width()
    }

    /// True once the host container has been laid out.
    pub fn ready(&self) -> bool {
        self.render_width() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_size_is_square_and_scaled() {
        let mut s = Surface::new(2.0);
        s.set_width(300.0);
        assert_eq!(s.render_width(), 600);
        assert_eq!(s.render_height(), s.render_width());
    }

    #[test]
    fn resize_updates_the_next_measurement() {
        let mut s = Surface::new(1.0);
        s.set_width(300.0);
        s.set_width(480.0);
        assert_eq!(s.render_width(), 480);
    }

    #[test]
    fn zero_width_is_not_ready() {
        let s = Surface::new(2.0);
        assert!(!s.ready());
        assert_eq!(s.render_width(), 0);
    }

    #[test]
    fn negative_measurements_clamp_to_zero() {
        let mut s = Surface::new(2.0);
        s.set_width(-10.0);
        assert_eq!(s.width_px(), 0.0);
    }

    #[test]
    fn bogus_pixel_scale_falls_back() {
        let mut s = Surface::new(0.0);
        s.set_width(100.0);
        assert_eq!(s.render_width(), 200);
    }
}
