//! Canvas 2D dot-globe painter.
//!
//! The sphere is a fixed Fibonacci lattice of sample points plus the marker
//! list, rotated by the current angle, orthographically projected and shaded
//! per dot. Projection and shading are plain math over `[f64; 3]` vectors so
//! they run under `cargo test`; only [`GlobeRenderer::paint`] touches the
//! canvas.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::model::GlobeConfig;
use crate::util::{css_rgba, scale_rgb};

/// Fixed tilt of the polar axis toward the viewer, in radians.
const TILT: f64 = 0.3;
/// Golden angle driving the Fibonacci lattice.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
/// Globe radius as a fraction of the half surface, leaving room for the glow.
const RADIUS_FRAC: f64 = 0.8;
/// Sample dot radius as a fraction of the globe radius.
const DOT_FRAC: f64 = 0.004;

pub struct GlobeRenderer {
    config: GlobeConfig,
    /// Unit-sphere sample points, fixed at construction.
    samples: Vec<[f64; 3]>,
    /// Marker unit vectors paired with their size hints.
    marker_units: Vec<([f64; 3], f64)>,
}

impl GlobeRenderer {
    pub fn new(config: GlobeConfig) -> Self {
        let samples = fibonacci_sphere(config.map_samples as usize);
        let marker_units = config
            .markers
            .iter()
            .map(|m| (latlon_to_unit(m.lat, m.lon), m.size))
            .collect();
        Self {
            config,
            samples,
            marker_units,
        }
    }

    /// Paint one frame at the given rotation angle onto a square backing
    /// store of `width` x `height` device pixels. A zero-sized surface is
    /// skipped outright.
    pub fn paint(&self, ctx: &CanvasRenderingContext2d, angle: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let w = width as f64;
        let h = height as f64;
        let cx = w * 0.5;
        let cy = h * 0.5;
        let radius = w.min(h) * 0.5 * RADIUS_FRAC;

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        ctx.clear_rect(0.0, 0.0, w, h);

        // Halo behind the sphere.
        if let Ok(glow) = ctx.create_radial_gradient(cx, cy, radius * 0.6, cx, cy, radius * 1.25) {
            glow.add_color_stop(0.0, &css_rgba(self.config.glow_color, 0.25))
                .ok();
            glow.add_color_stop(1.0, &css_rgba(self.config.glow_color, 0.0))
                .ok();
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.begin_path();
            ctx.arc(cx, cy, radius * 1.25, 0.0, PI * 2.0).ok();
            ctx.fill();
        }

        // Sphere body under the dots.
        let body_level = if self.config.dark { 0.22 } else { 0.92 };
        ctx.set_fill_style_str(&css_rgba(scale_rgb(self.config.base_color, body_level), 1.0));
        ctx.begin_path();
        ctx.arc(cx, cy, radius, 0.0, PI * 2.0).ok();
        ctx.fill();

        let dot_r = (radius * DOT_FRAC).max(0.5);
        for p in &self.samples {
            let q = rotate(*p, angle, TILT);
            if q[2] <= 0.0 {
                continue;
            }
            let lum = shade(q[2], self.config.diffuse, self.config.map_brightness);
            ctx.set_fill_style_str(&css_rgba(self.config.base_color, lum));
            let x = cx + q[0] * radius;
            let y = cy - q[1] * radius;
            ctx.fill_rect(x - dot_r, y - dot_r, dot_r * 2.0, dot_r * 2.0);
        }

        for (unit, size) in &self.marker_units {
            let q = rotate(*unit, angle, TILT);
            if q[2] <= 0.0 {
                continue;
            }
            let x = cx + q[0] * radius;
            let y = cy - q[1] * radius;
            ctx.set_fill_style_str(&css_rgba(self.config.marker_color, 1.0));
            ctx.begin_path();
            ctx.arc(x, y, radius * size * 0.5, 0.0, PI * 2.0).ok();
            ctx.fill();
        }
    }
}

/// Evenly distributed points on the unit sphere.
fn fibonacci_sphere(n: usize) -> Vec<[f64; 3]> {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
        let r = (1.0 - y * y).sqrt();
        let theta = GOLDEN_ANGLE * i as f64;
        points.push([r * theta.cos(), y, r * theta.sin()]);
    }
    points
}

/// Unit vector for a latitude/longitude pair in degrees. +y is north and +z
/// faces the viewer at longitude 0 with zero rotation.
fn latlon_to_unit(lat_deg: f64, lon_deg: f64) -> [f64; 3] {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    [lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos()]
}

/// Spin about the polar axis by `phi`, then tilt the axis toward the viewer.
fn rotate(p: [f64; 3], phi: f64, tilt: f64) -> [f64; 3] {
    let (sp, cp) = phi.sin_cos();
    let x = p[0] * cp + p[2] * sp;
    let z = -p[0] * sp + p[2] * cp;
    let (st, ct) = tilt.sin_cos();
    [x, p[1] * ct - z * st, p[1] * st + z * ct]
}

/// Per-dot luminance from the view-facing component of the surface normal.
fn shade(normal_z: f64, diffuse: f64, brightness: f64) -> f64 {
    (normal_z.max(0.0).powf(diffuse) * brightness / 6.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GlobeConfig;

    const EPS: f64 = 1e-9;

    #[test]
    fn lattice_points_are_unit_length() {
        for p in fibonacci_sphere(500) {
            let n = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((n - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn latlon_poles_and_prime_meridian() {
        let north = latlon_to_unit(90.0, 0.0);
        assert!((north[1] - 1.0).abs() < EPS);

        let greenwich = latlon_to_unit(0.0, 0.0);
        assert!((greenwich[2] - 1.0).abs() < EPS);
        assert!(greenwich[0].abs() < EPS && greenwich[1].abs() < EPS);
    }

    #[test]
    fn half_turn_moves_front_to_back() {
        let front = latlon_to_unit(0.0, 0.0);
        let q = rotate(front, PI, 0.0);
        assert!((q[2] + 1.0).abs() < EPS);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = latlon_to_unit(37.0, -122.0);
        let q = rotate(p, 1.3, TILT);
        let n = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2]).sqrt();
        assert!((n - 1.0).abs() < EPS);
    }

    #[test]
    fn tilt_leans_the_pole_toward_the_viewer() {
        let north = latlon_to_unit(90.0, 0.0);
        let q = rotate(north, 0.0, TILT);
        assert!(q[2] > 0.0);
    }

    #[test]
    fn shade_is_clamped_and_dark_on_the_limb() {
        assert_eq!(shade(-0.5, 1.2, 6.0), 0.0);
        assert_eq!(shade(0.0, 1.2, 6.0), 0.0);
        assert!(shade(1.0, 1.2, 6.0) <= 1.0);
        assert!(shade(0.5, 1.2, 6.0) < shade(1.0, 1.2, 6.0));
        assert_eq!(shade(1.0, 1.0, 60.0), 1.0);
    }

    #[test]
    fn renderer_precomputes_samples_and_markers() {
        let config = GlobeConfig::sustainability_default();
        let renderer = GlobeRenderer::new(config.clone());
        assert_eq!(renderer.samples.len(), config.map_samples as usize);
        assert_eq!(renderer.marker_units.len(), config.markers.len());
    }
}
