//! Autonomous rotation blended with a spring-smoothed drag offset.
//!
//! The autonomous angle advances by a fixed step each idle frame, matching the
//! dashboard's original pacing. The drag offset is eased through a
//! mass/damper/spring filter integrated with semi-implicit Euler over elapsed
//! real time, so the settle looks the same at 30 Hz and 144 Hz.

/// Radians added per idle frame; one revolution in roughly 20 s at 60 Hz.
const AUTO_STEP: f64 = 0.005;

const MASS: f64 = 1.0;
const DAMPING: f64 = 50.0;
const STIFFNESS: f64 = 280.0;

/// Cap on the elapsed time fed to the spring, so a background-tab stall
/// cannot blow up the integration.
const MAX_DT: f64 = 0.1;
/// Largest single integration step; longer frames are substepped.
const MAX_STEP: f64 = 1.0 / 60.0;

#[derive(Debug)]
pub struct Rotation {
    /// Monotonically increasing while idle; never reset.
    phi: f64,
    /// Spring position: the smoothed drag offset in radians.
    smoothed: f64,
    /// Spring velocity in rad/s.
    velocity: f64,
}

impl Rotation {
    pub fn new() -> Self {
        Self {
            phi: 0.0,
            smoothed: 0.0,
            velocity: 0.0,
        }
    }

    pub fn autonomous_angle(&self) -> f64 {
        self.phi
    }

    pub fn smoothed_offset(&self) -> f64 {
        self.smoothed
    }

    /// Advance one frame and return the angle to render.
    ///
    /// `dt` is elapsed real seconds since the previous frame; `target` is the
    /// drag tracker's current offset. While `dragging`, the autonomous step is
    /// suspended and manual control takes over.
    pub fn tick(&mut self, dt: f64, dragging: bool, target: f64) -> f64 {
        if !dragging {
            self.phi += AUTO_STEP;
        }
        let mut remaining = dt.clamp(0.0, MAX_DT);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel =
                (-STIFFNESS * (self.smoothed - target) - DAMPING * self.velocity) / MASS;
            self.velocity += accel * h;
            self.smoothed += self.velocity * h;
            remaining -= h;
        }
        self.phi + self.smoothed
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn idle_frames_advance_by_exactly_the_fixed_step() {
        let mut rot = Rotation::new();
        for _ in 0..10 {
            let before = rot.autonomous_angle();
            rot.tick(FRAME, false, 0.0);
            assert_eq!(rot.autonomous_angle(), before + AUTO_STEP);
        }
    }

    #[test]
    fn dragging_suspends_the_autonomous_step() {
        let mut rot = Rotation::new();
        rot.tick(FRAME, false, 0.0);
        let phi = rot.autonomous_angle();
        for _ in 0..5 {
            rot.tick(FRAME, true, 0.4);
        }
        assert_eq!(rot.autonomous_angle(), phi);
        rot.tick(FRAME, false, 0.4);
        assert_eq!(rot.autonomous_angle(), phi + AUTO_STEP);
    }

    #[test]
    fn smoothed_offset_converges_without_overshoot() {
        let mut rot = Rotation::new();
        let target = 0.5;
        let mut peak: f64 = 0.0;
        for _ in 0..120 {
            rot.tick(FRAME, true, target);
            peak = peak.max(rot.smoothed_offset());
        }
        assert!((rot.smoothed_offset() - target).abs() < 1e-3);
        assert!(peak <= target * 1.01);
    }

    #[test]
    fn settle_is_frame_rate_independent() {
        // One second of simulated time at two refresh rates; long frames are
        // substepped, so the trajectories must land in the same place.
        let mut slow = Rotation::new();
        for _ in 0..30 {
            slow.tick(1.0 / 30.0, true, 1.0);
        }
        let mut fast = Rotation::new();
        for _ in 0..60 {
            fast.tick(FRAME, true, 1.0);
        }
        assert!((slow.smoothed_offset() - fast.smoothed_offset()).abs() < 1e-9);
    }

    #[test]
    fn oversized_dt_stays_bounded() {
        let mut rot = Rotation::new();
        rot.tick(10.0, true, 1.0);
        assert!(rot.smoothed_offset().is_finite());
        assert!(rot.smoothed_offset() <= 1.01);
    }

    #[test]
    fn render_angle_is_autonomous_plus_smoothed() {
        let mut rot = Rotation::new();
        let angle = rot.tick(FRAME, false, 0.3);
        assert_eq!(angle, rot.autonomous_angle() + rot.smoothed_offset());
    }
}
