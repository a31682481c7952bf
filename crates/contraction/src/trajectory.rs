//! Parabolic trajectory preview for charting.
//!
//! Advisory only: the authoritative contraction number comes from the
//! calculator, not from these samples.

use launcher_core::constants::GRAVITY_M_S2;

/// Number of intervals sampled across the flight time (51 points inclusive).
pub const SAMPLE_INTERVALS: usize = 50;

/// A point on the preview parabola: metres downrange and above the launch plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub x_m: f64,
    pub y_m: f64,
}

/// Restartable iterator over evenly spaced points of the ideal parabola.
/// Cloning yields a fresh pass over the same launch; the samples are a pure
/// function of the launch velocity and angle.
#[derive(Debug, Clone)]
pub struct Trajectory {
    vx_m_s: f64,
    vy_m_s: f64,
    flight_time_s: f64,
    next_sample: usize,
}

impl Trajectory {
    /// Preview a launch at `launch_angle_deg` degrees with speed
    /// `launch_velocity_m_s`.
    pub fn new(launch_velocity_m_s: f64, launch_angle_deg: f64) -> Self {
        let theta = launch_angle_deg.to_radians();
        let vy = launch_velocity_m_s * theta.sin();
        Self {
            vx_m_s: launch_velocity_m_s * theta.cos(),
            vy_m_s: vy,
            flight_time_s: 2.0 * vy / GRAVITY_M_S2,
            next_sample: 0,
        }
    }

    /// Total flight time until the projectile returns to the launch plane (s).
    pub fn flight_time_s(&self) -> f64 {
        self.flight_time_s
    }

    fn point_at(&self, t: f64) -> TrajectoryPoint {
        // Floating-point noise can dip fractionally below the launch plane at
        // the final sample; clamp rather than emit a subterranean point.
        let y = (self.vy_m_s * t - 0.5 * GRAVITY_M_S2 * t * t).max(0.0);
        TrajectoryPoint {
            x_m: self.vx_m_s * t,
            y_m: y,
        }
    }
}

impl Iterator for Trajectory {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<TrajectoryPoint> {
        if self.next_sample > SAMPLE_INTERVALS {
            return None;
        }
        let t = self.flight_time_s * self.next_sample as f64 / SAMPLE_INTERVALS as f64;
        self.next_sample += 1;
        Some(self.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SAMPLE_INTERVALS + 1 - self.next_sample;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Trajectory {}
