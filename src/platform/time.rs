//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Clamps measured frame deltas before they reach the simulation. A stall
/// of any length becomes a single step of at most `max_dt`.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    max_dt: f32,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last_time: None,
        }
    }

    /// Clamp a measured delta (seconds) to `[0, max_dt]`. NaN becomes 0.
    pub fn clamp(&self, measured: f32) -> f32 {
        if measured.is_nan() {
            return 0.0;
        }
        measured.clamp(0.0, self.max_dt)
    }

    /// Feed a timestamp in seconds; returns the clamped delta since the
    /// previous one (0 on the first call)
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);
        self.clamp(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        let clock = FrameClock::default();
        assert_eq!(clock.clamp(0.5), 0.1);
        assert_eq!(clock.clamp(-0.2), 0.0);
        assert_eq!(clock.clamp(f32::NAN), 0.0);
        assert_eq!(clock.clamp(f32::INFINITY), 0.1);
        assert!((clock.clamp(0.016) - 0.016).abs() < 1e-7);
    }

    #[test]
    fn test_advance_measures_between_calls() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.advance(10.0), 0.0);
        assert!((clock.advance(10.02) - 0.02).abs() < 1e-5);
        // Long stall gets clamped
        assert_eq!(clock.advance(15.0), 0.1);
    }
}
