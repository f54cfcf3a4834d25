//! Fixed-rate stepping for headless hosts

/// Longest frame a single `advance` accepts, in seconds
const MAX_FRAME_TIME: f64 = 0.25;

/// Splits arbitrary frame deltas into whole fixed steps.
/// Leftover time carries into the next `advance`.
pub struct StepClock {
    step: f64,
    carry: f64,
    elapsed: f64,
}

impl StepClock {
    /// Clock stepping `hz` times per second (at least once)
    pub fn new(hz: f64) -> Self {
        let hz = if hz.is_finite() { hz.max(1.0) } else { 60.0 };
        Self {
            step: 1.0 / hz,
            carry: 0.0,
            elapsed: 0.0,
        }
    }

    /// Length of one step in seconds
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Seconds fed in so far, after clamping
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Feed `dt` seconds and return how many whole steps are now due.
    /// Negative or non-finite deltas count as zero; long stalls are clamped.
    pub fn advance(&mut self, dt: f64) -> u32 {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_TIME)
        } else {
            0.0
        };
        self.elapsed += dt;
        self.carry += dt;

        let mut due = 0;
        while self.carry >= self.step {
            self.carry -= self.step;
            due += 1;
        }
        due
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_matching_frame() {
        let mut clock = StepClock::new(60.0);
        let step = clock.step();
        for _ in 0..10 {
            assert_eq!(clock.advance(step), 1);
        }
        assert!((clock.elapsed() - 10.0 * step).abs() < 1e-9);
    }

    #[test]
    fn short_frames_carry_over() {
        let mut clock = StepClock::new(8.0);
        assert_eq!(clock.advance(0.0625), 0);
        assert_eq!(clock.advance(0.0625), 1);
        assert_eq!(clock.advance(0.25), 2);
    }

    #[test]
    fn stalls_are_clamped() {
        let mut clock = StepClock::new(8.0);
        assert_eq!(clock.advance(10.0), 2);
        assert!((clock.elapsed() - MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn bad_deltas_count_as_zero() {
        let mut clock = StepClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn rate_is_at_least_one_hertz() {
        assert_eq!(StepClock::new(0.0).step(), 1.0);
        assert!((StepClock::new(f64::NAN).step() - 1.0 / 60.0).abs() < 1e-12);
    }
}
