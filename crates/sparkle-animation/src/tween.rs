//! Tween sequences and pure evaluation

use crate::easing::Easing;

/// One segment of a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Move from the current value to `target` over `duration`
    To {
        target: f32,
        duration: f32,
        easing: Easing,
    },
    /// Hold the current value for `duration`
    Wait(f32),
}

impl Step {
    /// Duration of this step. Negative or non-finite durations count as zero.
    pub fn duration(&self) -> f32 {
        let d = match *self {
            Step::To { duration, .. } => duration,
            Step::Wait(duration) => duration,
        };
        if d.is_finite() {
            d.max(0.0)
        } else {
            0.0
        }
    }

    /// Value at the end of this step, given the value it starts from
    fn end_value(&self, from: f32) -> f32 {
        match *self {
            Step::To { target, .. } => target,
            Step::Wait(_) => from,
        }
    }
}

/// An ordered list of steps played back to back
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tween {
    steps: Vec<Step>,
}

impl Tween {
    /// A single eased move to `target`
    pub fn to(target: f32, duration: f32, easing: Easing) -> Self {
        Self {
            steps: vec![Step::To {
                target,
                duration,
                easing,
            }],
        }
    }

    /// A tween that only waits
    pub fn wait(duration: f32) -> Self {
        Self {
            steps: vec![Step::Wait(duration)],
        }
    }

    /// Append `next` after this tween
    pub fn then(mut self, next: Tween) -> Self {
        self.steps.extend(next.steps);
        self
    }

    /// Prefix this tween with a wait
    pub fn delayed(self, delay: f32) -> Self {
        Tween::wait(delay).then(self)
    }

    /// Total playback time
    pub fn duration(&self) -> f32 {
        self.steps.iter().map(Step::duration).sum()
    }

    /// Value once playback finishes, starting from `from`
    pub fn final_value(&self, from: f32) -> f32 {
        self.steps.iter().fold(from, |value, step| step.end_value(value))
    }
}

/// Evaluate `tween` at `time`, starting from `from`.
///
/// Each `To` step interpolates from the value the previous step ended on.
/// Times before zero clamp to `from`, times past the end clamp to the final value.
pub fn sample_tween(tween: &Tween, from: f32, time: f32) -> f32 {
    let mut value = from;
    let mut remaining = time.max(0.0);

    for step in &tween.steps {
        let duration = step.duration();
        if remaining < duration {
            return match *step {
                Step::To { target, easing, .. } => {
                    let progress = easing.apply(remaining / duration);
                    value + (target - value) * progress
                }
                Step::Wait(_) => value,
            };
        }
        remaining -= duration;
        value = step.end_value(value);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_empty_tween_returns_start() {
        let tween = Tween::default();
        assert_eq!(sample_tween(&tween, 3.0, 10.0), 3.0);
        assert_eq!(tween.duration(), 0.0);
    }

    #[test]
    fn sample_linear_midpoint() {
        let tween = Tween::to(10.0, 100.0, Easing::Linear);
        assert!((sample_tween(&tween, 0.0, 50.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn sample_clamps_outside_range() {
        let tween = Tween::to(10.0, 100.0, Easing::OutQuad);
        assert_eq!(sample_tween(&tween, 2.0, -5.0), 2.0);
        assert_eq!(sample_tween(&tween, 2.0, 500.0), 10.0);
    }

    #[test]
    fn sequence_rise_hold_decay() {
        // Rise to 1 in 10, hold 20, fall to 0 in 10
        let tween = Tween::to(1.0, 10.0, Easing::Linear)
            .then(Tween::to(0.0, 10.0, Easing::Linear).delayed(20.0));
        assert!((tween.duration() - 40.0).abs() < 1e-6);
        assert!((sample_tween(&tween, 0.0, 5.0) - 0.5).abs() < 1e-5);
        assert_eq!(sample_tween(&tween, 0.0, 25.0), 1.0);
        assert!((sample_tween(&tween, 0.0, 35.0) - 0.5).abs() < 1e-5);
        assert_eq!(sample_tween(&tween, 0.0, 40.0), 0.0);
        assert_eq!(tween.final_value(0.0), 0.0);
    }

    #[test]
    fn zero_duration_step_jumps() {
        let tween = Tween::to(4.0, 0.0, Easing::Linear);
        assert_eq!(sample_tween(&tween, 0.0, 0.0), 4.0);
    }

    #[test]
    fn non_finite_duration_counts_as_zero() {
        let tween = Tween::to(4.0, f32::NAN, Easing::Linear).then(Tween::wait(f32::INFINITY));
        assert_eq!(tween.duration(), 0.0);
        assert_eq!(sample_tween(&tween, 0.0, 1.0), 4.0);
    }
}
