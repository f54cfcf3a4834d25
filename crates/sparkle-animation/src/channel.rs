//! A single animated scalar and its playback state

use crate::tween::{sample_tween, Tween};

/// One independently animated scalar (an x offset, an opacity, ...).
///
/// Starting a new tween replaces whatever was playing and begins from the
/// current value, so interrupted moves continue smoothly.
#[derive(Debug, Clone, Default)]
pub struct AnimatedValue {
    value: f32,
    playback: Option<Playback>,
}

#[derive(Debug, Clone)]
struct Playback {
    tween: Tween,
    from: f32,
    elapsed: f32,
    duration: f32,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            playback: None,
        }
    }

    /// Current value
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Jump to `value`, stopping any playback
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.playback = None;
    }

    /// Start `tween` from the current value
    pub fn animate(&mut self, tween: Tween) {
        let duration = tween.duration();
        self.playback = Some(Playback {
            tween,
            from: self.value,
            elapsed: 0.0,
            duration,
        });
        // Zero-length tweens settle immediately
        self.advance(0.0);
    }

    /// Stop playback, keeping the current value
    pub fn stop(&mut self) {
        self.playback = None;
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    /// Value the channel will hold once the current tween ends
    pub fn target(&self) -> f32 {
        match &self.playback {
            Some(p) => p.tween.final_value(p.from),
            None => self.value,
        }
    }

    /// Advance playback by `dt`. Returns true while still animating.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(playback) = self.playback.as_mut() else {
            return false;
        };

        playback.elapsed += dt.max(0.0);
        if playback.elapsed >= playback.duration {
            self.value = playback.tween.final_value(playback.from);
            self.playback = None;
            return false;
        }

        self.value = sample_tween(&playback.tween, playback.from, playback.elapsed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;

    #[test]
    fn animate_runs_to_target() {
        let mut channel = AnimatedValue::new(0.0);
        channel.animate(Tween::to(10.0, 100.0, Easing::Linear));
        assert!(channel.is_animating());
        assert_eq!(channel.target(), 10.0);

        assert!(channel.advance(50.0));
        assert!((channel.get() - 5.0).abs() < 1e-5);

        assert!(!channel.advance(60.0));
        assert_eq!(channel.get(), 10.0);
        assert!(!channel.is_animating());
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut channel = AnimatedValue::new(0.0);
        channel.animate(Tween::to(1.0, 100.0, Easing::Linear));
        channel.advance(50.0);

        channel.animate(Tween::to(0.0, 100.0, Easing::Linear));
        channel.advance(50.0);
        assert!((channel.get() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn set_cancels_playback() {
        let mut channel = AnimatedValue::new(0.0);
        channel.animate(Tween::to(1.0, 100.0, Easing::Linear));
        channel.set(3.0);
        assert!(!channel.is_animating());
        assert!(!channel.advance(10.0));
        assert_eq!(channel.get(), 3.0);
    }

    #[test]
    fn zero_length_tween_settles_on_start() {
        let mut channel = AnimatedValue::new(0.0);
        channel.animate(Tween::to(2.0, 0.0, Easing::Linear));
        assert!(!channel.is_animating());
        assert_eq!(channel.get(), 2.0);
    }

    #[test]
    fn stop_freezes_value() {
        let mut channel = AnimatedValue::new(0.0);
        channel.animate(Tween::to(8.0, 80.0, Easing::Linear));
        channel.advance(20.0);
        channel.stop();
        assert!((channel.get() - 2.0).abs() < 1e-5);
        assert_eq!(channel.target(), channel.get());
    }
}
