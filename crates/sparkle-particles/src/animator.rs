//! Per-particle animation state machine
//!
//! Each particle owns five independent channels (translate x/y, rotate,
//! opacity, scale). The kinematics give closed-form end positions; the
//! channels ease toward them over the particle's lifetime. Channels are only
//! combined into a transform when a frame is drawn.

use crate::kinematics::ParticleKinematics;
use crate::rand::ParticleRng;
use crate::shape::ShapeStyle;
use serde::Serialize;
use sparkle_animation::{AnimatedValue, Easing, Tween};
use sparkle_core::Generation;

/// Fade applied when a particle's motion can't be computed
pub const INVALID_MOTION_FADE_MS: f32 = 100.0;

/// Fade applied when the burst is hidden
pub const CANCEL_FADE_MS: f32 = 150.0;

/// Why a particle is fading out early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeCause {
    /// Non-finite end position or duration
    InvalidMotion,
    /// The burst was hidden or superseded
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorPhase {
    /// Constructed, not yet mounted
    Idle,
    /// Mounted, waiting out the start delay (milliseconds left)
    Delayed { remaining: f32 },
    /// Playing the full-lifetime choreography
    Animating,
    FadingOut(FadeCause),
    /// Done; safe to drop
    Settled,
}

/// Random flourishes of the pop-in, rolled once per particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choreography {
    /// Scale overshoot reached right after launch
    pub scale_peak: f32,
    /// Milliseconds to reach `scale_peak`
    pub scale_rise: f32,
    pub opacity_peak: f32,
    /// Milliseconds to reach `opacity_peak`
    pub opacity_rise: f32,
}

impl Choreography {
    pub fn roll(rng: &mut ParticleRng) -> Self {
        Self {
            scale_peak: rng.range(1.2, 1.8),
            scale_rise: rng.range(60.0, 110.0),
            opacity_peak: rng.range(0.9, 1.0),
            opacity_rise: rng.range(20.0, 40.0),
        }
    }
}

/// Snapshot of a particle's channels, relative to the burst origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnimationState {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Degrees
    pub rotate: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl AnimationState {
    /// Damped copy for trail echo `k` (1-based) out of `trail_length`.
    ///
    /// Position and rotation shrink toward the origin, scale shrinks gently
    /// and opacity drops to a faint fraction.
    pub fn echo(&self, k: usize, trail_length: usize) -> AnimationState {
        let t = k as f32 / (trail_length + 1) as f32;
        AnimationState {
            translate_x: self.translate_x * (1.0 - t),
            translate_y: self.translate_y * (1.0 - t),
            rotate: self.rotate * (1.0 - t),
            scale: self.scale * (1.0 - t * 0.3),
            opacity: self.opacity * (0.2 * (1.0 - t) + 0.05),
        }
    }
}

/// Drives one particle from mount to settle
pub struct ParticleAnimator {
    index: usize,
    generation: Generation,
    kinematics: ParticleKinematics,
    choreography: Choreography,
    style: ShapeStyle,
    echo_count: usize,
    phase: AnimatorPhase,
    translate_x: AnimatedValue,
    translate_y: AnimatedValue,
    rotate: AnimatedValue,
    opacity: AnimatedValue,
    scale: AnimatedValue,
}

impl ParticleAnimator {
    pub fn new(
        index: usize,
        generation: Generation,
        kinematics: ParticleKinematics,
        choreography: Choreography,
        echo_count: usize,
    ) -> Self {
        let style = ShapeStyle::new(kinematics.shape, kinematics.size, kinematics.color);
        Self {
            index,
            generation,
            kinematics,
            choreography,
            style,
            echo_count,
            phase: AnimatorPhase::Idle,
            translate_x: AnimatedValue::new(0.0),
            translate_y: AnimatedValue::new(0.0),
            rotate: AnimatedValue::new(0.0),
            opacity: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(0.0),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn kinematics(&self) -> &ParticleKinematics {
        &self.kinematics
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == AnimatorPhase::Settled
    }

    /// Place the particle at its jitter offset, invisible, and start the delay.
    /// Has no effect unless the particle is `Idle`.
    pub fn mount(&mut self) {
        if self.phase != AnimatorPhase::Idle {
            return;
        }
        self.translate_x.set(self.kinematics.start_offset_x);
        self.translate_y.set(self.kinematics.start_offset_y);
        self.rotate.set(0.0);
        self.opacity.set(0.0);
        self.scale.set(0.0);

        let delay = self.kinematics.delay;
        if delay > 0.0 {
            self.phase = AnimatorPhase::Delayed { remaining: delay };
        } else {
            self.start();
        }
    }

    /// Fade opacity and scale out over `CANCEL_FADE_MS`, from any phase.
    /// A pending start delay is dropped so the choreography never begins.
    pub fn cancel(&mut self) {
        match self.phase {
            AnimatorPhase::Settled | AnimatorPhase::FadingOut(FadeCause::Cancelled) => {}
            _ => self.fade_out(FadeCause::Cancelled, CANCEL_FADE_MS),
        }
    }

    /// Advance by `dt` milliseconds
    pub fn advance(&mut self, dt: f32) {
        let mut dt = dt.max(0.0);

        if let AnimatorPhase::Delayed { remaining } = self.phase {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                self.phase = AnimatorPhase::Delayed { remaining };
                return;
            }
            self.start();
            // Spend what's left of this frame on the fresh choreography
            dt = -remaining;
        }

        match self.phase {
            AnimatorPhase::Animating => {
                let mut running = false;
                for channel in self.channels_mut() {
                    running |= channel.advance(dt);
                }
                if !running {
                    self.phase = AnimatorPhase::Settled;
                }
            }
            AnimatorPhase::FadingOut(_) => {
                let opacity = self.opacity.advance(dt);
                let scale = self.scale.advance(dt);
                self.translate_x.advance(dt);
                self.translate_y.advance(dt);
                self.rotate.advance(dt);
                if !opacity && !scale {
                    for channel in self.channels_mut() {
                        channel.stop();
                    }
                    self.phase = AnimatorPhase::Settled;
                }
            }
            AnimatorPhase::Idle | AnimatorPhase::Delayed { .. } | AnimatorPhase::Settled => {}
        }
    }

    /// Current channel values
    pub fn state(&self) -> AnimationState {
        AnimationState {
            translate_x: self.translate_x.get(),
            translate_y: self.translate_y.get(),
            rotate: self.rotate.get(),
            opacity: self.opacity.get(),
            scale: self.scale.get(),
        }
    }

    pub fn echo_count(&self) -> usize {
        self.echo_count
    }

    /// Trail echoes derived from the live channels, k = 1..=echo_count
    pub fn echoes(&self) -> impl Iterator<Item = AnimationState> + '_ {
        let state = self.state();
        (1..=self.echo_count).map(move |k| state.echo(k, self.echo_count))
    }

    fn start(&mut self) {
        let k = &self.kinematics;
        let duration = k.particle_duration;
        let t = duration / 1000.0;
        let start_x = self.translate_x.get();
        let start_y = self.translate_y.get();
        let final_x = start_x + k.initial_vel_x * t;
        let final_y = start_y + k.initial_vel_y * t + 0.5 * k.gravity * t * t;

        if !final_x.is_finite() || !final_y.is_finite() || !duration.is_finite() || duration <= 0.0 {
            tracing::warn!(
                index = self.index,
                "particle motion is not finite; fading out instead of animating"
            );
            self.fade_out(FadeCause::InvalidMotion, INVALID_MOTION_FADE_MS);
            return;
        }

        let c = self.choreography;
        self.scale.animate(
            Tween::to(c.scale_peak, c.scale_rise, Easing::OutCubic)
                .then(Tween::to(0.0, duration * 0.6, Easing::InQuad).delayed(duration * 0.3)),
        );
        self.opacity.animate(
            Tween::to(c.opacity_peak, c.opacity_rise, Easing::Linear)
                .then(Tween::to(0.0, duration * 0.75, Easing::InCubic).delayed(duration * 0.15)),
        );
        self.translate_x
            .animate(Tween::to(final_x, duration, Easing::OutQuad));
        self.translate_y
            .animate(Tween::to(final_y, duration, Easing::InQuad));
        self.rotate
            .animate(Tween::to(k.rotation_speed * t, duration, Easing::Linear));

        self.phase = AnimatorPhase::Animating;
    }

    fn fade_out(&mut self, cause: FadeCause, duration: f32) {
        self.opacity
            .animate(Tween::to(0.0, duration, Easing::InOutQuad));
        self.scale.animate(Tween::to(0.0, duration, Easing::InOutQuad));
        self.phase = AnimatorPhase::FadingOut(cause);
    }

    fn channels_mut(&mut self) -> [&mut AnimatedValue; 5] {
        [
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.rotate,
            &mut self.opacity,
            &mut self.scale,
        ]
    }
}
