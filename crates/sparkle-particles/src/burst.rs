//! Owns the particles of one burst and its completion timer

use crate::animator::{Choreography, ParticleAnimator};
use crate::config::{BurstConfig, BurstOverrides};
use crate::kinematics::{generate, pick_color};
use crate::rand::ParticleRng;
use crate::render::{ParticleInstance, ParticleTransform, RenderSurface};
use sparkle_core::{Color, Generation, Vec2};
use sparkle_runtime::{SparkleEvent, TimerHandle, TimerQueue};

/// At most one live burst. Showing (or re-triggering) mounts a fresh set of
/// particles under a new generation; hiding fades them out and drops them.
pub struct BurstOrchestrator {
    location: Vec2,
    overrides: BurstOverrides,
    config: BurstConfig,
    show: bool,
    completed: bool,
    generation: Generation,
    color_override: Option<Color>,
    particles: Vec<ParticleAnimator>,
    timers: TimerQueue<Generation>,
    completion: Option<TimerHandle>,
    rng: ParticleRng,
    on_complete: Option<Box<dyn FnMut()>>,
    events: Vec<SparkleEvent>,
    /// Pre-allocated instance buffer for packing visible drawables
    instance_buffer: Vec<ParticleInstance>,
}

impl BurstOrchestrator {
    pub fn new(rng: ParticleRng) -> Self {
        Self {
            location: Vec2::ZERO,
            overrides: BurstOverrides::default(),
            config: BurstConfig::default(),
            show: false,
            completed: false,
            generation: Generation::NONE,
            color_override: None,
            particles: Vec::new(),
            timers: TimerQueue::new(),
            completion: None,
            rng,
            on_complete: None,
            events: Vec::new(),
            instance_buffer: Vec::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(ParticleRng::new(seed))
    }

    /// Called once for every burst whose completion window elapses
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Start a new burst at `location`, replacing any burst in flight
    pub fn trigger(&mut self, location: Vec2, overrides: BurstOverrides) -> Generation {
        self.location = location;
        self.overrides = overrides;
        if self.show {
            self.teardown();
        }
        self.mount();
        self.generation
    }

    /// Show or hide the burst. Showing after a hide remounts with fresh
    /// kinematics; hiding fades every particle out and cancels completion.
    pub fn set_show(&mut self, show: bool) {
        match (self.show, show) {
            (false, true) => self.mount(),
            (true, false) => self.hide(),
            _ => {}
        }
    }

    pub fn is_showing(&self) -> bool {
        self.show
    }

    /// Showing, or still fading out after a hide
    pub fn is_active(&self) -> bool {
        self.show || !self.particles.is_empty()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn location(&self) -> Vec2 {
        self.location
    }

    /// Config the current burst was mounted with
    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    /// Burst-wide color when `single_color` is set
    pub fn color_override(&self) -> Option<Color> {
        self.color_override
    }

    pub fn particles(&self) -> &[ParticleAnimator] {
        &self.particles
    }

    /// Milliseconds until completion fires, while pending
    pub fn time_to_completion(&self) -> Option<f32> {
        self.completion
            .and_then(|handle| self.timers.remaining(handle))
            .map(|ms| ms as f32)
    }

    /// Advance particles and the completion timer by `dt` milliseconds.
    /// Returns every event raised since the previous update, including those
    /// from `trigger` and `set_show`.
    pub fn update(&mut self, dt: f32) -> Vec<SparkleEvent> {
        for particle in &mut self.particles {
            particle.advance(dt);
        }

        let show = self.show;
        let current = self.generation;
        self.particles
            .retain(|p| p.generation() == current && (show || !p.is_settled()));

        for generation in self.timers.advance(dt as f64) {
            if generation != self.generation || !self.show || self.completed {
                tracing::debug!(%generation, "ignoring stale completion timer");
                continue;
            }
            self.completed = true;
            self.completion = None;
            tracing::debug!(%generation, "burst complete");
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
            self.events.push(SparkleEvent::BurstCompleted { generation });
        }

        std::mem::take(&mut self.events)
    }

    /// Draw every visible particle, echoes first. Returns the number of draw calls.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> usize {
        let mut draws = 0;
        for particle in &self.particles {
            let state = particle.state();
            if state.opacity <= 0.0 {
                continue;
            }
            let style = particle.style();
            for echo in particle.echoes() {
                surface.draw(self.location, &ParticleTransform::from(&echo), echo.opacity, style);
                draws += 1;
            }
            surface.draw(self.location, &ParticleTransform::from(&state), state.opacity, style);
            draws += 1;
        }
        draws
    }

    /// Pack visible drawables into the instance buffer, in draw order.
    /// Call this after `update()`.
    pub fn pack_instances(&mut self) {
        self.instance_buffer.clear();
        for particle in &self.particles {
            let state = particle.state();
            if state.opacity <= 0.0 {
                continue;
            }
            let style = particle.style();
            for echo in particle.echoes() {
                self.instance_buffer
                    .push(ParticleInstance::new(self.location, &echo, style));
            }
            self.instance_buffer
                .push(ParticleInstance::new(self.location, &state, style));
        }
    }

    /// Get the packed instance data
    pub fn instance_data(&self) -> &[ParticleInstance] {
        &self.instance_buffer
    }

    fn mount(&mut self) {
        let generation = self.generation.bump();
        self.config = self.overrides.resolve();
        self.color_override = if self.config.single_color {
            Some(pick_color(&self.config.colors, &mut self.rng))
        } else {
            None
        };

        let echo_count = self.config.echo_count();
        self.particles = (0..self.config.particle_count)
            .map(|index| {
                let kinematics =
                    generate(index, &self.config, self.color_override, &mut self.rng);
                let choreography = Choreography::roll(&mut self.rng);
                ParticleAnimator::new(index, generation, kinematics, choreography, echo_count)
            })
            .collect();
        for particle in &mut self.particles {
            particle.mount();
        }

        self.show = true;
        self.completed = false;
        let delay = self.config.completion_delay();
        self.completion = Some(self.timers.schedule(delay as f64, generation));

        tracing::debug!(
            %generation,
            particles = self.particles.len(),
            x = self.location.x,
            y = self.location.y,
            "burst mounted"
        );
        self.events.push(SparkleEvent::BurstStarted {
            generation,
            location: self.location,
        });
    }

    /// Fade out the current burst
    fn hide(&mut self) {
        self.show = false;
        self.cancel_completion();
        for particle in &mut self.particles {
            particle.cancel();
        }
    }

    /// Drop the current burst immediately (superseded by a new trigger)
    fn teardown(&mut self) {
        self.show = false;
        self.cancel_completion();
        self.particles.clear();
    }

    fn cancel_completion(&mut self) {
        if let Some(handle) = self.completion.take() {
            self.timers.cancel(handle);
        }
        if !self.completed {
            tracing::debug!(generation = %self.generation, "burst cancelled");
            self.events.push(SparkleEvent::BurstCancelled {
                generation: self.generation,
            });
        }
    }
}

impl Default for BurstOrchestrator {
    fn default() -> Self {
        Self::new(ParticleRng::from_entropy())
    }
}
