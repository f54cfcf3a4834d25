//! Sparkle Particles - tap-triggered particle bursts
//!
//! A burst spawns a set of short-lived particles at a tap location:
//! - Per-particle kinematics rolled from a `BurstConfig` (ring, fan or random spread)
//! - Closed-form ballistic end positions eased over each particle's lifetime
//! - Optional motion-trail echoes drawn behind each particle
//! - A completion notice once the burst's time window elapses
//! - Named presets loaded from TOML

pub mod animator;
pub mod burst;
pub mod config;
pub mod kinematics;
pub mod presets;
pub mod rand;
pub mod render;
pub mod shape;

use sparkle_core::{Generation, Result, SparkleError, Vec2};
use sparkle_runtime::{EventBus, RuntimeSystem, SparkleEvent};

pub use animator::{AnimationState, AnimatorPhase, ParticleAnimator};
pub use burst::BurstOrchestrator;
pub use config::{BurstConfig, BurstOverrides, Direction, Range, ShapeKind};
pub use kinematics::ParticleKinematics;
pub use presets::{Preset, PresetCatalog};
pub use render::{ParticleInstance, ParticleTransform, RenderSurface};
pub use shape::ShapeStyle;

/// Preset gallery plus the live burst. Implements RuntimeSystem for
/// integration with the frame loop.
pub struct SparkleSystem {
    pub burst: BurstOrchestrator,
    catalog: PresetCatalog,
    selected: usize,
}

impl SparkleSystem {
    pub fn new(catalog: PresetCatalog, rng: rand::ParticleRng) -> Self {
        Self {
            burst: BurstOrchestrator::new(rng),
            catalog,
            selected: 0,
        }
    }

    /// Built-in presets with an entropy-seeded generator
    pub fn with_builtin_presets() -> Result<Self> {
        Ok(Self::new(
            PresetCatalog::builtin()?,
            rand::ParticleRng::from_entropy(),
        ))
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn selected(&self) -> &Preset {
        self.catalog
            .iter()
            .nth(self.selected)
            .unwrap_or_else(|| self.catalog.first())
    }

    /// Choose the preset used by the next tap. The burst in flight keeps
    /// the config it was mounted with.
    pub fn select_preset(&mut self, value: &str) -> Result<()> {
        self.selected = self
            .catalog
            .iter()
            .position(|p| p.value == value)
            .ok_or_else(|| SparkleError::PresetNotFound(value.to_string()))?;
        tracing::debug!(preset = value, "preset selected");
        Ok(())
    }

    /// Start a burst of the selected preset at `location`
    pub fn tap(&mut self, location: Vec2) -> Generation {
        let overrides = self.selected().overrides.clone();
        self.burst.trigger(location, overrides)
    }

    /// Hide the burst early, fading out whatever is still in flight
    pub fn hide(&mut self) {
        self.burst.set_show(false);
    }
}

impl RuntimeSystem for SparkleSystem {
    fn initialize(&mut self, _events: &mut EventBus) -> Result<()> {
        tracing::info!(
            presets = self.catalog.len(),
            selected = %self.selected().value,
            "sparkle system ready"
        );
        Ok(())
    }

    fn update(&mut self, events: &mut EventBus, dt: f64) -> Result<()> {
        let drained = self.burst.update((dt * 1000.0) as f32);
        if drained
            .iter()
            .any(|e| matches!(e, SparkleEvent::BurstCompleted { .. }))
        {
            self.burst.set_show(false);
        }
        events.extend(drained);

        self.burst.pack_instances();
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.burst.set_show(false);
        Ok(())
    }

    fn name(&self) -> &str {
        "sparkles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SparkleSystem {
        SparkleSystem::new(PresetCatalog::builtin().unwrap(), crate::rand::ParticleRng::new(11))
    }

    #[test]
    fn first_preset_selected_by_default() {
        let system = system();
        assert_eq!(system.selected().value, "default");
    }

    #[test]
    fn select_unknown_preset_keeps_selection() {
        let mut system = system();
        system.select_preset("tiny").unwrap();
        let err = system.select_preset("nope").unwrap_err();
        assert!(matches!(err, SparkleError::PresetNotFound(_)));
        assert_eq!(system.selected().value, "tiny");
    }

    #[test]
    fn tap_uses_selected_preset() {
        let mut system = system();
        system.select_preset("firework").unwrap();
        system.tap(Vec2::new(120.0, 300.0));
        assert_eq!(system.burst.particles().len(), 48);
        assert_eq!(system.burst.location(), Vec2::new(120.0, 300.0));
        assert!(system.burst.config().trail);
    }

    #[test]
    fn completion_hides_burst_and_publishes() {
        let mut system = system();
        let mut bus = EventBus::new();
        system.initialize(&mut bus).unwrap();
        system.select_preset("tiny").unwrap();
        let generation = system.tap(Vec2::new(10.0, 10.0));

        // 60 Hz frames until past the 700 ms window
        for _ in 0..43 {
            system.update(&mut bus, 1.0 / 60.0).unwrap();
        }
        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], SparkleEvent::BurstCompleted { generation });

        assert!(!system.burst.is_showing());
        system.update(&mut bus, 1.0 / 60.0).unwrap();
        assert!(!system.burst.is_active());
        assert!(system.burst.instance_data().is_empty());
        assert!(bus.is_empty());
    }

    #[test]
    fn update_packs_instances() {
        let mut system = system();
        let mut bus = EventBus::new();
        system.tap(Vec2::ZERO);
        system.update(&mut bus, 0.1).unwrap();
        assert_eq!(system.burst.instance_data().len(), 50);
    }

    #[test]
    fn changing_preset_leaves_burst_in_flight() {
        let mut system = system();
        system.tap(Vec2::ZERO);
        system.select_preset("confetti").unwrap();
        assert_eq!(system.burst.particles().len(), 50);
        system.tap(Vec2::ZERO);
        assert_eq!(system.burst.particles().len(), 150);
    }
}
