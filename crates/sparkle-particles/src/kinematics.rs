//! Per-particle motion parameters derived from a burst config

use crate::config::{BurstConfig, ShapeKind};
use crate::rand::ParticleRng;
use sparkle_core::Color;
use std::f32::consts::TAU;

/// Lifetime used when a config's duration is zero or NaN
const FALLBACK_DURATION: f32 = 500.0;

/// Frozen motion parameters for one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleKinematics {
    /// Launch angle in radians (0 = right, -π/2 = up)
    pub angle: f32,
    pub velocity: f32,
    pub gravity: f32,
    /// Degrees per second
    pub rotation_speed: f32,
    pub size: f32,
    pub shape: ShapeKind,
    pub color: Color,
    pub initial_vel_x: f32,
    pub initial_vel_y: f32,
    pub start_offset_x: f32,
    pub start_offset_y: f32,
    /// Milliseconds
    pub particle_duration: f32,
    /// Milliseconds before motion starts
    pub delay: f32,
}

/// Derive particle `index`'s kinematics.
///
/// `color_override` is the burst-wide color picked by the orchestrator when
/// `single_color` is set. No state is carried between calls besides `rng`.
pub fn generate(
    index: usize,
    config: &BurstConfig,
    color_override: Option<Color>,
    rng: &mut ParticleRng,
) -> ParticleKinematics {
    let count = config.particle_count;
    let angle = if config.burst {
        (TAU / count.max(1) as f32) * index as f32
    } else if let Some((spread, fan)) = config.fan() {
        let base = fan.to_radians();
        let spread = spread.to_radians();
        if count > 1 {
            base - spread / 2.0 + (spread * index as f32) / (count - 1) as f32
        } else {
            base
        }
    } else {
        (config.direction.base_degrees() + rng.symmetric(60.0)).to_radians()
    };

    let velocity = rng.range(config.explosion_force.min, config.explosion_force.max);
    let gravity = match config.gravity {
        Some(g) => g,
        None => rng.range(800.0, 1400.0),
    };
    let start_offset_x = rng.symmetric(2.0);
    let start_offset_y = rng.symmetric(2.0);
    let delay = rng.range(0.0, 50.0).max(0.0);
    let rotation_speed = if config.rotate_particles {
        rng.symmetric(1000.0)
    } else {
        rng.symmetric(500.0)
    };
    let size = rng.range(config.size.min, config.size.max);

    let shape = match rng.pick(&config.shapes) {
        Some(shape) => *shape,
        None => {
            tracing::warn!("burst has no shapes; drawing circles");
            ShapeKind::Circle
        }
    };
    let color = match (config.single_color, color_override) {
        (true, Some(color)) => color,
        _ => pick_color(&config.colors, rng),
    };

    let base_duration = if config.duration == 0.0 || config.duration.is_nan() {
        FALLBACK_DURATION
    } else {
        config.duration
    };
    let particle_duration = base_duration + rng.range(0.0, 250.0);

    ParticleKinematics {
        angle,
        velocity,
        gravity,
        rotation_speed,
        size,
        shape,
        color,
        initial_vel_x: angle.cos() * velocity,
        initial_vel_y: angle.sin() * velocity,
        start_offset_x,
        start_offset_y,
        particle_duration,
        delay,
    }
}

/// Uniform pick from `colors`, white when the palette is empty
pub fn pick_color(colors: &[Color], rng: &mut ParticleRng) -> Color {
    match rng.pick(colors) {
        Some(color) => *color,
        None => {
            tracing::warn!("burst has no colors; using white");
            Color::WHITE
        }
    }
}
