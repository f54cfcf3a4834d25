//! Headless burst simulation command

use super::load_catalog;
use anyhow::{Context, Result};
use serde::Serialize;
use sparkle_core::Vec2;
use sparkle_particles::rand::ParticleRng;
use sparkle_particles::{
    ParticleTransform, PresetCatalog, RenderSurface, ShapeStyle, SparkleSystem,
};
use sparkle_runtime::{EventBus, RuntimeSystem, SparkleEvent, StepClock};

pub struct SimulateArgs {
    pub preset: String,
    pub x: f32,
    pub y: f32,
    pub fps: u32,
    pub max_ms: u32,
    pub format: String,
    pub catalog: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct FrameSummary {
    pub time_ms: f64,
    pub drawables: usize,
    pub mean_opacity: f32,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub preset: String,
    pub particles: usize,
    pub echoes_per_particle: usize,
    pub frames: Vec<FrameSummary>,
    /// When the completion notice fired, if it did before the time limit
    pub completed_at_ms: Option<f64>,
}

/// Tallies what a frame would draw
#[derive(Default)]
struct FrameStats {
    drawables: usize,
    opacity_sum: f32,
}

impl RenderSurface for FrameStats {
    fn draw(&mut self, _origin: Vec2, _transform: &ParticleTransform, opacity: f32, _style: &ShapeStyle) {
        self.drawables += 1;
        self.opacity_sum += opacity;
    }
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let rng = match args.seed {
        Some(seed) => ParticleRng::new(seed),
        None => ParticleRng::from_entropy(),
    };

    let report = simulate_burst(
        catalog,
        rng,
        &args.preset,
        Vec2::new(args.x, args.y),
        args.fps,
        args.max_ms,
    )?;

    match args.format.as_str() {
        "json" => {
            let text =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", text);
        }
        "text" => print_text(&report),
        other => anyhow::bail!("Unknown format: {}", other),
    }

    Ok(())
}

/// Tap once at `location` and step at `fps` until the burst completes
/// or `max_ms` elapses
pub fn simulate_burst(
    catalog: PresetCatalog,
    rng: ParticleRng,
    preset: &str,
    location: Vec2,
    fps: u32,
    max_ms: u32,
) -> Result<SimulationReport> {
    let mut system = SparkleSystem::new(catalog, rng);
    let mut bus = EventBus::new();
    system.select_preset(preset)?;
    system.initialize(&mut bus)?;
    system.tap(location);

    let particles = system.burst.particles().len();
    let echoes_per_particle = system.burst.config().echo_count();

    // A step longer than the clock's 250 ms frame clamp would never come due
    let mut clock = StepClock::new(fps.max(4) as f64);
    let step = clock.step();
    let limit = max_ms as f64 / 1000.0;
    let mut frames = Vec::new();
    let mut completed_at_ms = None;

    while completed_at_ms.is_none() && clock.elapsed() < limit {
        for _ in 0..clock.advance(step) {
            system.update(&mut bus, step)?;
        }

        let mut stats = FrameStats::default();
        system.burst.render(&mut stats);
        let time_ms = clock.elapsed() * 1000.0;
        frames.push(FrameSummary {
            time_ms,
            drawables: stats.drawables,
            mean_opacity: if stats.drawables > 0 {
                stats.opacity_sum / stats.drawables as f32
            } else {
                0.0
            },
        });

        for event in bus.drain() {
            if let SparkleEvent::BurstCompleted { .. } = event {
                completed_at_ms = Some(time_ms);
            }
        }
    }

    system.shutdown()?;

    Ok(SimulationReport {
        preset: preset.to_string(),
        particles,
        echoes_per_particle,
        frames,
        completed_at_ms,
    })
}

fn print_text(report: &SimulationReport) {
    println!(
        "Preset: {} ({} particles, {} echoes each)",
        report.preset, report.particles, report.echoes_per_particle
    );
    println!();
    println!("{:>9}  {:>9}  {:>7}", "time ms", "drawables", "opacity");
    for frame in &report.frames {
        println!(
            "{:>9.1}  {:>9}  {:>7.3}",
            frame.time_ms, frame.drawables, frame.mean_opacity
        );
    }
    println!();
    match report.completed_at_ms {
        Some(ms) => println!("Completed at {:.1} ms", ms),
        None => println!("Did not complete within the time limit"),
    }
}
