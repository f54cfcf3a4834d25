//! CLI command implementations

pub mod presets;
pub mod show;
pub mod simulate;

use anyhow::{Context, Result};
use sparkle_particles::PresetCatalog;

/// Load the catalog at `path`, or the built-in presets
pub fn load_catalog(path: Option<&str>) -> Result<PresetCatalog> {
    match path {
        Some(path) => PresetCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load preset catalog {}", path)),
        None => PresetCatalog::builtin().context("Failed to load built-in presets"),
    }
}
