//! Resolved preset config command

use super::load_catalog;
use anyhow::{Context, Result};

pub fn run(preset: &str, catalog_path: Option<&str>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let preset = catalog.require(preset)?;
    let config = preset.overrides.resolve();

    let output = serde_json::json!({
        "value": preset.value,
        "label": preset.label,
        "completion_delay_ms": config.completion_delay(),
        "config": config,
    });
    let text = serde_json::to_string_pretty(&output).context("Failed to serialize config")?;
    println!("{}", text);

    Ok(())
}
