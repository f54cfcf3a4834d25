//! Preset listing command

use super::load_catalog;
use anyhow::Result;

pub fn run(catalog_path: Option<&str>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    println!("Presets:");
    for (i, preset) in catalog.iter().enumerate() {
        let marker = if i == 0 { " (default)" } else { "" };
        println!("  {:<10} {}{}", preset.value, preset.label, marker);

        let keys = preset.overrides.keys();
        if !keys.is_empty() {
            println!("    overrides: {}", keys.join(", "));
        }
    }

    Ok(())
}
