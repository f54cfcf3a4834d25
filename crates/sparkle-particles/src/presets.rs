//! Named burst presets loaded from TOML

use crate::config::BurstOverrides;
use sparkle_core::{Result, SparkleError};
use std::path::Path;

const BUILTIN_PRESETS: &str = include_str!("../presets.toml");

/// A selectable burst variant
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Display name
    pub label: String,
    /// Unique key used for selection
    pub value: String,
    pub overrides: BurstOverrides,
}

/// Ordered preset list. The first entry is the default selection.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The presets shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PRESETS)
    }

    /// Load a catalog from a TOML file of `[[preset]]` entries
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SparkleError::TomlParseError(msg) => {
                SparkleError::TomlParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let root: toml::value::Table = toml::from_str(content)?;
        let entries = root
            .get("preset")
            .and_then(|v| v.as_array())
            .ok_or_else(|| SparkleError::MissingRequiredField("preset".to_string()))?;

        let mut presets: Vec<Preset> = Vec::with_capacity(entries.len());
        for entry in entries {
            let table = entry.as_table().ok_or_else(|| SparkleError::InvalidFieldType {
                field: "preset".to_string(),
                expected: "table".to_string(),
            })?;
            let preset = parse_preset(table)?;

            if presets.iter().any(|p| p.value == preset.value) {
                tracing::warn!(value = %preset.value, "duplicate preset; keeping the first");
                continue;
            }
            presets.push(preset);
        }

        if presets.is_empty() {
            return Err(SparkleError::ParseError("catalog has no presets".to_string()));
        }

        tracing::info!(count = presets.len(), "loaded preset catalog");
        Ok(Self { presets })
    }

    pub fn get(&self, value: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.value == value)
    }

    /// Like `get`, but a missing preset is an error
    pub fn require(&self, value: &str) -> Result<&Preset> {
        self.get(value)
            .ok_or_else(|| SparkleError::PresetNotFound(value.to_string()))
    }

    pub fn first(&self) -> &Preset {
        // A catalog is never empty once constructed
        &self.presets[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn parse_preset(table: &toml::value::Table) -> Result<Preset> {
    let value = table
        .get("value")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SparkleError::MissingRequiredField("preset.value".to_string()))?
        .to_string();
    let label = table
        .get("label")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| value.clone());

    let overrides = match table.get("params") {
        Some(toml::Value::Table(params)) => BurstOverrides::from_toml(params),
        Some(other) => {
            return Err(SparkleError::InvalidFieldType {
                field: format!("{value}.params"),
                expected: format!("table, got {}", other.type_str()),
            })
        }
        None => BurstOverrides::default(),
    };

    Ok(Preset {
        label,
        value,
        overrides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, Range, ShapeKind};
    use sparkle_core::Color;

    #[test]
    fn builtin_gallery_order() {
        let catalog = PresetCatalog::builtin().unwrap();
        let values: Vec<_> = catalog.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(
            values,
            ["default", "tiny", "rainbow", "stars", "firework", "confetti"]
        );
        assert_eq!(catalog.first().label, "Default Sparkles");
        assert_eq!(catalog.first().overrides, BurstOverrides::default());
    }

    #[test]
    fn tiny_preset_overrides() {
        let catalog = PresetCatalog::builtin().unwrap();
        let config = catalog.get("tiny").unwrap().overrides.resolve();
        assert_eq!(config.shapes, vec![ShapeKind::Circle]);
        assert_eq!(config.explosion_force, Range::new(100.0, 150.0));
        assert_eq!(config.size, Range::new(1.0, 2.0));
        assert_eq!(config.duration, 200.0);
        assert_eq!(config.gravity, Some(500.0));
        assert_eq!(config.particle_count, 50);
    }

    #[test]
    fn firework_preset_overrides() {
        let catalog = PresetCatalog::builtin().unwrap();
        let config = catalog.get("firework").unwrap().overrides.resolve();
        assert_eq!(config.particle_count, 48);
        assert!(config.burst && config.trail && config.single_color);
        assert!(!config.rotate_particles);
        assert_eq!(config.direction, Direction::Radial);
        assert_eq!(config.echo_count(), 6);
        assert_eq!(config.colors[0], Color::WHITE);
        assert_eq!(config.colors.len(), 6);
    }

    #[test]
    fn stars_weight_by_repetition() {
        let catalog = PresetCatalog::builtin().unwrap();
        let config = catalog.get("stars").unwrap().overrides.resolve();
        assert_eq!(config.shapes.len(), 10);
        assert_eq!(
            config.shapes.iter().filter(|s| **s == ShapeKind::Star).count(),
            9
        );
    }

    #[test]
    fn confetti_fans_upward() {
        let catalog = PresetCatalog::builtin().unwrap();
        let config = catalog.get("confetti").unwrap().overrides.resolve();
        assert_eq!(config.fan(), Some((30.0, -90.0)));
        assert_eq!(config.shapes[0], ShapeKind::Rect);
    }

    #[test]
    fn missing_preset_is_an_error() {
        let catalog = PresetCatalog::builtin().unwrap();
        assert!(catalog.get("sparkler").is_none());
        assert!(matches!(
            catalog.require("sparkler"),
            Err(SparkleError::PresetNotFound(name)) if name == "sparkler"
        ));
    }

    #[test]
    fn label_defaults_to_value() {
        let catalog = PresetCatalog::from_toml_str(
            r#"
            [[preset]]
            value = "plain"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.first().label, "plain");
    }

    #[test]
    fn duplicate_values_keep_first() {
        let catalog = PresetCatalog::from_toml_str(
            r#"
            [[preset]]
            value = "a"
            params = { duration = 100 }

            [[preset]]
            value = "a"
            params = { duration = 900 }
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.first().overrides.duration, Some(100.0));
    }

    #[test]
    fn rejects_malformed_catalogs() {
        assert!(matches!(
            PresetCatalog::from_toml_str("title = \"nothing\""),
            Err(SparkleError::MissingRequiredField(_))
        ));
        assert!(matches!(
            PresetCatalog::from_toml_str("[[preset]]\nlabel = \"no value\""),
            Err(SparkleError::MissingRequiredField(_))
        ));
        assert!(matches!(
            PresetCatalog::from_toml_str("[[preset]]\nvalue = \"x\"\nparams = 3"),
            Err(SparkleError::InvalidFieldType { .. })
        ));
        assert!(matches!(
            PresetCatalog::from_toml_str("preset = ["),
            Err(SparkleError::TomlParseError(_))
        ));
        assert!(matches!(
            PresetCatalog::from_toml_str("preset = []"),
            Err(SparkleError::ParseError(_))
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        assert!(matches!(
            PresetCatalog::load_from_file("/nonexistent/presets.toml"),
            Err(SparkleError::IoError(_))
        ));
    }
}
