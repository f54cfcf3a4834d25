//! Burst parameters: sparse preset overrides and their resolved form

use serde::{Serialize, Serializer};
use sparkle_core::Color;

/// Palette used when a preset doesn't name its own colors
pub const DEFAULT_COLORS: [u32; 9] = [
    0xFFFFFF, 0xFFFDE7, 0xFFF9C4, 0xFFEB3B, 0xFDD835, 0xFBC02D, 0xFFA726, 0xFF9800, 0xFB8C00,
];

/// Particle outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Triangle,
    Star,
    Rect,
    /// Any unrecognized shape name; drawn as a softly rounded square
    Other,
}

impl ShapeKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => ShapeKind::Circle,
            "triangle" => ShapeKind::Triangle,
            "star" => ShapeKind::Star,
            "rect" => ShapeKind::Rect,
            _ => ShapeKind::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Rect => "rect",
            ShapeKind::Other => "other",
        }
    }
}

/// Launch direction for the random spread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    /// Centered straight up (-90°)
    Radial,
    /// Centered on a fixed angle in degrees
    Angle(f32),
}

impl Direction {
    /// Center of the random spread, in degrees
    pub fn base_degrees(&self) -> f32 {
        match *self {
            Direction::Radial => -90.0,
            Direction::Angle(deg) => deg,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Direction::Radial => serializer.serialize_str("radial"),
            Direction::Angle(deg) => serializer.serialize_f32(deg),
        }
    }
}

/// Inclusive-exclusive numeric range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Complete parameters for one burst. Built fresh for every trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurstConfig {
    pub particle_count: usize,
    /// Base particle lifetime in milliseconds
    pub duration: f32,
    /// Shapes drawn with repetition; duplicates weight the pick
    pub shapes: Vec<ShapeKind>,
    #[serde(serialize_with = "serialize_colors")]
    pub colors: Vec<Color>,
    pub explosion_force: Range,
    pub direction: Direction,
    pub trail: bool,
    /// Spread particles evenly around a full circle
    pub burst: bool,
    /// Fixed gravity for every particle; `None` rolls one per particle
    pub gravity: Option<f32>,
    pub single_color: bool,
    pub size: Range,
    pub trail_length: usize,
    pub spread_angle: Option<f32>,
    pub fan_direction: Option<f32>,
    pub rotate_particles: bool,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            duration: 800.0,
            shapes: vec![ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Star],
            colors: DEFAULT_COLORS.iter().map(|&hex| Color::from_hex(hex)).collect(),
            explosion_force: Range::new(300.0, 700.0),
            direction: Direction::Radial,
            trail: false,
            burst: false,
            gravity: None,
            single_color: false,
            size: Range::new(6.0, 12.0),
            trail_length: 4,
            spread_angle: Some(120.0),
            fan_direction: Some(-90.0),
            rotate_particles: true,
        }
    }
}

impl BurstConfig {
    /// Time after showing at which the host is told the burst is done
    pub fn completion_delay(&self) -> f32 {
        self.duration + 500.0
    }

    /// Echo copies each particle draws behind itself
    pub fn echo_count(&self) -> usize {
        if self.trail {
            self.trail_length
        } else {
            0
        }
    }

    /// Fan angle and direction, when the even fan layout applies
    pub fn fan(&self) -> Option<(f32, f32)> {
        match (self.spread_angle, self.fan_direction) {
            (Some(spread), Some(fan)) if spread != 0.0 && !spread.is_nan() => Some((spread, fan)),
            _ => None,
        }
    }
}

fn serialize_colors<S: Serializer>(colors: &[Color], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(colors.iter().map(Color::to_hex_string))
}

/// Sparse per-preset parameters. Every present field replaces its default
/// wholesale when resolved; ranges are never merged field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurstOverrides {
    pub particle_count: Option<usize>,
    pub duration: Option<f32>,
    pub shapes: Option<Vec<ShapeKind>>,
    pub colors: Option<Vec<Color>>,
    pub explosion_force: Option<Range>,
    pub direction: Option<Direction>,
    pub trail: Option<bool>,
    pub burst: Option<bool>,
    pub gravity: Option<f32>,
    pub single_color: Option<bool>,
    pub size: Option<Range>,
    pub trail_length: Option<usize>,
    pub spread_angle: Option<f32>,
    pub fan_direction: Option<f32>,
    pub rotate_particles: Option<bool>,
}

impl BurstOverrides {
    /// Fill every absent field with its default
    pub fn resolve(&self) -> BurstConfig {
        let defaults = BurstConfig::default();
        BurstConfig {
            particle_count: self.particle_count.unwrap_or(defaults.particle_count),
            duration: self.duration.unwrap_or(defaults.duration),
            shapes: self.shapes.clone().unwrap_or(defaults.shapes),
            colors: self.colors.clone().unwrap_or(defaults.colors),
            explosion_force: self.explosion_force.unwrap_or(defaults.explosion_force),
            direction: self.direction.unwrap_or(defaults.direction),
            trail: self.trail.unwrap_or(defaults.trail),
            burst: self.burst.unwrap_or(defaults.burst),
            gravity: self.gravity.or(defaults.gravity),
            single_color: self.single_color.unwrap_or(defaults.single_color),
            size: self.size.unwrap_or(defaults.size),
            trail_length: self.trail_length.unwrap_or(defaults.trail_length),
            spread_angle: self.spread_angle.or(defaults.spread_angle),
            fan_direction: self.fan_direction.or(defaults.fan_direction),
            rotate_particles: self.rotate_particles.unwrap_or(defaults.rotate_particles),
        }
    }

    /// Names of the fields this override sets
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let mut note = |present: bool, key: &'static str| {
            if present {
                keys.push(key);
            }
        };
        note(self.particle_count.is_some(), "particle_count");
        note(self.duration.is_some(), "duration");
        note(self.shapes.is_some(), "shapes");
        note(self.colors.is_some(), "colors");
        note(self.explosion_force.is_some(), "explosion_force");
        note(self.direction.is_some(), "direction");
        note(self.trail.is_some(), "trail");
        note(self.burst.is_some(), "burst");
        note(self.gravity.is_some(), "gravity");
        note(self.single_color.is_some(), "single_color");
        note(self.size.is_some(), "size");
        note(self.trail_length.is_some(), "trail_length");
        note(self.spread_angle.is_some(), "spread_angle");
        note(self.fan_direction.is_some(), "fan_direction");
        note(self.rotate_particles.is_some(), "rotate_particles");
        keys
    }

    /// Parse overrides from a preset's TOML parameter table.
    ///
    /// Keys may be snake_case or camelCase. Values of the wrong type are
    /// skipped with a warning, leaving the field at its default.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut overrides = Self::default();

        if let Some(v) = lookup(table, "particle_count", "particleCount") {
            overrides.particle_count = toml_count(v, "particle_count");
        }
        if let Some(v) = table.get("duration") {
            overrides.duration = toml_f32(v, "duration");
        }
        if let Some(v) = table.get("shapes") {
            overrides.shapes = toml_strings(v, "shapes")
                .map(|names| names.iter().map(|n| ShapeKind::from_name(n)).collect());
        }
        if let Some(v) = table.get("colors") {
            overrides.colors = toml_strings(v, "colors").map(|names| parse_colors(&names));
        }
        if let Some(v) = lookup(table, "explosion_force", "explosionForce") {
            overrides.explosion_force = toml_range(v, "explosion_force");
        }
        if let Some(v) = table.get("direction") {
            overrides.direction = toml_direction(v);
        }
        if let Some(v) = table.get("trail") {
            overrides.trail = toml_bool(v, "trail");
        }
        if let Some(v) = table.get("burst") {
            overrides.burst = toml_bool(v, "burst");
        }
        if let Some(v) = table.get("gravity") {
            overrides.gravity = toml_f32(v, "gravity");
        }
        if let Some(v) = lookup(table, "single_color", "singleColor") {
            overrides.single_color = toml_bool(v, "single_color");
        }
        if let Some(v) = table.get("size") {
            overrides.size = toml_range(v, "size");
        }
        if let Some(v) = lookup(table, "trail_length", "trailLength") {
            overrides.trail_length = toml_count(v, "trail_length");
        }
        if let Some(v) = lookup(table, "spread_angle", "spreadAngle") {
            overrides.spread_angle = toml_f32(v, "spread_angle");
        }
        if let Some(v) = lookup(table, "fan_direction", "fanDirection") {
            overrides.fan_direction = toml_f32(v, "fan_direction");
        }
        if let Some(v) = lookup(table, "rotate_particles", "rotateParticles") {
            overrides.rotate_particles = toml_bool(v, "rotate_particles");
        }

        overrides
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn lookup<'a>(table: &'a toml::value::Table, key: &str, alias: &str) -> Option<&'a toml::Value> {
    table.get(key).or_else(|| table.get(alias))
}

fn toml_f32(v: &toml::Value, field: &str) -> Option<f32> {
    let parsed = v
        .as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32));
    if parsed.is_none() {
        tracing::warn!("ignoring `{field}`: expected a number, got {}", v.type_str());
    }
    parsed
}

fn toml_count(v: &toml::Value, field: &str) -> Option<usize> {
    let n = v
        .as_integer()
        .or_else(|| v.as_float().filter(|f| f.is_finite()).map(|f| f as i64));
    match n {
        Some(n) if n < 0 => {
            tracing::warn!("`{field}` is negative ({n}); treating it as 0");
            Some(0)
        }
        Some(n) => Some(n as usize),
        None => {
            tracing::warn!("ignoring `{field}`: expected an integer, got {}", v.type_str());
            None
        }
    }
}

fn toml_bool(v: &toml::Value, field: &str) -> Option<bool> {
    let parsed = v.as_bool();
    if parsed.is_none() {
        tracing::warn!("ignoring `{field}`: expected a boolean, got {}", v.type_str());
    }
    parsed
}

fn toml_strings(v: &toml::Value, field: &str) -> Option<Vec<String>> {
    let Some(arr) = v.as_array() else {
        tracing::warn!("ignoring `{field}`: expected an array, got {}", v.type_str());
        return None;
    };
    Some(
        arr.iter()
            .filter_map(|item| match item.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    tracing::warn!("skipping non-string entry in `{field}`");
                    None
                }
            })
            .collect(),
    )
}

fn parse_colors(names: &[String]) -> Vec<Color> {
    names
        .iter()
        .filter_map(|name| match Color::parse_hex(name) {
            Ok(color) => Some(color),
            Err(err) => {
                tracing::warn!("skipping color: {err}");
                None
            }
        })
        .collect()
}

fn toml_range(v: &toml::Value, field: &str) -> Option<Range> {
    let Some(table) = v.as_table() else {
        tracing::warn!("ignoring `{field}`: expected a {{ min, max }} table, got {}", v.type_str());
        return None;
    };
    let min = table.get("min").and_then(|m| toml_f32(m, field));
    let max = table.get("max").and_then(|m| toml_f32(m, field));
    match (min, max) {
        (Some(min), Some(max)) => Some(Range::new(min, max)),
        _ => {
            tracing::warn!("ignoring `{field}`: both `min` and `max` are required");
            None
        }
    }
}

fn toml_direction(v: &toml::Value) -> Option<Direction> {
    if let Some(s) = v.as_str() {
        if s != "radial" {
            tracing::warn!("unknown direction `{s}`; using radial");
        }
        return Some(Direction::Radial);
    }
    toml_f32(v, "direction").map(Direction::Angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> BurstOverrides {
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        BurstOverrides::from_toml(&table)
    }

    #[test]
    fn default_config_is_sane() {
        let config = BurstConfig::default();
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.duration, 800.0);
        assert_eq!(config.colors.len(), 9);
        assert_eq!(config.colors[0], Color::WHITE);
        assert_eq!(config.explosion_force, Range::new(300.0, 700.0));
        assert_eq!(config.size, Range::new(6.0, 12.0));
        assert_eq!(config.direction, Direction::Radial);
        assert_eq!(config.gravity, None);
        assert_eq!(config.trail_length, 4);
        assert_eq!(config.fan(), Some((120.0, -90.0)));
        assert!(config.rotate_particles);
        assert!(!config.trail && !config.burst && !config.single_color);
    }

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        assert_eq!(BurstOverrides::default().resolve(), BurstConfig::default());
    }

    #[test]
    fn overrides_replace_wholesale() {
        let overrides = BurstOverrides {
            size: Some(Range::new(1.0, 2.0)),
            gravity: Some(500.0),
            shapes: Some(vec![ShapeKind::Circle]),
            ..Default::default()
        };
        let config = overrides.resolve();
        assert_eq!(config.size, Range::new(1.0, 2.0));
        assert_eq!(config.gravity, Some(500.0));
        assert_eq!(config.shapes, vec![ShapeKind::Circle]);
        assert_eq!(config.particle_count, 50);
    }

    #[test]
    fn parse_from_toml() {
        let overrides = parse(
            r##"
particle_count = 48
duration = 800
colors = ["#FFF", "#FFD700", "#FF1744"]
shapes = ["circle", "sparkle"]
explosion_force = { min = 200, max = 300.5 }
direction = "radial"
burst = true
trail = true
singleColor = true
gravity = 400
trail_length = 6
rotate_particles = false
"##,
        );
        assert_eq!(overrides.particle_count, Some(48));
        assert_eq!(overrides.duration, Some(800.0));
        assert_eq!(overrides.colors.as_ref().map(Vec::len), Some(3));
        assert_eq!(
            overrides.shapes,
            Some(vec![ShapeKind::Circle, ShapeKind::Other])
        );
        assert_eq!(overrides.explosion_force, Some(Range::new(200.0, 300.5)));
        assert_eq!(overrides.direction, Some(Direction::Radial));
        assert_eq!(overrides.single_color, Some(true));
        assert_eq!(overrides.trail_length, Some(6));
        assert_eq!(overrides.rotate_particles, Some(false));
        assert_eq!(overrides.size, None);
    }

    #[test]
    fn numeric_direction_and_camel_case_keys() {
        let overrides = parse("direction = 45\nspreadAngle = 30\nfanDirection = -90");
        assert_eq!(overrides.direction, Some(Direction::Angle(45.0)));
        assert_eq!(overrides.spread_angle, Some(30.0));
        assert_eq!(overrides.fan_direction, Some(-90.0));
    }

    #[test]
    fn incomplete_range_is_ignored() {
        let overrides = parse("size = { min = 3 }");
        assert_eq!(overrides.size, None);
        assert_eq!(overrides.resolve().size, Range::new(6.0, 12.0));
    }

    #[test]
    fn wrong_types_fall_back_to_default() {
        let overrides = parse("duration = \"long\"\ntrail = 1\nparticle_count = -5");
        assert_eq!(overrides.duration, None);
        assert_eq!(overrides.trail, None);
        assert_eq!(overrides.particle_count, Some(0));
    }

    #[test]
    fn nan_gravity_survives_parsing() {
        let overrides = parse("gravity = nan");
        assert!(overrides.gravity.unwrap().is_nan());
    }

    #[test]
    fn zero_spread_disables_fan() {
        let config = BurstOverrides {
            spread_angle: Some(0.0),
            ..Default::default()
        }
        .resolve();
        assert_eq!(config.fan(), None);
    }

    #[test]
    fn completion_and_echo_counts() {
        let mut config = BurstConfig {
            duration: 200.0,
            ..Default::default()
        };
        assert_eq!(config.completion_delay(), 700.0);
        assert_eq!(config.echo_count(), 0);
        config.trail = true;
        assert_eq!(config.echo_count(), 4);
    }

    #[test]
    fn keys_lists_present_fields() {
        let overrides = parse("gravity = 1000\nduration = 1300");
        assert_eq!(overrides.keys(), vec!["duration", "gravity"]);
    }
}
