//! Static drawable geometry for each particle shape

use crate::config::ShapeKind;
use serde::Serialize;
use sparkle_core::Color;

/// Side of the square the star outline is authored in
pub const STAR_VIEW_BOX: f32 = 24.0;

/// Stroke width of the star outline, in view-box units
pub const STAR_STROKE_WIDTH: f32 = 1.5;

/// Closed five-point star outline in view-box units, starting at the top tip
pub const STAR_OUTLINE: [[f32; 2]; 10] = [
    [12.0, 2.5],
    [15.09, 8.76],
    [22.0, 9.75],
    [17.0, 14.62],
    [18.18, 21.5],
    [12.0, 17.77],
    [5.82, 21.0],
    [7.0, 14.62],
    [2.0, 9.75],
    [8.91, 8.76],
];

/// Stars are drawn larger than their nominal size
const STAR_SCALE: f32 = 1.6;

/// How a host should draw one particle before transforms are applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeStyle {
    /// Filled rounded box
    Box {
        width: f32,
        height: f32,
        corner_radius: f32,
        fill: Color,
    },
    /// Filled isosceles triangle pointing up
    Triangle { base: f32, height: f32, fill: Color },
    /// Stroked, unfilled star outline (`STAR_OUTLINE`) scaled to `size`
    StarOutline { size: f32, stroke: Color },
}

impl ShapeStyle {
    pub fn new(shape: ShapeKind, size: f32, color: Color) -> Self {
        match shape {
            ShapeKind::Star => ShapeStyle::StarOutline {
                size: size * STAR_SCALE,
                stroke: color,
            },
            ShapeKind::Triangle => ShapeStyle::Triangle {
                base: size,
                height: size,
                fill: color,
            },
            ShapeKind::Rect => ShapeStyle::Box {
                width: size * 2.2,
                height: size * 0.5,
                corner_radius: 2.0,
                fill: color,
            },
            ShapeKind::Circle => ShapeStyle::Box {
                width: size,
                height: size,
                corner_radius: size / 2.0,
                fill: color,
            },
            ShapeKind::Other => ShapeStyle::Box {
                width: size,
                height: size,
                corner_radius: size / 5.0,
                fill: color,
            },
        }
    }

    /// Width and height of the drawable's bounding box
    pub fn extent(&self) -> [f32; 2] {
        match *self {
            ShapeStyle::Box { width, height, .. } => [width, height],
            ShapeStyle::Triangle { base, height, .. } => [base, height],
            ShapeStyle::StarOutline { size, .. } => [size, size],
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            ShapeStyle::Box { fill, .. } | ShapeStyle::Triangle { fill, .. } => fill,
            ShapeStyle::StarOutline { stroke, .. } => stroke,
        }
    }
}

/// Star outline points scaled to a drawable of side `size`
pub fn star_points(size: f32) -> [[f32; 2]; 10] {
    let k = size / STAR_VIEW_BOX;
    STAR_OUTLINE.map(|[x, y]| [x * k, y * k])
}
