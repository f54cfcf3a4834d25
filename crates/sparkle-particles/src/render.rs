//! Frame output: render-surface calls and packed instance data

use crate::animator::AnimationState;
use crate::shape::ShapeStyle;
use bytemuck::{Pod, Zeroable};
use serde::Serialize;
use sparkle_core::Vec2;

/// Transform applied to a drawable, in application order
/// (translate, then rotate about the drawable's center, then scale)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleTransform {
    pub translate: Vec2,
    /// Degrees, clockwise
    pub rotate_deg: f32,
    pub scale: f32,
}

impl From<&AnimationState> for ParticleTransform {
    fn from(state: &AnimationState) -> Self {
        Self {
            translate: Vec2::new(state.translate_x, state.translate_y),
            rotate_deg: state.rotate,
            scale: state.scale,
        }
    }
}

/// Host-provided drawing target.
///
/// `origin` is the burst location; `transform` is relative to it.
pub trait RenderSurface {
    fn draw(&mut self, origin: Vec2, transform: &ParticleTransform, opacity: f32, style: &ShapeStyle);
}

/// Shape discriminant packed into `ParticleInstance::shape`
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceShape {
    Box = 0,
    Triangle = 1,
    Star = 2,
}

/// Instance data for instanced hosts.
/// 48 bytes, 16-byte rows (3 rows of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Absolute position, rotation (degrees) and scale
    pub pos_rot_scale: [f32; 4], // xy = position, z = rotation, w = scale
    /// Color with alpha already multiplied by opacity
    pub color: [f32; 4],
    /// Shape kind and geometry
    pub shape: [f32; 4], // x = InstanceShape, y = width, z = height, w = corner radius
}

impl ParticleInstance {
    pub fn new(origin: Vec2, state: &AnimationState, style: &ShapeStyle) -> Self {
        let (kind, [width, height], radius) = match *style {
            ShapeStyle::Box {
                width,
                height,
                corner_radius,
                ..
            } => (InstanceShape::Box, [width, height], corner_radius),
            ShapeStyle::Triangle { base, height, .. } => {
                (InstanceShape::Triangle, [base, height], 0.0)
            }
            ShapeStyle::StarOutline { size, .. } => (InstanceShape::Star, [size, size], 0.0),
        };
        let color = style.color();

        Self {
            pos_rot_scale: [
                origin.x + state.translate_x,
                origin.y + state.translate_y,
                state.rotate,
                state.scale,
            ],
            color: [color.r, color.g, color.b, color.a * state.opacity],
            shape: [kind as u32 as f32, width, height, radius],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShapeKind;
    use sparkle_core::Color;

    #[test]
    fn particle_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 48);
        assert_eq!(std::mem::align_of::<ParticleInstance>(), 4);
    }

    #[test]
    fn instance_is_placed_relative_to_origin() {
        let state = AnimationState {
            translate_x: 5.0,
            translate_y: -3.0,
            rotate: 90.0,
            opacity: 0.5,
            scale: 1.2,
        };
        let style = ShapeStyle::new(ShapeKind::Rect, 10.0, Color::WHITE);
        let instance = ParticleInstance::new(Vec2::new(100.0, 100.0), &state, &style);

        assert_eq!(instance.pos_rot_scale, [105.0, 97.0, 90.0, 1.2]);
        assert_eq!(instance.color[3], 0.5);
        assert_eq!(instance.shape[0], InstanceShape::Box as u32 as f32);
        assert_eq!(instance.shape[3], 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn transform_from_state() {
        let state = AnimationState {
            translate_x: 1.0,
            translate_y: 2.0,
            rotate: 45.0,
            opacity: 1.0,
            scale: 0.5,
        };
        let transform = ParticleTransform::from(&state);
        assert_eq!(transform.translate, Vec2::new(1.0, 2.0));
        assert_eq!(transform.rotate_deg, 45.0);
        assert_eq!(transform.scale, 0.5);
    }
}
