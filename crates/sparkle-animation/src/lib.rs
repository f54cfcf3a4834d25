//! Animation primitives for the Sparkle engine
//!
//! A particle's visual state is a handful of independent scalar channels.
//! Each channel is an `AnimatedValue` that plays a `Tween`: a sequence of
//! eased moves toward a target and plain waits, evaluated against elapsed
//! time by the frame loop.

pub mod channel;
pub mod easing;
pub mod tween;

pub use channel::AnimatedValue;
pub use easing::Easing;
pub use tween::{sample_tween, Step, Tween};
