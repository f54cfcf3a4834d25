//! Sparkle Core - Foundational types for the Sparkle particle engine
//!
//! This crate provides the core types that all other Sparkle crates depend on:
//! - `Generation` - Burst generation counter used to discard stale work
//! - `Vec2`, `Color` - Screen-space and color types
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{Result, SparkleError};
pub use id::Generation;
pub use types::{Color, Vec2};
