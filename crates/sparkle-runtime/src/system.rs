//! Runtime system trait

use crate::event_bus::EventBus;
use sparkle_core::Result;

/// A system that can be ticked by the frame loop
///
/// Systems are updated in registration order, once per frame. Anything the
/// host should react to is published on the shared `EventBus`.
pub trait RuntimeSystem {
    /// Called once when the system is first registered
    fn initialize(&mut self, events: &mut EventBus) -> Result<()>;

    /// Called once per frame with the elapsed time in seconds
    fn update(&mut self, events: &mut EventBus, dt: f64) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
