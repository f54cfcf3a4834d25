//! Sparkle Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host uses to drive bursts:
//! - `StepClock`: splits frame deltas into fixed-rate steps
//! - `TimerQueue`: cancellable one-shot timers advanced by the frame loop
//! - `SparkleEvent` / `EventBus`: typed event queue from the engine to the host
//! - `RuntimeSystem`: trait for systems ticked by the frame loop

mod clock;
mod event;
mod event_bus;
mod system;
mod timer;

pub use clock::StepClock;
pub use event::SparkleEvent;
pub use event_bus::EventBus;
pub use system::RuntimeSystem;
pub use timer::{TimerHandle, TimerQueue};
