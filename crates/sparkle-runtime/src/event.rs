//! Events published by the engine for the host

use sparkle_core::{Generation, Vec2};

/// Something the host may want to react to
#[derive(Debug, Clone, PartialEq)]
pub enum SparkleEvent {
    /// A burst was mounted at `location`
    BurstStarted {
        generation: Generation,
        location: Vec2,
    },
    /// The completion window of a shown burst elapsed
    BurstCompleted { generation: Generation },
    /// A burst was hidden or superseded before completing
    BurstCancelled { generation: Generation },
}

impl SparkleEvent {
    /// Generation of the burst this event refers to
    pub fn generation(&self) -> Generation {
        match self {
            SparkleEvent::BurstStarted { generation, .. }
            | SparkleEvent::BurstCompleted { generation }
            | SparkleEvent::BurstCancelled { generation } => *generation,
        }
    }
}
