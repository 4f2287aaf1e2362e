//! Visualizer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::speed::Speed;

/// Configuration for a visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Initial speed preset
    pub speed: Speed,
    /// Delay between steps at 1x speed, in milliseconds
    pub base_delay_ms: u64,
    /// How long a completed run stays on screen before returning to idle
    pub linger_ms: u64,
    /// Largest collection accepted from input or randomization
    pub max_len: usize,
    /// Largest hash table capacity a resize may ask for
    pub max_capacity: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            speed: Speed::Medium,
            base_delay_ms: 400,
            linger_ms: 1_500,
            max_len: 64,
            max_capacity: 256,
        }
    }
}

impl VisualizerConfig {
    /// No delays at all. Used by tests and batch tracing.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            speed: Speed::Instant,
            base_delay_ms: 0,
            linger_ms: 0,
            ..Self::default()
        }
    }

    /// Delay between steps at 1x speed.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Lingering delay after completion.
    pub fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }
}
