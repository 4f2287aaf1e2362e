//! Animation speed presets.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Speed knob for step replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    /// 0.5x speed
    Slow,
    /// Normal speed (1x)
    #[default]
    Medium,
    /// 4x speed
    Fast,
    /// No delay between steps
    Instant,
}

impl Speed {
    /// All presets, slowest first.
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Medium, Speed::Fast, Speed::Instant];

    /// Get the speed multiplier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Speed::Slow => 0.5,
            Speed::Medium => 1.0,
            Speed::Fast => 4.0,
            Speed::Instant => f64::INFINITY,
        }
    }

    /// Delay between two steps given the base (1x) delay.
    pub fn delay(&self, base: Duration) -> Duration {
        match self {
            Speed::Instant => Duration::ZERO,
            speed => Duration::from_secs_f64(base.as_secs_f64() / speed.multiplier()),
        }
    }

    /// Preset name.
    pub fn name(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Medium => "medium",
            Speed::Fast => "fast",
            Speed::Instant => "instant",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown speed `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_multipliers() {
        assert_eq!(Speed::Slow.multiplier(), 0.5);
        assert_eq!(Speed::Medium.multiplier(), 1.0);
        assert!(Speed::Instant.multiplier().is_infinite());
    }

    #[test]
    fn delay_scales_with_speed() {
        let base = Duration::from_millis(400);
        assert_eq!(Speed::Slow.delay(base), Duration::from_millis(800));
        assert_eq!(Speed::Medium.delay(base), Duration::from_millis(400));
        assert_eq!(Speed::Fast.delay(base), Duration::from_millis(100));
        assert_eq!(Speed::Instant.delay(base), Duration::ZERO);
    }

    #[test]
    fn parses_names() {
        assert_eq!("fast".parse::<Speed>().unwrap(), Speed::Fast);
        assert_eq!(" SLOW ".parse::<Speed>().unwrap(), Speed::Slow);
        assert!("warp".parse::<Speed>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Speed::Instant).unwrap();
        assert_eq!(json, "\"instant\"");
        let speed: Speed = serde_json::from_str("\"slow\"").unwrap();
        assert_eq!(speed, Speed::Slow);
    }
}
