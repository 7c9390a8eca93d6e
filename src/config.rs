//! Playback configuration
//!
//! The engines never sleep; pacing and truncation are applied by whoever
//! replays the steps. [`PlaybackConfig`] collects those knobs in one
//! validated value.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::util::ParseNameError;

/// Delay between replayed steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pace {
    /// No delay
    Instant,
    /// 150 ms per step
    Fast,
    /// 300 ms per step
    #[default]
    Medium,
    /// 800 ms per step
    Slow,
}

impl Pace {
    /// Every preset, fastest first
    pub const ALL: [Pace; 4] = [Pace::Instant, Pace::Fast, Pace::Medium, Pace::Slow];

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Pace::Instant => "instant",
            Pace::Fast => "fast",
            Pace::Medium => "medium",
            Pace::Slow => "slow",
        }
    }

    /// Pause to insert after each step
    pub fn delay(self) -> Duration {
        match self {
            Pace::Instant => Duration::ZERO,
            Pace::Fast => Duration::from_millis(150),
            Pace::Medium => Duration::from_millis(300),
            Pace::Slow => Duration::from_millis(800),
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pace {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Pace::ALL
            .into_iter()
            .find(|pace| pace.name() == name)
            .ok_or_else(|| ParseNameError::new("pace", s, "instant, fast, medium, slow"))
    }
}

/// Invalid playback configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bounded containers need room for at least one item
    #[error("container capacity must be > 0")]
    ZeroCapacity,

    /// A step limit of zero would reject every trace
    #[error("step limit must be > 0 when given")]
    ZeroStepLimit,
}

/// How a step trace is replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between steps
    pub pace: Pace,
    /// Maximum number of steps to record, unbounded if `None`
    pub step_limit: Option<usize>,
    /// Capacity of bounded queues and stacks
    pub capacity: usize,
}

impl PlaybackConfig {
    /// Capacity used when none is given
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Validated configuration
    pub fn new(
        pace: Pace,
        step_limit: Option<usize>,
        capacity: usize,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if step_limit == Some(0) {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(Self {
            pace,
            step_limit,
            capacity,
        })
    }

    /// Same configuration with a different pace
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Same configuration with a step limit
    pub fn with_step_limit(self, limit: usize) -> Result<Self, ConfigError> {
        Self::new(self.pace, Some(limit), self.capacity)
    }

    /// Same configuration with a container capacity
    pub fn with_capacity(self, capacity: usize) -> Result<Self, ConfigError> {
        Self::new(self.pace, self.step_limit, capacity)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            pace: Pace::default(),
            step_limit: None,
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
