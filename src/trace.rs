//! Step trace recording and fingerprinting
//!
//! A [`TraceRecorder`] pulls steps from any engine up to an optional limit,
//! which keeps a caller from materialising an unexpectedly long run.
//! [`fingerprint`] hashes the rendered steps so two runs can be compared for
//! identical output without keeping both traces around.

use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

use crate::config::PlaybackConfig;

/// Errors raised while recording a trace
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The engine produced more steps than allowed
    #[error("trace exceeds the limit of {limit} steps")]
    LimitExceeded {
        /// The configured limit
        limit: usize,
    },
}

/// Collects steps up to an optional limit
#[derive(Debug, Clone)]
pub struct TraceRecorder<S> {
    steps: Vec<S>,
    limit: Option<usize>,
}

impl<S> TraceRecorder<S> {
    /// Recorder without a limit
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            limit: None,
        }
    }

    /// Recorder that rejects more than `limit` steps
    pub fn with_limit(limit: usize) -> Self {
        Self {
            steps: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Recorder honouring the config's step limit
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            steps: Vec::new(),
            limit: config.step_limit,
        }
    }

    /// Append one step
    pub fn record(&mut self, step: S) -> Result<(), TraceError> {
        if let Some(limit) = self.limit {
            if self.steps.len() >= limit {
                debug!(limit, "trace limit reached");
                return Err(TraceError::LimitExceeded { limit });
            }
        }
        self.steps.push(step);
        Ok(())
    }

    /// Pull every step from `steps`, returning how many were recorded
    ///
    /// Stops pulling at the first step over the limit; the steps recorded
    /// before it are kept.
    pub fn record_all<I>(&mut self, steps: I) -> Result<usize, TraceError>
    where
        I: IntoIterator<Item = S>,
    {
        let before = self.steps.len();
        for step in steps {
            self.record(step)?;
        }
        Ok(self.steps.len() - before)
    }

    /// Recorded steps, oldest first
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Step at `index`
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Most recent step
    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Configured limit
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Take the recorded steps
    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for TraceRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Record a whole run, failing if it is longer than `limit`
pub fn record<I>(steps: I, limit: Option<usize>) -> Result<Vec<I::Item>, TraceError>
where
    I: IntoIterator,
{
    let mut recorder = TraceRecorder {
        steps: Vec::new(),
        limit,
    };
    recorder.record_all(steps)?;
    Ok(recorder.into_steps())
}

/// BLAKE3 hash over the `Display` rendering of every step
///
/// Each rendering is length-prefixed, so multi-line steps cannot collide
/// with a different split of the same text.
pub fn fingerprint<'a, S, I>(steps: I) -> blake3::Hash
where
    S: Display + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut hasher = blake3::Hasher::new();
    for step in steps {
        let rendered = step.to_string();
        hasher.update(&(rendered.len() as u64).to_le_bytes());
        hasher.update(rendered.as_bytes());
    }
    hasher.finalize()
}
