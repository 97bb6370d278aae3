// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_core::{ConfluxError, Result};
use std::time::Duration;

/// Tuning knobs for a [`RendezvousMerger`](crate::RendezvousMerger).
///
/// `min_delay`/`max_delay` bound the uniformly random pause a producer takes
/// between handing off a message and waiting for its acknowledgment,
/// simulating variable work. `buffer_capacity` sizes the per-source and
/// output channels: `0` requests a direct rendezvous handoff (realized as
/// capacity 1, the smallest bound tokio supports), `N > 0` allows bounded
/// buffering.
#[derive(Debug, Clone)]
pub struct MergerConfig {
    /// Lower bound of the randomized inter-message delay.
    pub min_delay: Duration,
    /// Upper bound of the randomized inter-message delay.
    pub max_delay: Duration,
    /// Channel bound; `0` means synchronous handoff.
    pub buffer_capacity: usize,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::from_millis(2000),
            buffer_capacity: 0,
        }
    }
}

impl MergerConfig {
    /// A configuration with no artificial delay, useful for tests and demos.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluxError::InvalidConfig`] if `min_delay` exceeds
    /// `max_delay`.
    pub fn validate(&self) -> Result<()> {
        if self.min_delay > self.max_delay {
            return Err(ConfluxError::invalid_config(format!(
                "min_delay ({:?}) exceeds max_delay ({:?})",
                self.min_delay, self.max_delay
            )));
        }
        Ok(())
    }

    /// Draw a delay uniformly from `[min_delay, max_delay]`.
    pub(crate) fn sample_delay(&self) -> Duration {
        let span = self
            .max_delay
            .saturating_sub(self.min_delay)
            .as_millis()
            .min(u128::from(u64::MAX)) as u64;

        if span == 0 {
            return self.min_delay;
        }

        self.min_delay + Duration::from_millis(fastrand::u64(0..=span))
    }

    /// Effective channel bound; tokio's bounded channels reject capacity 0.
    pub(crate) fn channel_capacity(&self) -> usize {
        self.buffer_capacity.max(1)
    }
}
