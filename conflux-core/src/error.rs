// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the conflux merging primitives.
//!
//! This module defines a root [`ConfluxError`] type with specific variants for
//! the failure modes of the acknowledged fan-in pipeline, allowing library
//! users to handle errors appropriately.
//!
//! # Examples
//!
//! ```
//! use conflux_core::{ConfluxError, Result};
//!
//! fn reject() -> Result<()> {
//!     Err(ConfluxError::invalid_config("min_delay exceeds max_delay"))
//! }
//! ```

/// Root error type for all conflux operations.
///
/// This enum encompasses the error conditions that can occur while producing,
/// relaying and acknowledging merged messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfluxError {
    /// An acknowledgment handle was signaled more than once.
    ///
    /// The handle is single-use; a second `acknowledge()` violates the
    /// contract and is a programming error on the consumer side. It is
    /// reported rather than silently ignored.
    #[error("Acknowledgment handle signaled twice: {context}")]
    DoubleAcknowledgment {
        /// Which message's handle was double-signaled
        context: String,
    },

    /// A producer or relay task observed a closed channel.
    ///
    /// Expected during shutdown: the task that observes it terminates
    /// cleanly. Never fatal for the pipeline as a whole.
    #[error("Channel closed: {context}")]
    ChannelClosed {
        /// Which channel closed, and on which side
        context: String,
    },

    /// A merger was constructed with a rejected configuration.
    #[error("Invalid merger configuration: {context}")]
    InvalidConfig {
        /// Description of the rejected setting
        context: String,
    },
}

impl ConfluxError {
    /// Create a double-acknowledgment error with the given context.
    pub fn double_acknowledgment(context: impl Into<String>) -> Self {
        Self::DoubleAcknowledgment {
            context: context.into(),
        }
    }

    /// Create a closed-channel error with the given context.
    pub fn channel_closed(context: impl Into<String>) -> Self {
        Self::ChannelClosed {
            context: context.into(),
        }
    }

    /// Create an invalid-configuration error with the given context.
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Check if this error is an expected shutdown observation.
    ///
    /// Closed channels are the normal way tasks learn that the pipeline is
    /// tearing down; callers typically log them and exit rather than
    /// propagate them.
    #[must_use]
    pub const fn is_shutdown(&self) -> bool {
        matches!(self, Self::ChannelClosed { .. })
    }

    /// Check if this error indicates a contract violation by the caller.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::DoubleAcknowledgment { .. } | Self::InvalidConfig { .. }
        )
    }
}

/// Specialized Result type for conflux operations.
///
/// # Examples
///
/// ```
/// use conflux_core::Result;
///
/// fn check() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ConfluxError>;
