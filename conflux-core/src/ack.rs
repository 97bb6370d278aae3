// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-use acknowledgment handshake.
//!
//! An acknowledgment pair is a one-shot rendezvous between a consumer and the
//! producer that originated a message: create, signal once, observe once.
//! The producer holds the [`AckWait`] side and suspends on it before emitting
//! its next message; the consumer holds the [`AckHandle`] side and releases
//! the producer by calling [`AckHandle::acknowledge`].
//!
//! The pair is built on `tokio::sync::oneshot`, wrapped so that a second
//! signal is a reportable runtime error instead of a silent no-op.

use crate::error::{ConfluxError, Result};
use tokio::sync::oneshot;

/// Consumer side of an acknowledgment pair.
///
/// Exactly one call to [`acknowledge`](Self::acknowledge) succeeds; a second
/// call returns [`ConfluxError::DoubleAcknowledgment`]. Dropping the handle
/// without acknowledging closes the pair, which the waiting producer observes
/// as a clean termination signal.
///
/// # Example
///
/// ```
/// use conflux_core::ack_pair;
///
/// # async fn example() {
/// let (mut handle, wait) = ack_pair("Joe: 0");
///
/// assert!(handle.acknowledge().is_ok());
/// assert!(handle.acknowledge().is_err());
///
/// wait.wait().await.unwrap();
/// # }
/// ```
#[derive(Debug)]
pub struct AckHandle {
    tx: Option<oneshot::Sender<()>>,
    context: String,
}

impl AckHandle {
    /// Signal the originating producer that its message has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluxError::DoubleAcknowledgment`] if this handle has
    /// already been acknowledged.
    pub fn acknowledge(&mut self) -> Result<()> {
        let Some(tx) = self.tx.take() else {
            return Err(ConfluxError::double_acknowledgment(self.context.clone()));
        };

        // A failed send means the producer already exited (shutdown); the
        // acknowledgment has nothing left to release and is not an error.
        if tx.send(()).is_err() {
            tracing::trace!(context = %self.context, "acknowledged after producer exit");
        }

        Ok(())
    }

    /// Check whether this handle has already been signaled.
    pub const fn is_acknowledged(&self) -> bool {
        self.tx.is_none()
    }
}

/// Producer side of an acknowledgment pair.
///
/// [`wait`](Self::wait) consumes the value, enforcing the exactly-one
/// observation half of the contract.
#[derive(Debug)]
pub struct AckWait {
    rx: oneshot::Receiver<()>,
}

impl AckWait {
    /// Suspend until the consumer acknowledges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluxError::ChannelClosed`] if the handle was dropped
    /// without being signaled. This is the shutdown path: the producer
    /// observing it terminates cleanly rather than stalling forever.
    pub async fn wait(self) -> Result<()> {
        self.rx
            .await
            .map_err(|_| ConfluxError::channel_closed("acknowledgment handle dropped unsignaled"))
    }
}

/// Create a connected acknowledgment pair.
///
/// `context` identifies the message the pair belongs to; it is echoed in the
/// [`ConfluxError::DoubleAcknowledgment`] error on misuse.
pub fn ack_pair(context: impl Into<String>) -> (AckHandle, AckWait) {
    let (tx, rx) = oneshot::channel();
    (
        AckHandle {
            tx: Some(tx),
            context: context.into(),
        },
        AckWait { rx },
    )
}
