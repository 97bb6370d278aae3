// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Producer task: emits labeled, sequenced messages gated by acknowledgment.

use crate::config::MergerConfig;
use conflux_core::Message;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// Spawn one producer task for `label`.
///
/// The task loops forever until cancelled: build the next message, hand it
/// to the relay (blocking send), sleep a randomized delay, then suspend
/// until the consumer acknowledges. The acknowledgment gate guarantees at
/// most one outstanding unacknowledged message per producer.
pub(crate) fn spawn(
    label: String,
    config: MergerConfig,
    out: mpsc::Sender<Message>,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(run(label, config, out, token))
}

async fn run(
    label: String,
    config: MergerConfig,
    out: mpsc::Sender<Message>,
    token: CancellationToken,
) {
    tracing::trace!(label = %label, "producer started");

    for seq in 0u64.. {
        let (message, ack_wait) = Message::new(label.clone(), seq);

        tokio::select! {
            () = token.cancelled() => {
                tracing::debug!(label = %label, seq, "producer cancelled before send");
                return;
            }
            sent = out.send(message) => {
                if sent.is_err() {
                    tracing::debug!(label = %label, seq, "producer input closed");
                    return;
                }
            }
        }

        let delay = config.sample_delay();
        if !delay.is_zero() {
            tokio::select! {
                () = token.cancelled() => {
                    tracing::debug!(label = %label, seq, "producer cancelled while sleeping");
                    return;
                }
                () = sleep(delay) => {}
            }
        }

        tokio::select! {
            () = token.cancelled() => {
                tracing::debug!(label = %label, seq, "producer cancelled awaiting acknowledgment");
                return;
            }
            acked = ack_wait.wait() => {
                if let Err(err) = acked {
                    // Handle dropped unsignaled: the message left the
                    // pipeline, treat as end of stream for this producer.
                    tracing::debug!(label = %label, seq, %err, "producer exiting");
                    return;
                }
            }
        }
    }
}
