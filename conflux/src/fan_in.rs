// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in relay: N source channels forwarded into one shared output.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Merges any number of source channels into one output channel.
///
/// One relay task is spawned per source. Each relay loops receiving from its
/// source and forwarding the item unchanged to the shared output, preserving
/// per-source FIFO order end to end. A relay exits when its source closes,
/// the output closes, or the cancellation token fires.
///
/// Fairness between always-ready sources is deliberately unspecified: relays
/// race for the output send permit, and whichever acquires it first wins.
/// Both sources eventually make progress as long as the consumer keeps
/// draining.
#[derive(Debug)]
pub struct FanIn<T> {
    output: mpsc::Receiver<T>,
    handles: Vec<JoinHandle<()>>,
}

impl<T: Send + 'static> FanIn<T> {
    /// Start one relay task per source, forwarding into a shared output
    /// bounded by `capacity`.
    ///
    /// Does not block; relays run until cancellation or channel closure.
    #[must_use]
    pub fn new(
        sources: Vec<mpsc::Receiver<T>>,
        capacity: usize,
        token: CancellationToken,
    ) -> Self {
        let (out_tx, out_rx) = mpsc::channel(capacity.max(1));

        let handles = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let out = out_tx.clone();
                let token = token.clone();
                tokio::spawn(relay(index, source, out, token))
            })
            .collect();

        Self {
            output: out_rx,
            handles,
        }
    }

    /// Receive the next forwarded item, from whichever source produced one.
    ///
    /// Returns `None` once every relay has exited and the output drained.
    pub async fn recv(&mut self) -> Option<T> {
        self.output.recv().await
    }

    /// Split into the raw output channel and the relay task handles.
    pub fn into_parts(self) -> (mpsc::Receiver<T>, Vec<JoinHandle<()>>) {
        (self.output, self.handles)
    }
}

async fn relay<T>(
    index: usize,
    mut source: mpsc::Receiver<T>,
    out: mpsc::Sender<T>,
    token: CancellationToken,
) {
    tracing::trace!(source = index, "relay started");

    loop {
        let item = tokio::select! {
            () = token.cancelled() => {
                tracing::debug!(source = index, "relay cancelled");
                break;
            }
            item = source.recv() => match item {
                Some(item) => item,
                None => {
                    tracing::debug!(source = index, "relay source closed");
                    break;
                }
            },
        };

        tokio::select! {
            () = token.cancelled() => {
                tracing::debug!(source = index, "relay cancelled mid-forward");
                break;
            }
            sent = out.send(item) => {
                if sent.is_err() {
                    tracing::debug!(source = index, "relay output closed");
                    break;
                }
            }
        }
    }
}
