// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The merger facade: labeled producers behind a fan-in relay.

use crate::config::MergerConfig;
use crate::fan_in::FanIn;
use crate::producer;
use conflux_core::{ConfluxError, Message, Result};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Merges N labeled producer streams into one acknowledged stream.
///
/// Each label gets its own producer task feeding a dedicated channel; a
/// fan-in relay forwards all of them into the single output read by
/// [`recv`](Self::recv). Every received [`Message`] carries an
/// acknowledgment handle that the consumer must signal exactly once before
/// the originating producer emits again. An unacknowledged message stalls
/// only its own producer; the others keep flowing.
///
/// Dropping the merger requests cancellation; [`shutdown`](Self::shutdown)
/// additionally waits for every producer and relay task to finish.
#[derive(Debug)]
pub struct RendezvousMerger {
    output: mpsc::Receiver<Message>,
    token: CancellationToken,
    handles: Vec<JoinHandle<()>>,
    guard: DropGuard,
}

impl RendezvousMerger {
    /// Construct a two-producer merger with the default configuration.
    ///
    /// Does not block; producers and relays start immediately.
    #[must_use]
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::build(vec![left.into(), right.into()], MergerConfig::default())
    }

    /// Construct a merger over any number of labels with an explicit
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluxError::InvalidConfig`] if `labels` is empty or the
    /// configuration fails [`MergerConfig::validate`].
    pub fn with_config<I, L>(labels: I, config: MergerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        config.validate()?;

        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConfluxError::invalid_config(
                "at least one producer label is required",
            ));
        }

        Ok(Self::build(labels, config))
    }

    fn build(labels: Vec<String>, config: MergerConfig) -> Self {
        let token = CancellationToken::new();
        let capacity = config.channel_capacity();

        let mut handles = Vec::with_capacity(labels.len() * 2);
        let mut sources = Vec::with_capacity(labels.len());

        for label in labels {
            let (tx, rx) = mpsc::channel(capacity);
            handles.push(producer::spawn(label, config.clone(), tx, token.clone()));
            sources.push(rx);
        }

        let (output, relay_handles) = FanIn::new(sources, capacity, token.clone()).into_parts();
        handles.extend(relay_handles);

        Self {
            output,
            guard: token.clone().drop_guard(),
            token,
            handles,
        }
    }

    /// Receive the next merged message, suspending until one is available
    /// from any producer.
    ///
    /// Returns `None` once the merger has been shut down. Per-producer order
    /// is preserved; interleaving across producers is non-deterministic.
    pub async fn recv(&mut self) -> Option<Message> {
        if self.token.is_cancelled() {
            return None;
        }

        tokio::select! {
            () = self.token.cancelled() => None,
            message = self.output.recv() => message,
        }
    }

    /// Request cancellation without waiting for the tasks to terminate.
    ///
    /// All producers and relays observe the signal at their next suspension
    /// point; subsequent [`recv`](Self::recv) calls return `None`.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Request cancellation and wait for every producer and relay task to
    /// terminate.
    pub async fn shutdown(self) {
        self.token.cancel();

        for handle in self.handles {
            if let Err(err) = handle.await {
                tracing::warn!(%err, "merger task panicked during shutdown");
            }
        }
    }

    /// Convert into a [`Stream`] of merged messages.
    ///
    /// The stream ends after cancellation; dropping it cancels the merger.
    #[must_use]
    pub fn into_stream(self) -> MergedStream {
        MergedStream {
            inner: ReceiverStream::new(self.output),
            token: self.token,
            _handles: self.handles,
            _guard: self.guard,
        }
    }
}

/// [`Stream`] view over a [`RendezvousMerger`]'s output.
#[derive(Debug)]
pub struct MergedStream {
    inner: ReceiverStream<Message>,
    token: CancellationToken,
    _handles: Vec<JoinHandle<()>>,
    _guard: DropGuard,
}

impl Stream for MergedStream {
    type Item = Message;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.token.is_cancelled() {
            return Poll::Ready(None);
        }
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
