// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Acknowledged fan-in: merge labeled producer streams behind a per-message
//! rendezvous handshake.
//!
//! A [`RendezvousMerger`] runs one producer task per label and relays their
//! messages into a single consumer-visible stream. Each [`Message`] embeds a
//! single-use acknowledgment handle; the producer that emitted it stays
//! suspended until the consumer signals the handle, so a producer never has
//! more than one unacknowledged message in flight. A consumer that withholds
//! an acknowledgment backpressures exactly that producer and no other.
//!
//! # Example
//!
//! ```no_run
//! use conflux::RendezvousMerger;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut merger = RendezvousMerger::new("Joe", "Ann");
//!
//!     while let Some(mut message) = merger.recv().await {
//!         println!("{}", message.payload);
//!         message.ack.acknowledge().unwrap();
//!     }
//! }
//! ```
//!
//! Cross-producer interleaving is non-deterministic and no fairness is
//! guaranteed between always-ready producers; per-producer order is strict
//! FIFO. Shutdown is cooperative: [`RendezvousMerger::shutdown`] cancels and
//! joins every task, while dropping the merger merely requests cancellation.

pub mod config;
pub mod fan_in;
pub mod merger;

mod producer;

pub use self::config::MergerConfig;
pub use self::fan_in::FanIn;
pub use self::merger::{MergedStream, RendezvousMerger};

// Re-export the data model so consumers depend on one crate.
pub use conflux_core::{ack_pair, AckHandle, AckWait, ConfluxError, Message, Result};
