// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for acknowledged fan-in stream merging.
//!
//! This crate carries the data model shared by the conflux workspace: the
//! [`Message`] envelope, the single-use acknowledgment pair
//! ([`AckHandle`]/[`AckWait`]) and the [`ConfluxError`] taxonomy. The merging
//! machinery itself lives in the `conflux` crate.

pub mod ack;
pub mod error;
pub mod message;

pub use self::ack::{ack_pair, AckHandle, AckWait};
pub use self::error::{ConfluxError, Result};
pub use self::message::Message;
