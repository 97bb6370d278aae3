// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the conflux workspace.
//!
//! Provides timeout-based liveness assertions (stall detection is a
//! first-class property of the acknowledged fan-in contract), a per-label
//! sequence tracker enforcing the ordering invariants, and canonical label
//! fixtures. For development and testing only, not production code.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod sequence;

pub use helpers::{assert_no_element_emitted, assert_pending_for, expect_within, ANN, JOE};
pub use sequence::SequenceTracker;
