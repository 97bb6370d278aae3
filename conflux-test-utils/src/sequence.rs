// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use conflux_core::Message;
use std::collections::HashMap;

/// Tracks per-label sequence numbers observed by a consumer.
///
/// Asserts the core ordering contract on every observation: sequence numbers
/// per producer must be strictly increasing and contiguous from zero, and
/// every message must come from a known label.
#[derive(Debug, Default)]
pub struct SequenceTracker {
    expected: HashMap<String, u64>,
    known: Vec<String>,
}

impl SequenceTracker {
    /// Track the given set of legitimate producer labels.
    pub fn for_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let known: Vec<String> = labels.into_iter().map(Into::into).collect();
        let expected = known.iter().map(|label| (label.clone(), 0)).collect();
        Self { expected, known }
    }

    /// Record one received message, panicking on any contract violation.
    pub fn observe(&mut self, message: &Message) {
        let Some(expected) = self.expected.get_mut(&message.label) else {
            panic!(
                "message from unknown producer {:?} (known: {:?})",
                message.label, self.known
            );
        };

        assert_eq!(
            *expected, message.seq,
            "producer {:?} emitted seq {} but {} was expected next",
            message.label, message.seq, expected
        );
        assert_eq!(
            message.payload,
            format!("{}: {}", message.label, message.seq),
            "payload should embed label and sequence"
        );

        *expected += 1;
    }

    /// Number of messages observed from one label.
    #[must_use]
    pub fn count(&self, label: &str) -> u64 {
        self.expected.get(label).copied().unwrap_or(0)
    }

    /// Total messages observed across all labels.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.expected.values().sum()
    }
}
