// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ack::{ack_pair, AckHandle, AckWait};

/// A labeled, sequenced message carrying its own acknowledgment handle.
///
/// Producers create one `Message` at a time; the merger relays it to the
/// consumer unchanged. The consumer owns the embedded [`AckHandle`] and must
/// eventually signal it exactly once, or the originating producer stays
/// suspended (deliberate per-source backpressure).
///
/// `seq` is a per-producer 64-bit counter, strictly increasing and contiguous
/// from zero. `payload` is the human-readable `"{label}: {seq}"` rendering.
#[derive(Debug)]
pub struct Message {
    /// Identity of the producer that emitted this message.
    pub label: String,
    /// Position within the producer's own emission order.
    pub seq: u64,
    /// Opaque payload text.
    pub payload: String,
    /// Single-use release signal back to the producer.
    pub ack: AckHandle,
}

impl Message {
    /// Build a message and the producer-side wait for its acknowledgment.
    ///
    /// # Example
    ///
    /// ```
    /// use conflux_core::Message;
    ///
    /// let (msg, _wait) = Message::new("Ann", 3);
    /// assert_eq!(msg.payload, "Ann: 3");
    /// assert_eq!(msg.seq, 3);
    /// ```
    pub fn new(label: impl Into<String>, seq: u64) -> (Self, AckWait) {
        let label = label.into();
        let payload = format!("{label}: {seq}");
        let (ack, wait) = ack_pair(payload.clone());

        (
            Self {
                label,
                seq,
                payload,
                ack,
            },
            wait,
        )
    }
}
