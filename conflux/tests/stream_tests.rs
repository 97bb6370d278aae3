// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `futures::Stream` view over the merged output.

use conflux::{MergerConfig, RendezvousMerger};
use conflux_test_utils::{assert_no_element_emitted, expect_within, SequenceTracker, ANN, JOE};
use futures::StreamExt;

#[tokio::test]
async fn test_stream_yields_the_merged_sequence() {
    let merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");
    let mut stream = merger.into_stream();
    let mut tracker = SequenceTracker::for_labels([JOE, ANN]);

    for _ in 0..10 {
        let mut message = expect_within(stream.next(), 1_000)
            .await
            .expect("stream should keep yielding");
        tracker.observe(&message);
        message.ack.acknowledge().unwrap();
    }

    assert_eq!(tracker.total(), 10);
    assert_eq!(tracker.count(JOE), 5);
    assert_eq!(tracker.count(ANN), 5);
}

#[tokio::test]
async fn test_stream_stalls_without_acknowledgments() {
    let merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");
    let mut stream = merger.into_stream();

    // Take one message from each producer, acknowledge neither.
    let first = expect_within(stream.next(), 1_000).await.expect("first");
    let second = expect_within(stream.next(), 1_000).await.expect("second");
    assert_ne!(first.label, second.label);

    assert_no_element_emitted(&mut stream, 800).await;

    drop((first, second));
}
