// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Backpressure semantics: a withheld acknowledgment stalls exactly one
//! producer, and only that producer.

use conflux::{MergerConfig, RendezvousMerger};
use conflux_test_utils::{assert_pending_for, expect_within, ANN, JOE};

#[tokio::test]
async fn test_unacknowledged_message_stalls_only_its_producer() {
    // Arrange
    let mut merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");

    // Act: receive until Joe's first message arrives; keep its handle alive
    // but never signal it. Acknowledge everything else.
    let mut withheld = None;
    while withheld.is_none() {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("merger should deliver");
        if message.label == JOE {
            withheld = Some(message);
        } else {
            message.ack.acknowledge().unwrap();
        }
    }

    // Assert: twenty further receives are all Ann's. Joe emitted seq 0,
    // is awaiting its acknowledgment, and must emit nothing more.
    for _ in 0..20 {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("Ann should be unaffected");
        assert_eq!(message.label, ANN, "stall leaked to the wrong producer");
        message.ack.acknowledge().unwrap();
    }

    drop(withheld);
    merger.shutdown().await;
}

#[tokio::test]
async fn test_withholding_every_acknowledgment_stalls_the_pipeline() {
    let mut merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");

    // One outstanding message per producer, neither acknowledged.
    let first = expect_within(merger.recv(), 1_000).await.expect("first");
    let second = expect_within(merger.recv(), 1_000).await.expect("second");
    assert_ne!(first.label, second.label);

    // With both producers gated, nothing further may arrive.
    assert_pending_for(merger.recv(), 800).await;

    drop((first, second));
    merger.shutdown().await;
}

#[tokio::test]
async fn test_late_acknowledgment_releases_the_stalled_producer() {
    let mut merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");

    let mut withheld = None;
    while withheld.is_none() {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("merger should deliver");
        if message.label == JOE {
            withheld = Some(message);
        } else {
            message.ack.acknowledge().unwrap();
        }
    }

    // Release Joe after the fact; his seq 1 must eventually come through.
    let mut released = withheld.expect("Joe's message was withheld above");
    released.ack.acknowledge().unwrap();

    loop {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("Joe should resume after the late acknowledgment");
        let done = message.label == JOE;
        if done {
            assert_eq!(message.seq, 1);
        }
        message.ack.acknowledge().unwrap();
        if done {
            break;
        }
    }

    merger.shutdown().await;
}

#[tokio::test]
async fn test_dropping_a_message_unacknowledged_ends_that_producer() {
    // Dropping the handle (as opposed to retaining it unsignaled) closes the
    // acknowledgment pair; the producer treats it as stream termination and
    // exits cleanly instead of stalling.
    let mut merger = RendezvousMerger::with_config([JOE, ANN], MergerConfig::immediate())
        .expect("immediate config is valid");

    let mut joe_dropped = false;
    while !joe_dropped {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("merger should deliver");
        if message.label == JOE {
            joe_dropped = true;
            drop(message);
        } else {
            message.ack.acknowledge().unwrap();
        }
    }

    // Joe exited; Ann keeps flowing.
    for _ in 0..10 {
        let mut message = expect_within(merger.recv(), 1_000)
            .await
            .expect("Ann should be unaffected");
        assert_eq!(message.label, ANN);
        message.ack.acknowledge().unwrap();
    }

    merger.shutdown().await;
}
