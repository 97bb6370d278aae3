// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Two chatty producers merged into one listener.
//!
//! Joe and Ann each speak at their own randomized pace; the listener hears
//! them interleaved and releases each speaker by acknowledging their line.
//!
//! Run with: `cargo run --example boring_speakers`

use conflux::RendezvousMerger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut merger = RendezvousMerger::new("Joe", "Ann");

    for _ in 0..5 {
        let mut first = merger.recv().await.expect("merger closed early");
        println!("{}", first.payload);
        let mut second = merger.recv().await.expect("merger closed early");
        println!("{}", second.payload);

        first.ack.acknowledge()?;
        second.ack.acknowledge()?;
    }

    println!("You're both boring; I'm leaving.");
    merger.shutdown().await;
    Ok(())
}
