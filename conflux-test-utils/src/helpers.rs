use futures::Stream;
use futures::stream::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Canonical producer labels used across the test suites.
pub const JOE: &str = "Joe";
pub const ANN: &str = "Ann";

/// Assert that `fut` does not complete within `timeout_ms`.
///
/// Used to observe deliberate stalls: a producer whose message is withheld
/// from acknowledgment must emit nothing further.
pub async fn assert_pending_for<F, T>(fut: F, timeout_ms: u64)
where
    F: Future<Output = T>,
{
    tokio::select! {
        _ = fut => {
            panic!("future completed, expected it to stay pending");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Assert that a stream emits nothing within `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected element emitted, expected no output");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Await `fut`, panicking if it takes longer than `timeout_ms`.
pub async fn expect_within<F, T>(fut: F, timeout_ms: u64) -> T
where
    F: Future<Output = T>,
{
    timeout(Duration::from_millis(timeout_ms), fut)
        .await
        .expect("operation did not complete within the allotted time")
}
