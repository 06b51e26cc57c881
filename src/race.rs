//! first-to-complete fan-out
//!
//! races a fixed number of identical attempts and yields whichever outcome
//! arrives first, success or not. losing attempts are abandoned, not
//! cancelled; the transport's own deadline reaps them.

use std::future::Future;
use tokio::sync::mpsc;

/// race `fan_out` attempts and return the first outcome with its index
///
/// each attempt runs as an independent spawned task. the handoff channel is
/// sized to the fan-out so a losing attempt's send always completes without
/// blocking its task. returns `None` only when `fan_out` is zero.
pub(crate) async fn first<T, F, Fut>(fan_out: usize, mut attempt: F) -> Option<(usize, T)>
where
    T: Send + 'static,
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = T> + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel(fan_out.max(1));

    for index in 0..fan_out {
        let fut = attempt(index);
        let tx = tx.clone();
        tokio::spawn(async move {
            // send fails once the collector has dropped the receiver; the
            // losing outcome is simply discarded
            let _ = tx.send((index, fut.await)).await;
        });
    }
    drop(tx);

    rx.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_fastest_attempt_wins() {
        let delays = [50u64, 10, 100];
        let (index, value) = first(3, |i| async move {
            sleep(Duration::from_millis(delays[i])).await;
            i * 10
        })
        .await
        .unwrap();

        assert_eq!(index, 1);
        assert_eq!(value, 10);
    }

    #[tokio::test]
    async fn test_fast_failure_beats_slow_success() {
        let (_, outcome) = first(3, |i| async move {
            if i == 0 {
                Err("boom")
            } else {
                sleep(Duration::from_millis(100)).await;
                Ok("fine")
            }
        })
        .await
        .unwrap();

        assert_eq!(outcome, Err("boom"));
    }

    #[tokio::test]
    async fn test_zero_fan_out_yields_none() {
        let outcome = first(0, |_| async move { 1 }).await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_single_attempt() {
        let (index, value) = first(1, |_| async move { "only" }).await.unwrap();
        assert_eq!(index, 0);
        assert_eq!(value, "only");
    }

    #[tokio::test]
    async fn test_late_finishers_complete_after_collector_is_gone() {
        let finished = Arc::new(AtomicUsize::new(0));

        let outcome = {
            let finished = finished.clone();
            first(3, move |i| {
                let finished = finished.clone();
                async move {
                    sleep(Duration::from_millis(10 * i as u64)).await;
                    finished.fetch_add(1, Ordering::SeqCst);
                    i
                }
            })
            .await
        };
        assert!(outcome.is_some());

        // the receiver is dropped by now; the two losing tasks must still
        // run to completion instead of blocking on the handoff
        sleep(Duration::from_millis(100)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }
}
