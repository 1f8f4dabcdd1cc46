use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tracing::warn;
use v6crawl_domain::DomainError;

/// Counts from one page's worth of work.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOutcome {
    pub succeeded: u64,
    pub failed: u64,
}

/// Bounded-concurrency fan-out for one page of items: up to `workers`
/// tasks drain a jobs channel sized to the page, reporting completions
/// through a `done` channel of matching capacity, the Rust shape of the
/// original crawler's per-page `sync.WaitGroup` of goroutines.
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self { workers: workers.max(1) }
    }

    pub async fn run<T, F, Fut>(&self, items: Vec<T>, process: Arc<F>) -> BatchOutcome
    where
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), DomainError>> + Send + 'static,
    {
        let total = items.len();
        if total == 0 {
            return BatchOutcome::default();
        }

        let (job_tx, job_rx) = mpsc::channel::<T>(total);
        let (done_tx, mut done_rx) = mpsc::channel::<Result<(), DomainError>>(total);
        let job_rx = Arc::new(Mutex::new(job_rx));

        for _ in 0..self.workers.min(total) {
            let job_rx = Arc::clone(&job_rx);
            let done_tx = done_tx.clone();
            let process = Arc::clone(&process);
            tokio::spawn(async move {
                loop {
                    let item = job_rx.lock().await.recv().await;
                    let Some(item) = item else { break };
                    let result = process(item).await;
                    if done_tx.send(result).await.is_err() {
                        break;
                    }
                }
            });
        }
        drop(done_tx);

        for item in items {
            if job_tx.send(item).await.is_err() {
                break;
            }
        }
        drop(job_tx);

        let mut outcome = BatchOutcome::default();
        for _ in 0..total {
            match done_rx.recv().await {
                Some(Ok(())) => outcome.succeeded += 1,
                Some(Err(e)) => {
                    warn!(error = %e, "job item failed");
                    outcome.failed += 1;
                }
                None => break,
            }
        }

        outcome
    }

    /// Same fan-out as [`WorkerPool::run`], but bounded by `deadline`: counts
    /// keep accumulating in a shared accumulator as workers report in, so a
    /// timeout returns whatever succeeded/failed *before* the deadline
    /// instead of discarding it. Items still in flight when the deadline
    /// hits are simply not counted — neither success nor failure — leaving
    /// `succeeded + failed < items.len()`. Workers already spawned keep
    /// running to completion in the background; their results still land in
    /// the shared accumulator, just too late for this call to see them.
    pub async fn run_with_deadline<T, F, Fut>(
        &self,
        items: Vec<T>,
        process: Arc<F>,
        deadline: Duration,
    ) -> BatchOutcome
    where
        T: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), DomainError>> + Send + 'static,
    {
        let total = items.len();
        if total == 0 {
            return BatchOutcome::default();
        }

        let (job_tx, job_rx) = mpsc::channel::<T>(total);
        let (done_tx, mut done_rx) = mpsc::channel::<Result<(), DomainError>>(total);
        let job_rx = Arc::new(Mutex::new(job_rx));

        for _ in 0..self.workers.min(total) {
            let job_rx = Arc::clone(&job_rx);
            let done_tx = done_tx.clone();
            let process = Arc::clone(&process);
            tokio::spawn(async move {
                loop {
                    let item = job_rx.lock().await.recv().await;
                    let Some(item) = item else { break };
                    let result = process(item).await;
                    if done_tx.send(result).await.is_err() {
                        break;
                    }
                }
            });
        }
        drop(done_tx);

        for item in items {
            if job_tx.send(item).await.is_err() {
                break;
            }
        }
        drop(job_tx);

        let outcome = Arc::new(Mutex::new(BatchOutcome::default()));
        let outcome_for_collector = Arc::clone(&outcome);
        let collector = tokio::spawn(async move {
            while let Some(result) = done_rx.recv().await {
                let mut outcome = outcome_for_collector.lock().await;
                match result {
                    Ok(()) => outcome.succeeded += 1,
                    Err(e) => {
                        warn!(error = %e, "job item failed");
                        outcome.failed += 1;
                    }
                }
            }
        });

        if tokio::time::timeout(deadline, collector).await.is_err() {
            warn!(total, "batch timed out before all items completed");
        }

        *outcome.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn processes_every_item_exactly_once() {
        let pool = WorkerPool::new(3);
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = Arc::clone(&seen);

        let outcome = pool
            .run(
                (0..10).collect::<Vec<i32>>(),
                Arc::new(move |_item: i32| {
                    let seen = Arc::clone(&seen_clone);
                    async move {
                        seen.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }
                }),
            )
            .await;

        assert_eq!(seen.load(Ordering::SeqCst), 10);
        assert_eq!(outcome.succeeded, 10);
        assert_eq!(outcome.failed, 0);
    }

    #[tokio::test]
    async fn counts_failures_without_losing_successes() {
        let pool = WorkerPool::new(2);

        let outcome = pool
            .run(
                (0..5).collect::<Vec<i32>>(),
                Arc::new(|item: i32| async move {
                    if item % 2 == 0 {
                        Ok(())
                    } else {
                        Err(DomainError::NotFound(format!("item {item}")))
                    }
                }),
            )
            .await;

        assert_eq!(outcome.succeeded, 3);
        assert_eq!(outcome.failed, 2);
    }

    #[tokio::test]
    async fn empty_page_is_a_no_op() {
        let pool = WorkerPool::new(4);
        let outcome = pool.run(Vec::<i32>::new(), Arc::new(|_: i32| async { Ok(()) })).await;
        assert_eq!(outcome.succeeded, 0);
        assert_eq!(outcome.failed, 0);
    }

    #[tokio::test]
    async fn deadline_keeps_completions_seen_before_it_fired() {
        let pool = WorkerPool::new(4);

        // Half the items finish instantly, half never finish within the
        // deadline — the slow half must be left uncounted, not marked failed.
        let outcome = pool
            .run_with_deadline(
                (0..8).collect::<Vec<i32>>(),
                Arc::new(|item: i32| async move {
                    if item % 2 == 0 {
                        Ok(())
                    } else {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        Ok(())
                    }
                }),
                Duration::from_millis(100),
            )
            .await;

        assert_eq!(outcome.succeeded, 4);
        assert_eq!(outcome.failed, 0);
        assert!(outcome.succeeded + outcome.failed < 8);
    }
}
