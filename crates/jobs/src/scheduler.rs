use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};
use v6crawl_application::ports::{Heartbeat, MetricsRepository, Notifier, PageCursor};
use v6crawl_domain::{CycleSummary, DomainError, DomainStats};

use crate::worker_pool::WorkerPool;

/// One page-fetch-and-process strategy a `BatchScheduler` drives. General
/// and campaign crawls each implement this once; everything else about the
/// cycle (paging, worker fan-out, metrics, notify, heartbeat, inter-cycle
/// sleep) is shared rather than duplicated per flavor.
#[async_trait]
pub trait CycleSource: Send + Sync {
    type Item: Send + 'static;

    async fn next_page(
        &self,
        cursor: PageCursor,
        limit: i64,
    ) -> Result<(Vec<Self::Item>, PageCursor), DomainError>;

    async fn process(&self, item: Self::Item) -> Result<(), DomainError>;

    /// Aggregate snapshot to store under the `domains` measurement once per
    /// cycle. Only the general flavor has one; the campaign flavor keeps
    /// the default `None`.
    async fn domain_stats(&self) -> Option<Result<DomainStats, DomainError>> {
        None
    }
}

pub struct BatchScheduler<S: CycleSource> {
    source: Arc<S>,
    metrics_repo: Arc<dyn MetricsRepository>,
    notifier: Arc<dyn Notifier>,
    heartbeat: Option<(Arc<dyn Heartbeat>, String)>,
    measurement: &'static str,
    flavor_label: &'static str,
    page_size: i64,
    workers: usize,
    interval_secs: u64,
    batch_timeout_secs: u64,
    shutdown: CancellationToken,
}

impl<S: CycleSource + 'static> BatchScheduler<S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Arc<S>,
        metrics_repo: Arc<dyn MetricsRepository>,
        notifier: Arc<dyn Notifier>,
        heartbeat: Option<(Arc<dyn Heartbeat>, String)>,
        measurement: &'static str,
        flavor_label: &'static str,
        page_size: i64,
        workers: usize,
        interval_secs: u64,
        batch_timeout_secs: u64,
    ) -> Self {
        Self {
            source,
            metrics_repo,
            notifier,
            heartbeat,
            measurement,
            flavor_label,
            page_size,
            workers,
            interval_secs,
            batch_timeout_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    #[instrument(skip(self), fields(flavor = self.flavor_label))]
    async fn run_cycle(&self) -> CycleSummary {
        let start = Instant::now();
        let pool = WorkerPool::new(self.workers);

        let mut cursor = PageCursor::default();
        let mut total = 0u64;
        let mut succeeded = 0u64;
        let mut failed = 0u64;

        loop {
            let (items, next_cursor) = match self.source.next_page(cursor, self.page_size).await {
                Ok(page) => page,
                Err(e) => {
                    error!(error = %e, "failed to fetch page, ending cycle early");
                    break;
                }
            };
            if items.is_empty() {
                break;
            }
            cursor = next_cursor;
            let page_len = items.len();

            let source = Arc::clone(&self.source);
            let process = Arc::new(move |item: S::Item| {
                let source = Arc::clone(&source);
                async move { source.process(item).await }
            });

            let outcome = pool
                .run_with_deadline(items, process, Duration::from_secs(self.batch_timeout_secs))
                .await;

            total += page_len as u64;
            succeeded += outcome.succeeded;
            failed += outcome.failed;

            info!(page_len, succeeded = outcome.succeeded, failed = outcome.failed, "page processed");
        }

        CycleSummary {
            duration_seconds: start.elapsed().as_secs_f64(),
            total,
            success: succeeded,
            failed,
        }
    }

    pub async fn start(self: Arc<Self>) {
        info!(flavor = self.flavor_label, "starting crawl scheduler");

        tokio::spawn(async move {
            loop {
                if self.shutdown.is_cancelled() {
                    info!(flavor = self.flavor_label, "scheduler shutting down");
                    break;
                }

                let summary = self.run_cycle().await;
                info!(
                    flavor = self.flavor_label,
                    total = summary.total,
                    success = summary.success,
                    failed = summary.failed,
                    duration_seconds = summary.duration_seconds,
                    "crawl cycle complete"
                );

                let payload = serde_json::to_value(summary).unwrap_or_else(|_| serde_json::json!({}));
                if let Err(e) = self.metrics_repo.store_metric(self.measurement, payload).await {
                    error!(error = %e, "failed to store cycle metric");
                }

                if let Some(stats) = self.source.domain_stats().await {
                    match stats {
                        Ok(stats) => {
                            let payload = serde_json::to_value(stats).unwrap_or_else(|_| serde_json::json!({}));
                            if let Err(e) = self.metrics_repo.store_metric("domains", payload).await {
                                error!(error = %e, "failed to store domains metric");
                            }
                        }
                        Err(e) => error!(error = %e, "failed to compute domain stats"),
                    }
                }

                let message = format!(
                    "[WhyNoIPv6] {} checked {}/{} sites in {:.1}s",
                    self.flavor_label, summary.success, summary.total, summary.duration_seconds
                );
                if let Err(e) = self.notifier.notify(&message).await {
                    error!(error = %e, "failed to send notification");
                }

                if let Some((heartbeat, uuid)) = &self.heartbeat {
                    if let Err(e) = heartbeat.ping(uuid, summary.failed == 0).await {
                        error!(error = %e, "failed to send heartbeat");
                    }
                }

                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(flavor = self.flavor_label, "scheduler shutting down");
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_secs(self.interval_secs)) => {}
                }
            }
        });
    }
}
