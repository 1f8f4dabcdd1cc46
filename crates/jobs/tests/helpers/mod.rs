#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use v6crawl_application::ports::{Heartbeat, MetricsRepository, Notifier, PageCursor};
use v6crawl_domain::{DomainError, DomainStats};
use v6crawl_jobs::CycleSource;

/// A `CycleSource` over a fixed queue of pre-built pages, so scheduler tests
/// don't need a real database or DNS resolver behind them.
pub struct MockCycleSource {
    pages: Mutex<VecDeque<Vec<i32>>>,
    pub processed: Mutex<Vec<i32>>,
    fail_items: HashSet<i32>,
    slow_items: HashSet<i32>,
    next_page_calls: AtomicU64,
    fail_on_page: Option<usize>,
    domain_stats: Option<DomainStats>,
}

impl MockCycleSource {
    pub fn new(pages: Vec<Vec<i32>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            processed: Mutex::new(Vec::new()),
            fail_items: HashSet::new(),
            slow_items: HashSet::new(),
            next_page_calls: AtomicU64::new(0),
            fail_on_page: None,
            domain_stats: None,
        }
    }

    /// Makes this source behave like the general flavor, which reports a
    /// `domains` aggregate once per cycle; campaign-flavor tests leave this
    /// unset and keep the trait's default `None`.
    pub fn with_domain_stats(mut self, stats: DomainStats) -> Self {
        self.domain_stats = Some(stats);
        self
    }

    pub fn with_failing_items(mut self, items: Vec<i32>) -> Self {
        self.fail_items = items.into_iter().collect();
        self
    }

    /// Items that never finish within any reasonable test timeout, to
    /// exercise batch-deadline accounting.
    pub fn with_slow_items(mut self, items: Vec<i32>) -> Self {
        self.slow_items = items.into_iter().collect();
        self
    }

    pub fn with_next_page_error_at(mut self, page_index: usize) -> Self {
        self.fail_on_page = Some(page_index);
        self
    }

    pub fn next_page_calls(&self) -> u64 {
        self.next_page_calls.load(Ordering::SeqCst)
    }

    pub async fn processed_items(&self) -> Vec<i32> {
        self.processed.lock().await.clone()
    }
}

#[async_trait]
impl CycleSource for MockCycleSource {
    type Item = i32;

    async fn next_page(
        &self,
        cursor: PageCursor,
        _limit: i64,
    ) -> Result<(Vec<i32>, PageCursor), DomainError> {
        let call_index = self.next_page_calls.fetch_add(1, Ordering::SeqCst) as usize;
        if self.fail_on_page == Some(call_index) {
            return Err(DomainError::DatabaseError("page fetch failed".to_string()));
        }
        let page = self.pages.lock().await.pop_front().unwrap_or_default();
        Ok((page, PageCursor(cursor.0 + 1)))
    }

    async fn process(&self, item: i32) -> Result<(), DomainError> {
        if self.slow_items.contains(&item) {
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        }
        if self.fail_items.contains(&item) {
            return Err(DomainError::NotFound(format!("item {item}")));
        }
        self.processed.lock().await.push(item);
        Ok(())
    }

    async fn domain_stats(&self) -> Option<Result<DomainStats, DomainError>> {
        self.domain_stats.map(Ok)
    }
}

pub struct MockMetricsRepository {
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl MockMetricsRepository {
    pub fn new() -> Self {
        Self { calls: Mutex::new(Vec::new()) }
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl MetricsRepository for MockMetricsRepository {
    async fn store_metric(&self, measurement: &str, payload: Value) -> Result<(), DomainError> {
        self.calls.lock().await.push((measurement.to_string(), payload));
        Ok(())
    }

    async fn store_campaign_domain_log(
        &self,
        _campaign_domain_id: i64,
        _payload: Value,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct MockNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self { messages: Mutex::new(Vec::new()) }
    }

    pub async fn call_count(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, message: &str) -> Result<(), String> {
        self.messages.lock().await.push(message.to_string());
        Ok(())
    }
}

pub struct MockHeartbeat {
    pub pings: Mutex<Vec<(String, bool)>>,
}

impl MockHeartbeat {
    pub fn new() -> Self {
        Self { pings: Mutex::new(Vec::new()) }
    }

    pub async fn last_ping(&self) -> Option<(String, bool)> {
        self.pings.lock().await.last().cloned()
    }
}

#[async_trait]
impl Heartbeat for MockHeartbeat {
    async fn ping(&self, uuid: &str, ok: bool) -> Result<(), String> {
        self.pings.lock().await.push((uuid.to_string(), ok));
        Ok(())
    }
}
