//! Sequenced publication of insight results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::service::InsightService;
use super::types::{AiAnalysis, AnalysisSnapshot, InsightTier};
use crate::expense::ExpenseRecord;
use crate::summary::ExpenseSummary;

/// Runs insight requests in the background and publishes the newest result.
///
/// Every request gets a sequence number. A completion is published only if
/// no later request has been issued in the meantime, so results arriving out
/// of order never overwrite newer ones.
#[derive(Debug, Clone)]
pub struct InsightCoordinator {
    service: Arc<InsightService>,
    latest: Arc<AtomicU64>,
    sender: Arc<watch::Sender<AnalysisSnapshot>>,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl InsightCoordinator {
    /// Creates a coordinator with an empty initial snapshot.
    #[must_use]
    pub fn new(service: InsightService) -> Self {
        let (sender, _) = watch::channel(AnalysisSnapshot::default());
        Self {
            service: Arc::new(service),
            latest: Arc::new(AtomicU64::new(0)),
            sender: Arc::new(sender),
            clock: local_today,
        }
    }

    /// Replaces the source of "today" used by [`Self::refresh`].
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Receiver that always observes a complete snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AnalysisSnapshot> {
        self.sender.subscribe()
    }

    /// Currently published snapshot.
    #[must_use]
    pub fn current(&self) -> AnalysisSnapshot {
        self.sender.borrow().clone()
    }

    /// Sequence number of the most recently issued request.
    #[must_use]
    pub fn latest_sequence(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Supersedes any pending request without issuing a new one.
    ///
    /// The published snapshot is flagged as loading until the next request
    /// completes. Returns the sequence number that was consumed.
    pub fn invalidate(&self) -> u64 {
        let sequence = self.next_sequence();
        debug!(sequence, "Insight results invalidated");
        sequence
    }

    /// Issues a request dated with the coordinator's clock.
    ///
    /// Must be called from within a tokio runtime.
    pub fn refresh(
        &self,
        tier: InsightTier,
        expenses: Vec<ExpenseRecord>,
        summary: ExpenseSummary,
    ) -> JoinHandle<bool> {
        self.request(tier, expenses, summary, (self.clock)())
    }

    /// Issues a request and spawns its generation.
    ///
    /// The published snapshot is flagged as loading right away. The returned
    /// handle resolves to `true` if the result was published and `false` if a
    /// newer request superseded it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request(
        &self,
        tier: InsightTier,
        expenses: Vec<ExpenseRecord>,
        summary: ExpenseSummary,
        today: NaiveDate,
    ) -> JoinHandle<bool> {
        let sequence = self.next_sequence();
        debug!(sequence, ?tier, records = expenses.len(), "Insight request issued");

        let service = Arc::clone(&self.service);
        let latest = Arc::clone(&self.latest);
        let sender = Arc::clone(&self.sender);

        tokio::spawn(async move {
            let analysis = service.run(tier, &expenses, &summary, today).await;
            publish(&latest, &sender, sequence, tier, analysis)
        })
    }

    fn next_sequence(&self) -> u64 {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.sender
            .send_modify(|snapshot| snapshot.analysis.loading = true);
        sequence
    }
}

fn publish(
    latest: &AtomicU64,
    sender: &watch::Sender<AnalysisSnapshot>,
    sequence: u64,
    tier: InsightTier,
    analysis: AiAnalysis,
) -> bool {
    sender.send_if_modified(|snapshot| {
        let current = latest.load(Ordering::SeqCst);
        if sequence != current {
            info!(sequence, latest = current, ?tier, "Discarding stale insight result");
            return false;
        }

        *snapshot = AnalysisSnapshot {
            sequence,
            tier: Some(tier),
            analysis,
        };
        debug!(sequence, ?tier, "Insight result published");
        true
    })
}
