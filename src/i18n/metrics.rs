//! Translation metrics and observability module.
//!
//! Tracks how often sessions are provisioned or reused, how many texts went
//! through a session and how many user-triggered translations failed.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Number of sessions handed back by the provisioner
    sessions_provisioned: AtomicUsize,

    /// Number of times the current session was reused for an unchanged pair
    sessions_reused: AtomicUsize,

    /// Number of texts translated successfully
    texts_translated: AtomicUsize,

    /// Number of translation attempts that ended in an error
    failures: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    fn new() -> Self {
        Self {
            sessions_provisioned: AtomicUsize::new(0),
            sessions_reused: AtomicUsize::new(0),
            texts_translated: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        }
    }

    pub fn record_session_provisioned(&self) {
        self.sessions_provisioned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session_reused(&self) {
        self.sessions_reused.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` texts translated in one call.
    pub fn record_translated(&self, count: usize) {
        self.texts_translated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn sessions_provisioned(&self) -> usize {
        self.sessions_provisioned.load(Ordering::Relaxed)
    }

    pub fn sessions_reused(&self) -> usize {
        self.sessions_reused.load(Ordering::Relaxed)
    }

    pub fn texts_translated(&self) -> usize {
        self.texts_translated.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let provisioned = self.sessions_provisioned();
        let reused = self.sessions_reused();
        let total_requests = provisioned + reused;
        let session_reuse_rate = if total_requests > 0 {
            (reused as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            sessions_provisioned: provisioned,
            sessions_reused: reused,
            session_reuse_rate,
            texts_translated: self.texts_translated(),
            failures: self.failures(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.sessions_provisioned.store(0, Ordering::Relaxed);
        self.sessions_reused.store(0, Ordering::Relaxed);
        self.texts_translated.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of the translation metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub sessions_provisioned: usize,
    pub sessions_reused: usize,
    /// Percentage of session requests served by the current session
    pub session_reuse_rate: f64,
    pub texts_translated: usize,
    pub failures: usize,
}
