//! Metric helpers for request-driven callers.
//!
//! The library crates instrument themselves inline (`announcer_index_*` in
//! the destination index, `announcer_pages_served_total` and
//! `announcer_display_*` in the fan-out service). The helpers here cover the
//! caller-side seams: resolution outcomes reported by a CLI run, and
//! live-event dispatches driven by the external poller.

use metrics::{counter, histogram};

/// Record one resolution request outcome
pub fn record_resolution(resolved: usize, failed: usize) {
    counter!("announcer_creators_resolved_total").increment(resolved as u64);
    if failed > 0 {
        counter!("announcer_creators_unresolved_total").increment(failed as u64);
    }
    histogram!("announcer_resolution_batch_size").record((resolved + failed) as f64);
}

/// Record a live-event fan-out (driven by the external poller)
pub fn record_live_event_dispatched(creator_id: &str, destinations: usize) {
    counter!(
        "announcer_live_events_total",
        "creator_id" => creator_id.to_string()
    )
    .increment(1);
    histogram!("announcer_live_event_destinations").record(destinations as f64);
}

/// Running statistics over resolution requests
///
/// In-memory aggregate for end-of-run summaries, independent of the
/// Prometheus exporter.
#[derive(Debug, Clone, Default)]
pub struct ResolutionStats {
    /// Total resolution requests observed
    pub requests: u64,
    /// Total identities resolved
    pub resolved: u64,
    /// Total identities that failed to resolve
    pub failed: u64,
    /// Requests aborted by rate limiting
    pub rate_limited: u64,
    /// Requests aborted by upstream outage
    pub unavailable: u64,
}

impl ResolutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed request
    pub fn record_success(&mut self, resolved: usize, failed: usize) {
        self.requests += 1;
        self.resolved += resolved as u64;
        self.failed += failed as u64;
    }

    /// Record a rate-limit abort
    pub fn record_rate_limited(&mut self) {
        self.requests += 1;
        self.rate_limited += 1;
    }

    /// Record an outage abort
    pub fn record_unavailable(&mut self) {
        self.requests += 1;
        self.unavailable += 1;
    }

    /// Snapshot for reporting
    pub fn summary(&self) -> StatsSummary {
        let attempted = self.resolved + self.failed;
        StatsSummary {
            requests: self.requests,
            resolved: self.resolved,
            failed: self.failed,
            rate_limited: self.rate_limited,
            unavailable: self.unavailable,
            resolve_rate: if attempted == 0 {
                1.0
            } else {
                self.resolved as f64 / attempted as f64
            },
        }
    }
}

/// Snapshot of resolution statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub requests: u64,
    pub resolved: u64,
    pub failed: u64,
    pub rate_limited: u64,
    pub unavailable: u64,
    /// resolved / (resolved + failed), 1.0 when nothing was attempted
    pub resolve_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_accumulate() {
        let mut stats = ResolutionStats::new();
        stats.record_success(8, 2);
        stats.record_success(5, 0);
        stats.record_rate_limited();

        let summary = stats.summary();
        assert_eq!(summary.requests, 3);
        assert_eq!(summary.resolved, 13);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.rate_limited, 1);
        assert!((summary.resolve_rate - 13.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_aborts_do_not_skew_resolve_rate() {
        let mut stats = ResolutionStats::new();
        stats.record_unavailable();
        stats.record_rate_limited();

        let summary = stats.summary();
        assert_eq!(summary.requests, 2);
        assert_eq!(summary.unavailable, 1);
        assert_eq!(summary.rate_limited, 1);
        // Aborted requests attempted no identities
        assert_eq!(summary.resolve_rate, 1.0);
    }

    #[test]
    fn test_empty_stats_resolve_rate() {
        let stats = ResolutionStats::new();
        assert_eq!(stats.summary().resolve_rate, 1.0);
    }

    #[test]
    fn test_record_helpers_are_safe_without_recorder() {
        // No recorder installed in unit tests; calls must be no-ops
        record_resolution(3, 1);
        record_live_event_dispatched("s1", 2);
    }
}
