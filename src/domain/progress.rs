use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{info, warn};

/// Track per-competition outcomes across the fetch pool.
///
/// Shared by every task, so the counters are atomic; logging happens at
/// milestones to keep a multi-thousand-page run readable.
pub struct ScrapeProgress {
    total: usize,
    valid: AtomicUsize,
    skipped: AtomicUsize,
    failed: AtomicUsize,
}

impl ScrapeProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            valid: AtomicUsize::new(0),
            skipped: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    pub fn record_valid(&self) {
        self.valid.fetch_add(1, Ordering::Relaxed);
        self.log_progress();
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
        self.log_progress();
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.log_progress();
    }

    pub fn valid_count(&self) -> usize {
        self.valid.load(Ordering::Relaxed)
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn failed_count(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn current_count(&self) -> usize {
        self.valid_count() + self.skipped_count() + self.failed_count()
    }

    /// Final summary after the join barrier.
    pub fn report(&self, elapsed: Duration) {
        info!("Valid {} competitions", self.valid_count());
        info!("Skipped {} competitions", self.skipped_count());
        if self.failed_count() > 0 {
            warn!("Failed {} competitions", self.failed_count());
        }
        info!("Time elapsed: {} s", elapsed.as_secs());
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} valid, {} skipped, {} failed)",
                current,
                self.total,
                self.valid_count(),
                self.skipped_count(),
                self.failed_count()
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 100 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate_independently() {
        let progress = ScrapeProgress::new(10);
        progress.record_valid();
        progress.record_valid();
        progress.record_skipped();
        progress.record_failed();

        assert_eq!(progress.valid_count(), 2);
        assert_eq!(progress.skipped_count(), 1);
        assert_eq!(progress.failed_count(), 1);
        assert_eq!(progress.current_count(), 4);
    }

    #[test]
    fn test_milestones() {
        assert!(is_milestone(100));
        assert!(is_milestone(4900));
        assert!(!is_milestone(101));
        assert!(should_log(7, 7));
    }
}
