use std::sync::atomic::{AtomicU64, Ordering};

/// Repository operation statistics
///
/// Thread-safe counters for every repository operation, updated with
/// relaxed atomics. `truncated_finds` is the observable signal that an
/// unrestricted `find` hit its configured super-column cap.
#[derive(Debug, Default)]
pub struct Statistics {
    // Writes
    pub num_saves: AtomicU64,
    pub num_super_columns_written: AtomicU64,
    pub num_deletes: AtomicU64,

    // Point reads
    pub num_finds: AtomicU64,
    pub find_hits: AtomicU64,
    pub find_absent: AtomicU64,
    pub find_failures: AtomicU64,
    pub truncated_finds: AtomicU64,
    pub num_contains_checks: AtomicU64,

    // Key scans
    pub num_key_scans: AtomicU64,
    pub scan_pages: AtomicU64,
    pub scan_rows: AtomicU64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    #[inline]
    pub fn record_save(&self, super_columns: u64) {
        self.num_saves.fetch_add(1, Ordering::Relaxed);
        self.num_super_columns_written
            .fetch_add(super_columns, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_delete(&self) {
        self.num_deletes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_find_hit(&self) {
        self.num_finds.fetch_add(1, Ordering::Relaxed);
        self.find_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_find_absent(&self) {
        self.num_finds.fetch_add(1, Ordering::Relaxed);
        self.find_absent.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_find_failure(&self) {
        self.num_finds.fetch_add(1, Ordering::Relaxed);
        self.find_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_truncated_find(&self) {
        self.truncated_finds.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_contains_check(&self) {
        self.num_contains_checks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_key_scan(&self) {
        self.num_key_scans.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_scan_page(&self, rows: u64) {
        self.scan_pages.fetch_add(1, Ordering::Relaxed);
        self.scan_rows.fetch_add(rows, Ordering::Relaxed);
    }

    // Getters (snapshot values)
    pub fn num_saves(&self) -> u64 {
        self.num_saves.load(Ordering::Relaxed)
    }

    pub fn num_super_columns_written(&self) -> u64 {
        self.num_super_columns_written.load(Ordering::Relaxed)
    }

    pub fn num_deletes(&self) -> u64 {
        self.num_deletes.load(Ordering::Relaxed)
    }

    pub fn num_finds(&self) -> u64 {
        self.num_finds.load(Ordering::Relaxed)
    }

    pub fn find_hits(&self) -> u64 {
        self.find_hits.load(Ordering::Relaxed)
    }

    pub fn find_failures(&self) -> u64 {
        self.find_failures.load(Ordering::Relaxed)
    }

    pub fn truncated_finds(&self) -> u64 {
        self.truncated_finds.load(Ordering::Relaxed)
    }

    pub fn scan_pages(&self) -> u64 {
        self.scan_pages.load(Ordering::Relaxed)
    }

    pub fn find_hit_rate(&self) -> f64 {
        let hits = self.find_hits.load(Ordering::Relaxed) as f64;
        let total = self.num_finds.load(Ordering::Relaxed) as f64;
        if total > 0.0 { hits / total } else { 0.0 }
    }

    /// Reset all statistics to zero
    pub fn reset(&self) {
        self.num_saves.store(0, Ordering::Relaxed);
        self.num_super_columns_written.store(0, Ordering::Relaxed);
        self.num_deletes.store(0, Ordering::Relaxed);
        self.num_finds.store(0, Ordering::Relaxed);
        self.find_hits.store(0, Ordering::Relaxed);
        self.find_absent.store(0, Ordering::Relaxed);
        self.find_failures.store(0, Ordering::Relaxed);
        self.truncated_finds.store(0, Ordering::Relaxed);
        self.num_contains_checks.store(0, Ordering::Relaxed);
        self.num_key_scans.store(0, Ordering::Relaxed);
        self.scan_pages.store(0, Ordering::Relaxed);
        self.scan_rows.store(0, Ordering::Relaxed);
    }

    /// Get a formatted statistics report
    pub fn report(&self) -> String {
        format!(
            "Repository Statistics:\n\
            \n\
            Writes:\n\
            - Saves:          {}\n\
            - Super-columns:  {}\n\
            - Deletes:        {}\n\
            \n\
            Finds:\n\
            - Total:          {}\n\
            - Hits:           {}\n\
            - Absent:         {}\n\
            - Failures:       {}\n\
            - Truncated:      {}\n\
            - Hit rate:       {:.2}%\n\
            - Contains:       {}\n\
            \n\
            Key scans:\n\
            - Scans:          {}\n\
            - Pages:          {}\n\
            - Rows examined:  {}",
            self.num_saves(),
            self.num_super_columns_written(),
            self.num_deletes(),
            self.num_finds(),
            self.find_hits(),
            self.find_absent.load(Ordering::Relaxed),
            self.find_failures(),
            self.truncated_finds(),
            self.find_hit_rate() * 100.0,
            self.num_contains_checks.load(Ordering::Relaxed),
            self.num_key_scans.load(Ordering::Relaxed),
            self.scan_pages(),
            self.scan_rows.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_basic() {
        let stats = Statistics::new();

        stats.record_save(3);
        stats.record_save(2);
        stats.record_find_hit();
        stats.record_find_absent();

        assert_eq!(stats.num_saves(), 2);
        assert_eq!(stats.num_super_columns_written(), 5);
        assert_eq!(stats.num_finds(), 2);
        assert_eq!(stats.find_hit_rate(), 0.5);
    }

    #[test]
    fn test_statistics_reset() {
        let stats = Statistics::new();

        stats.record_save(1);
        stats.record_delete();
        stats.record_scan_page(50);
        assert!(stats.num_saves() > 0);

        stats.reset();
        assert_eq!(stats.num_saves(), 0);
        assert_eq!(stats.num_deletes(), 0);
        assert_eq!(stats.scan_pages(), 0);
    }

    #[test]
    fn test_statistics_report() {
        let stats = Statistics::new();

        stats.record_find_hit();
        stats.record_truncated_find();

        let report = stats.report();
        assert!(report.contains("Hits:           1"));
        assert!(report.contains("Truncated:      1"));
        assert!(report.contains("Hit rate:       100.00%"));
    }
}
