/// Tunables for one repository instance.
///
/// The limits default to the historical page size of 50 but are
/// configurable: an unrestricted `find` silently capped at a hard-coded
/// 50 truncates wide rows, so callers with more super-columns per row
/// must raise `find_column_limit` (truncation is reported through the
/// `truncated_finds` statistic).
#[derive(Debug, Clone)]
pub struct RepositoryOptions {
    /// Max super-columns fetched by an unrestricted `find`
    pub find_column_limit: usize,
    /// Rows per page during `get_keys` scans
    pub scan_page_size: usize,
    /// Super-columns fetched per row while scanning, only to test
    /// liveness without pulling full payloads
    pub scan_probe_columns: usize,
}

impl Default for RepositoryOptions {
    fn default() -> Self {
        RepositoryOptions {
            find_column_limit: 50,
            scan_page_size: 50,
            scan_probe_columns: 2,
        }
    }
}
