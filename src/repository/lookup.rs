use crate::util::Status;

/// Outcome of a point read.
///
/// Distinguishes true absence from a failed query so callers can tell the
/// two apart; `found` collapses both to `None` for callers that do not
/// care.
#[derive(Debug, Clone)]
pub enum Lookup<T> {
    Found(T),
    Absent,
    Failed(Status),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Lookup::Failed(_))
    }

    /// Convenience accessor: the record if found, `None` otherwise.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Status> {
        match self {
            Lookup::Failed(status) => Some(status),
            _ => None,
        }
    }
}
