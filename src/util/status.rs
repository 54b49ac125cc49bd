use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    NotFound,
    Corruption,
    InvalidArgument,
    Unavailable,
    Mapping,
    MutationRejected,
}

/// Error type shared across the crate.
///
/// `Unavailable` marks transient backend failures; `Mapping` marks codec
/// failures, which must never be collapsed into "absent".
#[derive(Debug, Clone)]
pub struct Status {
    code: Code,
    message: Option<String>,
}

impl Status {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Status {
            code: Code::NotFound,
            message: Some(msg.into()),
        }
    }

    pub fn corruption(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Corruption,
            message: Some(msg.into()),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status {
            code: Code::InvalidArgument,
            message: Some(msg.into()),
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Unavailable,
            message: Some(msg.into()),
        }
    }

    pub fn mapping(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Mapping,
            message: Some(msg.into()),
        }
    }

    pub fn mutation_rejected(msg: impl Into<String>) -> Self {
        Status {
            code: Code::MutationRejected,
            message: Some(msg.into()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Code::NotFound
    }

    pub fn is_corruption(&self) -> bool {
        self.code == Code::Corruption
    }

    pub fn is_unavailable(&self) -> bool {
        self.code == Code::Unavailable
    }

    pub fn is_mapping(&self) -> bool {
        self.code == Code::Mapping
    }

    pub fn is_mutation_rejected(&self) -> bool {
        self.code == Code::MutationRejected
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{:?}: {}", self.code, msg),
            None => write!(f, "{:?}", self.code),
        }
    }
}

impl std::error::Error for Status {}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Status::mapping(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Status>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_not_found() {
        let status = Status::not_found("row not found");
        assert!(status.is_not_found());
        assert_eq!(status.message(), Some("row not found"));
    }

    #[test]
    fn test_status_display() {
        let status = Status::unavailable("connection refused");
        assert_eq!(status.to_string(), "Unavailable: connection refused");
    }

    #[test]
    fn test_status_from_serde_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let status = Status::from(err);
        assert!(status.is_mapping());
    }
}
