use bytes::Bytes;

/// A named leaf value inside a super-column.
///
/// The value is an opaque serialized payload; the timestamp is in
/// microseconds and assigned by the backend when the column is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    value: Bytes,
    timestamp: Option<u64>,
}

impl Column {
    pub fn new(name: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Column {
            name: name.into(),
            value: value.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(name: impl Into<String>, value: impl Into<Bytes>, timestamp: u64) -> Self {
        Column {
            name: name.into(),
            value: value.into(),
            timestamp: Some(timestamp),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn value_bytes(&self) -> Bytes {
        self.value.clone()
    }

    pub fn timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    /// Copy of this column stamped with a write timestamp.
    pub fn stamped(&self, timestamp: u64) -> Self {
        Column {
            name: self.name.clone(),
            value: self.value.clone(),
            timestamp: Some(timestamp),
        }
    }
}
