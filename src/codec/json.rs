//! serde_json-backed field codec.
//!
//! Maps a struct to one column per top-level field, with the field value
//! serialized as JSON bytes. This stands in for the original runtime
//! reflection: any `Serialize + Deserialize` record gets a column mapping
//! without per-entity code.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::Column;
use crate::util::{Result, Status};

/// Enumerate the record's fields as named columns.
///
/// The record must serialize to a JSON object; anything else (scalars,
/// sequences) has no field-to-column mapping and is a mapping error.
pub fn columns_from_record<T: Serialize>(record: &T) -> Result<Vec<Column>> {
    let value = serde_json::to_value(record)?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(Status::mapping(format!(
                "record must serialize to an object, got {other:?}"
            )));
        },
    };

    let mut columns = Vec::with_capacity(object.len());
    for (name, field) in object {
        let payload = serde_json::to_vec(&field)?;
        columns.push(Column::new(name, Bytes::from(payload)));
    }
    Ok(columns)
}

/// Rebuild a record from the columns of one super-column.
///
/// Fields missing from the column set deserialize through the record
/// type's own defaults where serde allows it; unknown columns are a
/// mapping error surfaced by serde.
pub fn record_from_columns<T: DeserializeOwned>(columns: &[Column]) -> Result<T> {
    let mut object = serde_json::Map::with_capacity(columns.len());
    for column in columns {
        let field: Value = serde_json::from_slice(column.value()).map_err(|e| {
            Status::mapping(format!("column {:?} holds invalid JSON: {e}", column.name()))
        })?;
        object.insert(column.name().to_string(), field);
    }
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Account {
        login: String,
        visits: u64,
        active: bool,
    }

    #[test]
    fn test_columns_from_record() {
        let account = Account {
            login: "alice".to_string(),
            visits: 7,
            active: true,
        };

        let columns = columns_from_record(&account).unwrap();
        assert_eq!(columns.len(), 3);

        let names: Vec<&str> = columns.iter().map(|c| c.name()).collect();
        assert!(names.contains(&"login"));
        assert!(names.contains(&"visits"));
        assert!(names.contains(&"active"));
    }

    #[test]
    fn test_record_round_trip() {
        let account = Account {
            login: "alice".to_string(),
            visits: 7,
            active: true,
        };

        let columns = columns_from_record(&account).unwrap();
        let restored: Account = record_from_columns(&columns).unwrap();
        assert_eq!(restored, account);
    }

    #[test]
    fn test_non_object_record_rejected() {
        let status = columns_from_record(&42u32).unwrap_err();
        assert!(status.is_mapping());
    }

    #[test]
    fn test_invalid_column_payload_rejected() {
        let columns = vec![Column::new("login", Bytes::from_static(b"not json"))];
        let status = record_from_columns::<Account>(&columns).unwrap_err();
        assert!(status.is_mapping());
    }
}
