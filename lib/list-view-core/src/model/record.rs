use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::Date;

use super::common::GetListResponse;
use super::list_filter::{ListFilterValue, StringMatch, ValueComparison};
use super::list_query::ListQuery;
use crate::repository::error::DataLayerError;

/// A single row coming from a record source, keyed by column name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Resolves a dotted path (`role.name`, `tags.0`) against the record.
    ///
    /// A key containing the literal path (e.g. a joined column aliased as
    /// `role.name`) takes precedence over nested traversal.
    pub fn resolve_path(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(fields) => fields.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Same as [`Record::resolve_path`], a miss yields `Value::Null`
    pub fn value_of(&self, path: &str) -> Value {
        self.resolve_path(path).cloned().unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = DataLayerError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(DataLayerError::MappingError),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecordFilterValue {
    Text {
        field: String,
        value: StringMatch,
    },
    Equals {
        field: String,
        value: String,
    },
    Number {
        field: String,
        value: ValueComparison<f64>,
    },
    Date {
        field: String,
        value: ValueComparison<Date>,
    },
}

impl RecordFilterValue {
    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self::Text {
            field: field.into(),
            value: StringMatch::contains(term),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Text { field, .. }
            | Self::Equals { field, .. }
            | Self::Number { field, .. }
            | Self::Date { field, .. } => field,
        }
    }
}

impl ListFilterValue for RecordFilterValue {}

pub type RecordListQuery = ListQuery<String, RecordFilterValue>;
pub type GetRecordList = GetListResponse<Record>;

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn test_resolve_path_top_level() {
        let record = record(json!({"id": 1, "name": "Alice"}));
        assert_eq!(record.resolve_path("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_resolve_path_nested_object_and_array() {
        let record = record(json!({
            "role": {"name": "admin", "permissions": ["read", "write"]}
        }));
        assert_eq!(record.value_of("role.name"), json!("admin"));
        assert_eq!(record.value_of("role.permissions.1"), json!("write"));
    }

    #[test]
    fn test_resolve_path_missing_segment_is_null() {
        let record = record(json!({"role": {"name": "admin"}, "status": 1}));
        assert_eq!(record.value_of("role.missing.deeper"), Value::Null);
        assert_eq!(record.value_of("team.name"), Value::Null);
        assert_eq!(record.value_of("status.value"), Value::Null);
        assert_eq!(record.value_of("role.permissions.x"), Value::Null);
    }

    #[test]
    fn test_resolve_path_prefers_literal_key() {
        let record = record(json!({"role.name": "flat", "role": {"name": "nested"}}));
        assert_eq!(record.value_of("role.name"), json!("flat"));
    }

    #[test]
    fn test_non_object_is_not_a_record() {
        assert!(matches!(
            Record::try_from(json!([1, 2])),
            Err(DataLayerError::MappingError)
        ));
    }
}
