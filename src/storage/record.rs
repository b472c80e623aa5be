//! Persisted record type and the timestamp/id helpers it depends on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Field names owned by the store. Caller data never overrides these.
pub const SYSTEM_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// A single structured item inside a collection.
///
/// Serializes flat, in the order `id`, caller fields, `createdAt`, `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

impl Record {
    /// Raw value of a caller field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String value of a caller field, if it holds one.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Case-insensitive substring match over every caller field value.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.fields.values().any(|value| value_text(value).to_lowercase().contains(&needle))
    }
}

/// Returns `true` for keys managed by the store.
#[must_use]
pub fn is_system_field(key: &str) -> bool {
    SYSTEM_FIELDS.contains(&key)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// =============================================================================
// TIME HELPERS
// =============================================================================

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
#[must_use]
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    )
}

/// Current instant as an ISO-8601 string.
#[must_use]
pub fn now_iso() -> String {
    iso_timestamp(OffsetDateTime::now_utc())
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
