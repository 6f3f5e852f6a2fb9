use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One flat row returned by a cargo query.
///
/// Every value is kept as text, nulls and numbers being normalized on
/// deserialization. Accessors never fail: missing columns read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(HashMap<String, String>);

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;

        Ok(Self(
            raw.into_iter()
                .map(|(key, value)| {
                    let text = match value {
                        serde_json::Value::Null => String::new(),
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (key, text)
                })
                .collect(),
        ))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Row {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value, empty when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Trimmed value, `None` when absent or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Numeric value, blank or unparsable values reading as zero.
    pub fn number<T: FromStr + Default>(&self, key: &str) -> T {
        self.get(key).trim().parse().unwrap_or_default()
    }

    pub fn float(&self, key: &str) -> f64 {
        self.get(key).trim().parse().unwrap_or(0.0)
    }

    /// `"1"`, `"yes"` and `"true"` are true, anything else is false.
    pub fn flag(&self, key: &str) -> bool {
        matches!(
            self.get(key).trim().to_lowercase().as_str(),
            "1" | "yes" | "true"
        )
    }

    /// Comma separated values, one element per position, empty for a blank column.
    pub fn list(&self, key: &str) -> Vec<String> {
        let value = self.get(key);
        if value.trim().is_empty() {
            return Vec::new();
        }

        value.split(',').map(|v| v.trim().to_string()).collect()
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.get(key).trim(), "%Y-%m-%d").ok()
    }

    /// A wiki timestamp, which is always stored as UTC.
    pub fn datetime_utc(&self, key: &str) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(self.get(key).trim(), DATETIME_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}
