use serde::Serialize;
use serde_json::Value;

/// A provider payload, frozen to JSON at the provider seam.
///
/// Field order and values are exactly what the provider reported; no
/// remapping or unit conversion happens on this side. A `Table` keeps the
/// provider's row order. An empty dataset is a valid outcome for a known
/// symbol and is distinct from a not-found error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    /// Ordered tabular rows.
    Table(Vec<Value>),
    /// A single structured record.
    Record(Value),
}

impl Dataset {
    /// Build a tabular dataset from rows.
    #[must_use]
    pub const fn table(rows: Vec<Value>) -> Self {
        Self::Table(rows)
    }

    /// Build a single-record dataset.
    #[must_use]
    pub const fn record(value: Value) -> Self {
        Self::Record(value)
    }

    /// Number of rows (a record counts as one unless it is null/empty).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Table(rows) => rows.len(),
            Self::Record(v) => usize::from(!record_is_empty(v)),
        }
    }

    /// True when the provider reported the symbol as valid but returned no
    /// rows for the requested category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the rows of a tabular dataset.
    #[must_use]
    pub fn rows(&self) -> Option<&[Value]> {
        match self {
            Self::Table(rows) => Some(rows),
            Self::Record(_) => None,
        }
    }

    /// Keep only the rows matching `keep`. No-op for records.
    pub fn retain_rows<F>(&mut self, keep: F)
    where
        F: FnMut(&Value) -> bool,
    {
        if let Self::Table(rows) = self {
            rows.retain(keep);
        }
    }

    /// Render the payload as pretty-printed JSON text.
    #[must_use]
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| String::from("null"))
    }
}

impl From<Value> for Dataset {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(rows) => Self::Table(rows),
            other => Self::Record(other),
        }
    }
}

fn record_is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(rows) => rows.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_payloads_become_tables() {
        let ds = Dataset::from(json!([{"a": 1}, {"a": 2}]));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn empty_and_null_payloads_are_empty() {
        assert!(Dataset::from(json!([])).is_empty());
        assert!(Dataset::from(json!(null)).is_empty());
        assert!(Dataset::from(json!({})).is_empty());
        assert!(!Dataset::from(json!({"symbol": "AAPL"})).is_empty());
    }

    #[test]
    fn rendering_preserves_row_order() {
        let ds = Dataset::table(vec![json!({"ts": 2}), json!({"ts": 1})]);
        let text = ds.to_text();
        let first = text.find("\"ts\": 2").expect("first row present");
        let second = text.find("\"ts\": 1").expect("second row present");
        assert!(first < second);
    }

    #[test]
    fn retain_filters_tables_only() {
        let mut ds = Dataset::table(vec![json!({"keep": true}), json!({"keep": false})]);
        ds.retain_rows(|row| row["keep"].as_bool().unwrap_or(false));
        assert_eq!(ds.len(), 1);

        let mut rec = Dataset::record(json!({"keep": false}));
        rec.retain_rows(|_| false);
        assert_eq!(rec.len(), 1);
    }
}
