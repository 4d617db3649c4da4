//! Dataset loading.
//!
//! The dataset is loaded once at startup and never changes afterwards. Loading
//! is the only place raw JSON values are interpreted: every value becomes a
//! [`FieldValue`], and the grade is normalized to its string form so that all
//! later grade comparisons are string comparisons.

use crate::error::{PropdexError, Result};
use crate::model::{fields, FieldValue, LinkedItem, Record};
use crate::schema::Schema;
use serde_json::{Map, Number, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

const BUNDLED_PROPERTIES: &str = include_str!("../../data/properties.json");

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    schema: Schema,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let schema = Schema::from_first_record(records.first());
        Self { records, schema }
    }

    /// The property list compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_PROPERTIES)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PropdexError::Dataset(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(content)?;
        let Value::Array(items) = raw else {
            return Err(PropdexError::Dataset(
                "expected a JSON array of records".to_string(),
            ));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(record_from_object(map)),
                other => Err(PropdexError::Dataset(format!(
                    "record {} is not an object (found {})",
                    i,
                    json_type_name(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let dataset = Self::new(records);
        info!(
            records = dataset.len(),
            fields = dataset.schema.specs().len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Global field list, taken from the first record.
    pub fn field_names(&self) -> Vec<&str> {
        self.schema.field_names()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.schema.contains(field)
    }

    pub fn resolve_field(&self, input: &str) -> Option<&str> {
        self.schema.resolve_field(input)
    }

    /// Distinct non-empty coerced values of `field`, sorted: the options a
    /// dropdown filter offers.
    pub fn unique_values(&self, field: &str) -> Vec<String> {
        let values: BTreeSet<String> = self
            .records
            .iter()
            .map(|record| record.text(field).into_owned())
            .filter(|value| !value.is_empty())
            .collect();
        values.into_iter().collect()
    }
}

fn record_from_object(map: Map<String, Value>) -> Record {
    let fields = map
        .into_iter()
        .map(|(name, value)| {
            let value = if name == fields::GRADE {
                normalize_grade(value)
            } else {
                field_value(value)
            };
            (name, value)
        })
        .collect();
    Record::new(fields)
}

/// Grades arrive as numbers, strings or null; all become strings.
fn normalize_grade(value: Value) -> FieldValue {
    match value {
        Value::String(s) => FieldValue::Text(s),
        Value::Null => FieldValue::Text("null".to_string()),
        Value::Number(n) => FieldValue::Text(number_text(&n)),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Shortest decimal form of a JSON number. Whole values print without a
/// fraction, so `3.0` and `3` give the same text.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn field_value(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Text(number_text(&n)),
        },
        Value::String(s) => FieldValue::Text(s),
        Value::Array(items) => FieldValue::Links(items.into_iter().map(linked_item).collect()),
        Value::Object(map) => FieldValue::Text(Value::Object(map).to_string()),
    }
}

fn linked_item(value: Value) -> LinkedItem {
    match value {
        Value::String(name) => LinkedItem::new(name, ""),
        Value::Object(map) => {
            let text = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            LinkedItem::new(text("name"), text("link"))
        }
        other => LinkedItem::new(other.to_string(), ""),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
