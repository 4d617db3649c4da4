//! Field schema and the per-category comparator table.
//!
//! Every field belongs to a [`FieldKind`], which decides two things: which
//! filter control a UI offers for it, and how the sort pass orders it. The
//! known property fields live in the [`FIELDS`] registry; fields a dataset
//! carries beyond those get a kind inferred from the first record.
//!
//! Sorting never compares raw values ad hoc. [`Schema::sort_key`] maps a
//! record's value to a [`SortKey`] according to the field's kind, and keys
//! have a total order.

use crate::model::{fields, FieldValue, Record};
use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, compared lexicographically.
    Text,
    /// Integer, compared numerically.
    Numeric,
    /// A grade stored as its string form, compared lexicographically.
    Ranked,
    /// Boolean capability tag.
    Flag,
    /// List of linked sub-items, compared by the joined display names.
    Links,
}

impl FieldKind {
    pub fn control(self) -> FilterControl {
        match self {
            FieldKind::Text | FieldKind::Links => FilterControl::Substring,
            FieldKind::Numeric | FieldKind::Ranked => FilterControl::Choice,
            FieldKind::Flag => FilterControl::Flag,
        }
    }

    fn infer(value: &FieldValue) -> Self {
        match value {
            FieldValue::Integer(_) => FieldKind::Numeric,
            FieldValue::Bool(_) => FieldKind::Flag,
            FieldValue::Links(_) => FieldKind::Links,
            FieldValue::Text(_) | FieldValue::Null => FieldKind::Text,
        }
    }
}

/// The input a UI offers for filtering a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterControl {
    /// Free-text search box (substring filter).
    Substring,
    /// Dropdown of the values present in the dataset (exact filter).
    Choice,
    /// Any / true / false selector (exact filter).
    Flag,
}

/// Registry entry for a known field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Short name accepted wherever a field name is typed.
    pub alias: &'static str,
}

impl FieldDef {
    const fn new(name: &'static str, kind: FieldKind, alias: &'static str) -> Self {
        Self { name, kind, alias }
    }
}

/// Known property fields, in document order.
pub const FIELDS: &[FieldDef] = &[
    FieldDef::new(fields::NAME, FieldKind::Text, "name"),
    FieldDef::new(fields::COST, FieldKind::Numeric, "cost"),
    FieldDef::new(fields::FUSION, FieldKind::Text, "fusion"),
    FieldDef::new(fields::DESCRIPTION, FieldKind::Text, "description"),
    FieldDef::new(fields::ITEMS, FieldKind::Links, "items"),
    FieldDef::new(fields::GRADE, FieldKind::Ranked, "grade"),
    FieldDef::new(fields::BOMB, FieldKind::Flag, "bomb"),
    FieldDef::new(fields::HEAL, FieldKind::Flag, "heal"),
    FieldDef::new(fields::BUFF, FieldKind::Flag, "buff"),
    FieldDef::new(fields::WEAPON, FieldKind::Flag, "weapon"),
    FieldDef::new(fields::ARMOR, FieldKind::Flag, "armor"),
    FieldDef::new(fields::ACCESSORY, FieldKind::Flag, "accessory"),
];

pub fn get_def(name: &str) -> Option<&'static FieldDef> {
    FIELDS.iter().find(|def| def.name == name)
}

/// A field as present in a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub control: FilterControl,
}

impl FieldSpec {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            control: kind.control(),
        }
    }
}

/// Sort key with a total order: variant first, then value.
///
/// `Missing` sorts before everything, so values that do not fit a field's
/// kind (a null cost, a missing flag) group at the ascending end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Missing,
    Flag(bool),
    Number(NumberKey),
    Text(Cow<'a, str>),
}

/// Numeric sort value. Integer costs and decimal costs loaded as text share
/// one scale, ordered with `f64::total_cmp`.
#[derive(Debug, Clone, Copy)]
pub struct NumberKey(f64);

impl NumberKey {
    /// Parses a decimal string; non-finite or non-numeric text has no key.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| Self(f + 0.0))
    }
}

impl From<i64> for NumberKey {
    fn from(n: i64) -> Self {
        Self(n as f64)
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumberKey {}

impl PartialOrd for NumberKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Field specs for one dataset, built once at load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    specs: Vec<FieldSpec>,
}

impl Schema {
    /// Derives the schema from the first record; the dataset is assumed
    /// homogeneous.
    pub fn from_first_record(first: Option<&Record>) -> Self {
        let Some(record) = first else {
            return Self::default();
        };

        let specs = record
            .fields()
            .map(|(name, value)| {
                let kind = get_def(name)
                    .map(|def| def.kind)
                    .unwrap_or_else(|| FieldKind::infer(value));
                FieldSpec::new(name, kind)
            })
            .collect();

        Self { specs }
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }

    pub fn get(&self, field: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.name == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Kind used to order `field`. Unknown fields sort as text, which makes
    /// every record tie and keeps input order.
    pub fn kind_of(&self, field: &str) -> FieldKind {
        self.get(field)
            .map(|spec| spec.kind)
            .or_else(|| get_def(field).map(|def| def.kind))
            .unwrap_or(FieldKind::Text)
    }

    pub fn sort_key<'r>(&self, field: &str, record: &'r Record) -> SortKey<'r> {
        sort_key_for(self.kind_of(field), record.get(field))
    }

    /// Maps user input to a field name of this schema.
    ///
    /// Tries the exact name, then a case-insensitive name, then a registry
    /// alias (`cost` for `Property Cost`).
    pub fn resolve_field(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Some(spec) = self.get(input) {
            return Some(spec.name.as_str());
        }
        if let Some(spec) = self
            .specs
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(input))
        {
            return Some(spec.name.as_str());
        }
        FIELDS
            .iter()
            .find(|def| def.alias.eq_ignore_ascii_case(input))
            .and_then(|def| self.get(def.name))
            .map(|spec| spec.name.as_str())
    }
}

fn sort_key_for(kind: FieldKind, value: Option<&FieldValue>) -> SortKey<'_> {
    match (kind, value) {
        (FieldKind::Numeric, Some(FieldValue::Integer(n))) => SortKey::Number((*n).into()),
        (FieldKind::Numeric, Some(FieldValue::Text(text))) => {
            NumberKey::parse(text).map_or(SortKey::Missing, SortKey::Number)
        }
        (FieldKind::Numeric, _) => SortKey::Missing,
        (FieldKind::Flag, Some(FieldValue::Bool(b))) => SortKey::Flag(*b),
        (FieldKind::Flag, _) => SortKey::Missing,
        (FieldKind::Text | FieldKind::Ranked | FieldKind::Links, Some(v)) => {
            SortKey::Text(v.coerce_to_string())
        }
        (FieldKind::Text | FieldKind::Ranked | FieldKind::Links, None) => {
            SortKey::Text(Cow::Borrowed(""))
        }
    }
}
