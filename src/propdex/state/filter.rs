//! Filter state.
//!
//! Two independent mappings from field name to criterion:
//!
//! - **exact**: field → accepted values. Single-select: setting a value replaces
//!   whatever was there, and clearing removes the entry, so the number of
//!   active exact filters is always `exact().len()`.
//! - **substring**: field → raw search text. Empty text is kept in the map but
//!   imposes no constraint.
//!
//! All constraints combine with AND.

use crate::model::Record;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    exact: BTreeMap<String, BTreeSet<String>>,
    substring: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted value for `field`; an empty value clears the field.
    #[must_use]
    pub fn with_exact(mut self, field: &str, value: &str) -> Self {
        if value.is_empty() {
            self.exact.remove(field);
        } else {
            self.exact
                .insert(field.to_string(), BTreeSet::from([value.to_string()]));
        }
        self
    }

    /// Replaces the search text for `field`.
    #[must_use]
    pub fn with_substring(mut self, field: &str, text: &str) -> Self {
        self.substring.insert(field.to_string(), text.to_string());
        self
    }

    pub fn exact(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.exact
    }

    pub fn substring(&self) -> &BTreeMap<String, String> {
        &self.substring
    }

    /// The selected value of an exact filter, as a dropdown would show it.
    pub fn exact_value(&self, field: &str) -> Option<&str> {
        self.exact
            .get(field)
            .and_then(|values| values.iter().next())
            .map(String::as_str)
    }

    pub fn substring_text(&self, field: &str) -> Option<&str> {
        self.substring.get(field).map(String::as_str)
    }

    /// Fields that currently constrain the result.
    pub fn active_fields(&self) -> BTreeSet<&str> {
        self.exact
            .keys()
            .map(String::as_str)
            .chain(
                self.substring
                    .iter()
                    .filter(|(_, text)| !text.is_empty())
                    .map(|(field, _)| field.as_str()),
            )
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.exact.len() + self.substring.values().filter(|t| !t.is_empty()).count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// Builds the record predicate once, folding the search texts up front.
    pub fn predicate(&self) -> impl Fn(&Record) -> bool + '_ {
        let searches: Vec<(&str, String)> = self
            .substring
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(field, text)| (field.as_str(), text.to_lowercase()))
            .collect();

        move |record: &Record| {
            let exact_ok = self.exact.iter().all(|(field, accepted)| {
                accepted.is_empty() || accepted.contains(&*record.text(field))
            });

            exact_ok
                && searches.iter().all(|(field, needle)| {
                    record.text(field).to_lowercase().contains(needle.as_str())
                })
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        (self.predicate())(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fields, FieldValue};

    fn record(name: &str, cost: i64, weapon: bool) -> Record {
        Record::new(vec![
            (fields::NAME.into(), FieldValue::Text(name.into())),
            (fields::COST.into(), FieldValue::Integer(cost)),
            (fields::WEAPON.into(), FieldValue::Bool(weapon)),
        ])
    }

    #[test]
    fn exact_filter_is_single_select() {
        let state = FilterState::new()
            .with_exact(fields::COST, "10")
            .with_exact(fields::COST, "5");

        assert_eq!(state.exact().len(), 1);
        assert_eq!(state.exact_value(fields::COST), Some("5"));
        assert_eq!(state.exact()[fields::COST].len(), 1);
    }

    #[test]
    fn empty_exact_value_removes_entry() {
        let state = FilterState::new()
            .with_exact(fields::WEAPON, "true")
            .with_exact(fields::WEAPON, "");

        assert!(state.exact().is_empty());
        assert!(state.is_unconstrained());
    }

    #[test]
    fn empty_substring_is_kept_but_inert() {
        let state = FilterState::new().with_substring(fields::NAME, "");

        assert_eq!(state.substring_text(fields::NAME), Some(""));
        assert_eq!(state.active_count(), 0);
        assert!(state.matches(&record("Anything", 1, false)));
    }

    #[test]
    fn exact_compares_coerced_strings() {
        let state = FilterState::new().with_exact(fields::COST, "10");
        assert!(state.matches(&record("A", 10, false)));
        assert!(!state.matches(&record("A", 100, false)));

        let state = FilterState::new().with_exact(fields::WEAPON, "true");
        assert!(state.matches(&record("A", 1, true)));
        assert!(!state.matches(&record("A", 1, false)));
    }

    #[test]
    fn substring_is_case_insensitive() {
        let state = FilterState::new().with_substring(fields::NAME, "SW");
        assert!(state.matches(&record("Sword Dance", 1, true)));
        assert!(state.matches(&record("Crossword", 1, true)));
        assert!(!state.matches(&record("Flame", 1, true)));
    }

    #[test]
    fn constraints_combine_with_and() {
        let state = FilterState::new()
            .with_exact(fields::WEAPON, "true")
            .with_substring(fields::NAME, "sw");

        assert!(state.matches(&record("Sword Dance", 1, true)));
        assert!(!state.matches(&record("Swift Boots", 1, false)));
        assert!(!state.matches(&record("Sharp Edge", 1, true)));
        assert_eq!(
            state.active_fields().into_iter().collect::<Vec<_>>(),
            vec![fields::NAME, fields::WEAPON]
        );
    }

    #[test]
    fn unknown_field_matches_nothing() {
        let state = FilterState::new().with_exact("Color", "red");
        assert!(!state.matches(&record("A", 1, true)));

        let state = FilterState::new().with_substring("Color", "r");
        assert!(!state.matches(&record("A", 1, true)));
    }
}
