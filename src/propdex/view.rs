//! Derivation of the visible sequence.
//!
//! `compute_visible` is the whole pipeline: a filter pass over the dataset in
//! its original order, then an optional stable sort on one field. It is a pure
//! function of its three inputs and returns a fresh vector every call.

use crate::dataset::Dataset;
use crate::model::Record;
use crate::state::{FilterState, SortOrder, SortState};
use tracing::trace;

pub fn compute_visible<'d>(
    dataset: &'d Dataset,
    filters: &FilterState,
    sort: &SortState,
) -> Vec<&'d Record> {
    let keep = filters.predicate();
    let mut visible: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|record| keep(*record))
        .collect();

    if let Some(field) = sort.field() {
        let schema = dataset.schema();
        let order = sort.order();
        // `sort_by` is stable; descending only reverses the comparison, so
        // equal keys keep their input order in both directions.
        visible.sort_by(|a, b| {
            let ordering = schema.sort_key(field, a).cmp(&schema.sort_key(field, b));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    trace!(
        total = dataset.len(),
        visible = visible.len(),
        sort_field = sort.field().unwrap_or("-"),
        "recomputed visible sequence"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{fields, FieldValue};
    use crate::state::ViewState;

    fn prop(name: &str, cost: i64) -> Record {
        Record::new(vec![
            (fields::NAME.into(), FieldValue::Text(name.into())),
            (fields::COST.into(), FieldValue::Integer(cost)),
        ])
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name().into_owned()).collect()
    }

    fn cost_dataset() -> Dataset {
        Dataset::new(vec![prop("A", 10), prop("B", 5), prop("C", 5)])
    }

    #[test]
    fn no_sort_keeps_dataset_order() {
        let dataset = cost_dataset();
        let visible = ViewState::new().visible(&dataset);
        assert_eq!(names(&visible), vec!["A", "B", "C"]);
    }

    #[test]
    fn cost_ascending_keeps_tie_order() {
        let dataset = cost_dataset();
        let state = ViewState::new().set_sort_field(Some(fields::COST));
        assert_eq!(names(&state.visible(&dataset)), vec!["B", "C", "A"]);
    }

    #[test]
    fn cost_descending_keeps_tie_order() {
        let dataset = cost_dataset();
        let state = ViewState::new()
            .set_sort_field(Some(fields::COST))
            .toggle_sort_order();
        assert_eq!(names(&state.visible(&dataset)), vec!["A", "B", "C"]);
    }

    #[test]
    fn descending_is_not_a_blind_reversal() {
        let dataset = cost_dataset();
        let ascending = ViewState::new().set_sort_field(Some(fields::COST));
        let descending = ascending.clone().toggle_sort_order();

        let mut reversed = ascending.visible(&dataset);
        reversed.reverse();

        assert_eq!(names(&reversed), vec!["A", "C", "B"]);
        assert_ne!(names(&reversed), names(&descending.visible(&dataset)));
    }

    #[test]
    fn costs_compare_numerically() {
        let dataset = Dataset::new(vec![prop("Ten", 10), prop("Nine", 9), prop("Hundred", 100)]);
        let state = ViewState::new().set_sort_field(Some(fields::COST));
        assert_eq!(
            names(&state.visible(&dataset)),
            vec!["Nine", "Ten", "Hundred"]
        );
    }

    #[test]
    fn decimal_costs_sort_numerically() {
        let dataset = Dataset::from_json_str(
            r#"[
                {"Property Name": "One", "Property Cost": 1},
                {"Property Name": "Big", "Property Cost": 99.5},
                {"Property Name": "Two", "Property Cost": 2}
            ]"#,
        )
        .unwrap();
        let state = ViewState::new().set_sort_field(Some(fields::COST));
        assert_eq!(names(&state.visible(&dataset)), vec!["One", "Two", "Big"]);

        let state = state.toggle_sort_order();
        assert_eq!(names(&state.visible(&dataset)), vec!["Big", "Two", "One"]);
    }

    #[test]
    fn grades_compare_as_strings() {
        let graded = |name: &str, grade: &str| {
            Record::new(vec![
                (fields::NAME.into(), FieldValue::Text(name.into())),
                (fields::GRADE.into(), FieldValue::Text(grade.into())),
            ])
        };
        let dataset = Dataset::new(vec![graded("Two", "2"), graded("Ten", "10")]);
        let state = ViewState::new().set_sort_field(Some(fields::GRADE));
        assert_eq!(names(&state.visible(&dataset)), vec!["Ten", "Two"]);
    }

    #[test]
    fn missing_values_sort_first_without_aborting() {
        let dataset = Dataset::new(vec![
            prop("Priced", 3),
            Record::new(vec![(fields::NAME.into(), FieldValue::Text("Bare".into()))]),
        ]);
        let state = ViewState::new().set_sort_field(Some(fields::COST));
        assert_eq!(names(&state.visible(&dataset)), vec!["Bare", "Priced"]);
    }

    #[test]
    fn unknown_sort_field_keeps_order() {
        let dataset = cost_dataset();
        let state = ViewState::new().set_sort_field(Some("Nope"));
        assert_eq!(names(&state.visible(&dataset)), vec!["A", "B", "C"]);
    }

    #[test]
    fn clearing_text_filter_restores_records() {
        let dataset = cost_dataset();
        let filtered = ViewState::new().set_substring_filter(fields::NAME, "a");
        assert_eq!(names(&filtered.visible(&dataset)), vec!["A"]);

        let cleared = filtered.set_substring_filter(fields::NAME, "");
        assert_eq!(names(&cleared.visible(&dataset)), vec!["A", "B", "C"]);
    }

    #[test]
    fn clear_sort_matches_initial_output() {
        let dataset = cost_dataset();
        let initial = ViewState::new().visible(&dataset);
        let state = ViewState::new()
            .click_sort(fields::COST)
            .click_sort(fields::COST)
            .set_sort_field(Some(fields::NAME))
            .clear_sort();
        assert_eq!(state.visible(&dataset), initial);
    }

    #[test]
    fn empty_dataset_yields_empty_sequence() {
        let dataset = Dataset::new(vec![]);
        let state = ViewState::new()
            .set_exact_filter(fields::COST, "5")
            .set_sort_field(Some(fields::COST));
        assert!(state.visible(&dataset).is_empty());
    }

    #[test]
    fn does_not_reorder_dataset() {
        let dataset = cost_dataset();
        let _ = ViewState::new()
            .set_sort_field(Some(fields::COST))
            .visible(&dataset);
        let order: Vec<_> = dataset.records().iter().map(|r| r.name().into_owned()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }
}
