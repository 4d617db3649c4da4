use crate::commands::{CmdMessage, CmdResult};
use crate::dataset::Dataset;
use crate::state::ViewState;

pub fn run(dataset: &Dataset, state: &ViewState) -> CmdResult {
    let visible: Vec<_> = state.visible(dataset).into_iter().cloned().collect();
    let mut result = CmdResult::default();

    for field in state.filters().active_fields() {
        if !dataset.has_field(field) {
            result.add_message(CmdMessage::warning(format!(
                "Unknown field '{}': its filter matches nothing",
                field
            )));
        }
    }
    if let Some(field) = state.sort().field() {
        if !dataset.has_field(field) {
            result.add_message(CmdMessage::warning(format!(
                "Unknown field '{}': sort has no effect",
                field
            )));
        }
    }

    result.add_message(CmdMessage::info(format!(
        "{} of {} properties",
        visible.len(),
        dataset.len()
    )));
    result.with_listed_records(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::fields;

    fn names(result: &CmdResult) -> Vec<String> {
        result
            .listed_records
            .iter()
            .map(|r| r.name().into_owned())
            .collect()
    }

    #[test]
    fn lists_everything_by_default() {
        let dataset = Dataset::bundled().unwrap();
        let result = run(&dataset, &ViewState::new());

        assert_eq!(result.listed_records.len(), dataset.len());
        assert_eq!(
            result.messages.last().unwrap().content,
            format!("{0} of {0} properties", dataset.len())
        );
    }

    #[test]
    fn weapon_and_name_filters_combine() {
        let dataset = Dataset::bundled().unwrap();
        let state = ViewState::new()
            .set_exact_filter(fields::WEAPON, "true")
            .set_substring_filter(fields::NAME, "sw");

        let result = run(&dataset, &state);
        assert_eq!(names(&result), vec!["Sword Dance", "Swordsmith's Pride"]);
        for record in &result.listed_records {
            assert!(record.flag(fields::WEAPON));
            assert!(record.name().to_lowercase().contains("sw"));
        }
    }

    #[test]
    fn warns_about_unknown_fields() {
        let dataset = Dataset::bundled().unwrap();
        let state = ViewState::new()
            .set_exact_filter("Colour", "red")
            .set_sort_field(Some("Weight"));

        let result = run(&dataset, &state);
        assert!(result.listed_records.is_empty());

        let warnings: Vec<_> = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].content.contains("Colour"));
        assert!(warnings[1].content.contains("Weight"));
    }

    #[test]
    fn empty_dataset_lists_nothing() {
        let dataset = Dataset::new(vec![]);
        let result = run(&dataset, &ViewState::new());
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "0 of 0 properties");
    }
}
