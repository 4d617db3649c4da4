use crate::commands::{CmdMessage, CmdResult};
use crate::dataset::Dataset;

/// Records whose name equals `name`, ignoring case.
pub fn run(dataset: &Dataset, name: &str) -> CmdResult {
    let wanted = name.trim().to_lowercase();
    let found: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| record.name().to_lowercase() == wanted)
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::error(format!("No property named '{}'", name)));
    }
    result.with_listed_records(found)
}
