use crate::commands::{CmdMessage, CmdResult};
use crate::dataset::Dataset;

pub fn run(dataset: &Dataset, field: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if !dataset.has_field(field) {
        result.add_message(CmdMessage::warning(format!("Unknown field '{}'", field)));
        return result;
    }
    result.with_values(dataset.unique_values(field))
}
