use crate::commands::CmdResult;
use crate::dataset::Dataset;

pub fn run(dataset: &Dataset) -> CmdResult {
    CmdResult::default().with_fields(dataset.schema().specs().to_vec())
}
