//! # API Facade
//!
//! The single entry point UI clients use. `PropdexApi` owns the immutable
//! dataset and the *current* [`ViewState`]; each mutator replaces the held
//! state with the result of the corresponding pure transition. This is the
//! only place where view state is "mutable", which is exactly the reactivity
//! wrapper a UI needs around the engine.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: filtering and sorting live in `state` / `view`,
//!   command shaping lives in `commands/*.rs`
//! - **I/O**: no stdout, stderr, or terminal assumptions
//! - **Presentation**: returns data structures, not strings
//!
//! ## Testing Strategy
//!
//! API tests check that mutators reach the state and that queries dispatch to
//! the right command. The command and engine logic is tested where it lives.

use crate::commands;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::Record;
use crate::state::{ViewAction, ViewState};
use std::mem;
use std::path::Path;

pub struct PropdexApi {
    dataset: Dataset,
    state: ViewState,
}

impl PropdexApi {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            state: ViewState::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, action: &ViewAction) {
        self.state = mem::take(&mut self.state).apply(action);
    }

    pub fn set_exact_filter(&mut self, field: &str, value: &str) {
        self.dispatch(&ViewAction::SetExactFilter {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    pub fn set_substring_filter(&mut self, field: &str, text: &str) {
        self.dispatch(&ViewAction::SetSubstringFilter {
            field: field.to_string(),
            text: text.to_string(),
        });
    }

    pub fn set_sort_field(&mut self, field: Option<&str>) {
        self.dispatch(&ViewAction::SetSortField(field.map(str::to_string)));
    }

    pub fn toggle_sort_order(&mut self) {
        self.dispatch(&ViewAction::ToggleSortOrder);
    }

    pub fn clear_sort(&mut self) {
        self.dispatch(&ViewAction::ClearSort);
    }

    pub fn click_sort(&mut self, field: &str) {
        self.dispatch(&ViewAction::ClickSort(field.to_string()));
    }

    /// The derived sequence for the current state.
    pub fn visible(&self) -> Vec<&Record> {
        self.state.visible(&self.dataset)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.dataset, &self.state)
    }

    pub fn fields(&self) -> CmdResult {
        commands::fields::run(&self.dataset)
    }

    pub fn values(&self, field: &str) -> CmdResult {
        commands::values::run(&self.dataset, field)
    }

    pub fn show(&self, name: &str) -> CmdResult {
        commands::show::run(&self.dataset, name)
    }

    /// Config is independent of the loaded dataset, so it needs no instance.
    pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }

    /// Maps typed input to a dataset field name, falling back to the input
    /// itself (which the engine then treats as an unknown, inert field).
    pub fn resolve_field(&self, input: &str) -> String {
        self.dataset
            .resolve_field(input)
            .map(str::to_string)
            .unwrap_or_else(|| input.trim().to_string())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::state::SortOrder;
