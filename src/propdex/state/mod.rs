//! # View-State Engine
//!
//! The working filter/sort state of a browsing session, as a plain value.
//!
//! [`ViewState`] is immutable from the caller's point of view: every transition
//! consumes the current value and returns the next one. A UI wraps it in
//! whatever reactivity it has (the CLI's browse loop simply stores the new value
//! and re-renders). The visible sequence is never stored here; it is derived on
//! demand by [`crate::view::compute_visible`] from the dataset plus this state.
//!
//! Transitions are available as methods and as [`ViewAction`] values for
//! event-driven callers:
//!
//! | Action | Effect |
//! |--------|--------|
//! | `SetExactFilter` | single-select value for a field, `""` clears it |
//! | `SetSubstringFilter` | replace the search text for a field |
//! | `SetSortField` | select a field (ascending if new), `None` clears |
//! | `ToggleSortOrder` | flip direction, no-op with no field selected |
//! | `ClearSort` | back to no field, ascending |
//! | `ClickSort` | toggle if already selected, else select ascending |

mod filter;
mod sort;

pub use filter::FilterState;
pub use sort::{SortOrder, SortState};

use crate::dataset::Dataset;
use crate::model::Record;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetExactFilter { field: String, value: String },
    SetSubstringFilter { field: String, text: String },
    SetSortField(Option<String>),
    ToggleSortOrder,
    ClearSort,
    ClickSort(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    filters: FilterState,
    sort: SortState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    #[must_use]
    pub fn set_exact_filter(self, field: &str, value: &str) -> Self {
        Self {
            filters: self.filters.with_exact(field, value),
            ..self
        }
    }

    #[must_use]
    pub fn set_substring_filter(self, field: &str, text: &str) -> Self {
        Self {
            filters: self.filters.with_substring(field, text),
            ..self
        }
    }

    #[must_use]
    pub fn set_sort_field(self, field: Option<&str>) -> Self {
        Self {
            sort: self.sort.with_field(field),
            ..self
        }
    }

    #[must_use]
    pub fn toggle_sort_order(self) -> Self {
        Self {
            sort: self.sort.toggled(),
            ..self
        }
    }

    #[must_use]
    pub fn clear_sort(self) -> Self {
        Self {
            sort: SortState::default(),
            ..self
        }
    }

    #[must_use]
    pub fn click_sort(self, field: &str) -> Self {
        Self {
            sort: self.sort.clicked(field),
            ..self
        }
    }

    /// Applies one UI event.
    #[must_use]
    pub fn apply(self, action: &ViewAction) -> Self {
        debug!(?action, "view state transition");
        match action {
            ViewAction::SetExactFilter { field, value } => self.set_exact_filter(field, value),
            ViewAction::SetSubstringFilter { field, text } => {
                self.set_substring_filter(field, text)
            }
            ViewAction::SetSortField(field) => self.set_sort_field(field.as_deref()),
            ViewAction::ToggleSortOrder => self.toggle_sort_order(),
            ViewAction::ClearSort => self.clear_sort(),
            ViewAction::ClickSort(field) => self.click_sort(field),
        }
    }

    /// The derived sequence for this state over `dataset`.
    pub fn visible<'d>(&self, dataset: &'d Dataset) -> Vec<&'d Record> {
        crate::view::compute_visible(dataset, &self.filters, &self.sort)
    }
}
