use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// Single-key sort selection. Default: no field, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    field: Option<String>,
    order: SortOrder,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }

    /// Selects a sort field.
    ///
    /// `None` clears the sort. A new field starts ascending; re-selecting the
    /// current field leaves the order alone.
    #[must_use]
    pub fn with_field(self, field: Option<&str>) -> Self {
        match field {
            None => Self::default(),
            Some(f) if self.field.as_deref() == Some(f) => self,
            Some(f) => Self {
                field: Some(f.to_string()),
                order: SortOrder::Ascending,
            },
        }
    }

    /// Flips the direction. No-op while no field is selected.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.field.is_none() {
            return self;
        }
        Self {
            order: self.order.toggled(),
            ..self
        }
    }

    /// Column-header behaviour: toggle when the field is already selected,
    /// otherwise select it ascending.
    #[must_use]
    pub fn clicked(self, field: &str) -> Self {
        if self.field.as_deref() == Some(field) {
            self.toggled()
        } else {
            self.with_field(Some(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_starts_ascending() {
        let state = SortState::new()
            .with_field(Some("Cost"))
            .toggled()
            .with_field(Some("Name"));

        assert_eq!(state.field(), Some("Name"));
        assert_eq!(state.order(), SortOrder::Ascending);
    }

    #[test]
    fn same_field_keeps_order() {
        let state = SortState::new()
            .with_field(Some("Cost"))
            .toggled()
            .with_field(Some("Cost"));

        assert_eq!(state.order(), SortOrder::Descending);
    }

    #[test]
    fn none_clears_and_resets_order() {
        let state = SortState::new()
            .with_field(Some("Cost"))
            .toggled()
            .with_field(None);

        assert_eq!(state, SortState::default());
    }

    #[test]
    fn toggle_without_field_is_noop() {
        let state = SortState::new().toggled();
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn click_selects_then_toggles() {
        let state = SortState::new().clicked("Cost");
        assert_eq!(state.field(), Some("Cost"));
        assert!(state.order().is_ascending());

        let state = state.clicked("Cost");
        assert_eq!(state.order(), SortOrder::Descending);

        let state = state.clicked("Name");
        assert_eq!(state.field(), Some("Name"));
        assert!(state.order().is_ascending());
    }
}
