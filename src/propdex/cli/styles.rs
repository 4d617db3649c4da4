//! Named terminal styles used by the templates' `style` filter.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is not registered, to catch template typos.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const SORTED_HEADER: &str = "sorted_header";
    pub const RULE: &str = "rule";
    pub const CELL: &str = "cell";
    pub const CARD_TITLE: &str = "card_title";
    pub const LABEL: &str = "label";
    pub const COST: &str = "cost";
    pub const LINK: &str = "link";
    pub const BADGE: &str = "badge";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static PROPDEX_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::SORTED_HEADER, Style::new().bold().cyan())
        .add(names::RULE, Style::new().color256(240))
        .add(names::CELL, Style::new())
        .add(names::CARD_TITLE, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().color256(245))
        .add(names::COST, Style::new().yellow())
        .add(names::LINK, Style::new().blue().italic())
        .add(names::BADGE, Style::new().black().on_cyan())
        .add(names::MUTED, Style::new().color256(245).italic())
        .add(names::INFO, Style::new().color256(245))
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});
