//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone files,
//! which are easier to edit and diff than string literals, and included here as
//! constants.
//!
//! Templates control their own line breaks with `-%}` whitespace trimming: a tag
//! ending in `-%}` swallows the newline that follows it, so every emitted line
//! break is visible in the template source. Width math (truncation, padding)
//! happens in Rust before the data reaches a template; templates pick styles
//! through the `style` filter.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const FIELDS_TEMPLATE: &str = include_str!("templates/fields.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
