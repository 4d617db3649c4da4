//! # Rendering Module
//!
//! Turns command results into terminal text through the templates in
//! [`super::templates`], styled by the `style` filter and [`PROPDEX_THEME`].
//!
//! Layout calculations (truncation, padding, column widths) stay in Rust because
//! they need Unicode-aware widths. Templates handle line structure and style
//! selection. Every `render_*` function takes `use_color: Option<bool>`: `None`
//! detects whether stdout supports color, `Some(_)` forces the choice (the
//! `--no-color` flag, and tests).
//!
//! A template failure never fails the command; each renderer falls back to
//! unstyled plain text.

use super::styles::{names, PROPDEX_THEME};
use super::templates::{
    CARDS_TEMPLATE, FIELDS_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use console::Term;
use minijinja::{Environment, Value};
use propdex::api::{CmdMessage, MessageLevel};
use propdex::model::{fields, LinkedItem, Record};
use propdex::schema::{FieldKind, FieldSpec, FilterControl};
use propdex::state::SortState;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_MESSAGE: &str = "No properties match the current filters.";
pub const ASCENDING_MARKER: &str = "▲";
pub const DESCENDING_MARKER: &str = "▼";
const COLUMN_GAP: &str = "  ";
const RULE_CHAR: &str = "─";

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    header: Vec<CellData>,
    rows: Vec<Vec<CellData>>,
    rule: String,
    gap: &'static str,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct CardData {
    name: String,
    cost: Option<String>,
    description: String,
    fusion: Option<String>,
    items: Vec<LinkedItem>,
    badges: Vec<String>,
}

#[derive(Serialize)]
struct CardsData {
    cards: Vec<CardData>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct FieldLine {
    name: String,
    kind: &'static str,
    control: &'static str,
}

#[derive(Serialize)]
struct FieldsData {
    fields: Vec<FieldLine>,
    gap: &'static str,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

fn render_template<T: Serialize>(
    name: &str,
    source: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, style: String| -> String {
        PROPDEX_THEME.apply(&style, &value.to_string(), use_color)
    });
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

/// Renders records as a table with one column per field.
///
/// The sorted column's header carries a direction marker. Every cell, header
/// included, is truncated and padded to `cell_width` display columns.
pub fn render_table(
    records: &[Record],
    columns: &[&str],
    sort: &SortState,
    cell_width: usize,
    use_color: Option<bool>,
) -> String {
    let header: Vec<CellData> = columns
        .iter()
        .map(|field| header_cell(field, sort, cell_width))
        .collect();
    let rows: Vec<Vec<CellData>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|field| CellData {
                    text: fit_to_width(&single_line(&record.text(field)), cell_width),
                    style: names::CELL,
                })
                .collect()
        })
        .collect();
    let rule_width =
        columns.len() * cell_width + columns.len().saturating_sub(1) * COLUMN_GAP.width();

    let data = TableData {
        header,
        rows,
        rule: RULE_CHAR.repeat(rule_width),
        gap: COLUMN_GAP,
        empty: records.is_empty(),
        empty_message: EMPTY_MESSAGE,
    };

    render_template("table", TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| plain_table(&data))
}

fn header_cell(field: &str, sort: &SortState, cell_width: usize) -> CellData {
    if sort.field() != Some(field) {
        return CellData {
            text: fit_to_width(field, cell_width),
            style: names::HEADER,
        };
    }
    let marker = if sort.order().is_ascending() {
        ASCENDING_MARKER
    } else {
        DESCENDING_MARKER
    };
    let label = truncate_to_width(field, cell_width.saturating_sub(marker.width() + 1));
    CellData {
        text: fit_to_width(&format!("{} {}", label, marker), cell_width),
        style: names::SORTED_HEADER,
    }
}

fn plain_table(data: &TableData) -> String {
    if data.empty {
        return format!("{}\n", data.empty_message);
    }
    std::iter::once(&data.header)
        .chain(data.rows.iter())
        .map(|cells| {
            let texts: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
            format!("{}\n", texts.join(data.gap))
        })
        .collect()
}

/// Renders each record as a card: name and cost, description, fusion, linked
/// items and one badge per true flag.
pub fn render_cards(records: &[Record], use_color: Option<bool>) -> String {
    let cards: Vec<CardData> = records.iter().map(card_data).collect();
    let data = CardsData {
        empty: cards.is_empty(),
        cards,
        empty_message: EMPTY_MESSAGE,
    };

    render_template("cards", CARDS_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        if data.empty {
            return format!("{}\n", EMPTY_MESSAGE);
        }
        data.cards
            .iter()
            .map(|card| format!("{}\n{}\n", card.name, card.description))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn card_data(record: &Record) -> CardData {
    let non_empty = |field: &str| {
        let text = record.text(field);
        (!text.is_empty()).then(|| text.into_owned())
    };

    CardData {
        name: record.name().into_owned(),
        cost: non_empty(fields::COST).map(|cost| format!("Cost {}", cost)),
        description: record.text(fields::DESCRIPTION).into_owned(),
        fusion: non_empty(fields::FUSION),
        items: record
            .get(fields::ITEMS)
            .and_then(|value| value.as_links())
            .map(<[LinkedItem]>::to_vec)
            .unwrap_or_default(),
        badges: fields::FLAGS
            .iter()
            .filter(|flag| record.flag(flag))
            .map(|flag| format!(" {} ", flag))
            .collect(),
    }
}

pub fn render_fields(specs: &[FieldSpec], use_color: Option<bool>) -> String {
    let name_width = specs.iter().map(|s| s.name.width()).max().unwrap_or(0);
    let data = FieldsData {
        fields: specs
            .iter()
            .map(|spec| FieldLine {
                name: fit_to_width(&spec.name, name_width),
                kind: kind_label(spec.kind),
                control: control_label(spec.control),
            })
            .collect(),
        gap: COLUMN_GAP,
        empty_message: "No fields.",
    };

    render_template("fields", FIELDS_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        data.fields
            .iter()
            .map(|f| format!("{}  {}  {}\n", f.name, f.kind, f.control))
            .collect()
    })
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Numeric => "numeric",
        FieldKind::Ranked => "ranked",
        FieldKind::Flag => "flag",
        FieldKind::Links => "links",
    }
}

fn control_label(control: FilterControl) -> &'static str {
    match control {
        FilterControl::Substring => "search",
        FilterControl::Choice => "choice",
        FilterControl::Flag => "any/true/false",
    }
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: Option<bool>) -> String {
    let data = TextListData {
        lines,
        empty_message,
    };

    render_template("text_list", TEXT_LIST_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        if lines.is_empty() {
            format!("{}\n", empty_message)
        } else {
            lines.iter().map(|l| format!("{}\n", l)).collect()
        }
    })
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: &msg.content,
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages", MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn single_line(text: &str) -> String {
    text.replace(['\n', '\r', '\t'], " ")
}

/// Cuts `s` to at most `max_width` display columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn fit_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}
