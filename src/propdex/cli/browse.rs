//! # Browse Session
//!
//! `propdex browse` reads one command per line and keeps a view state alive
//! between them, the way a UI would while the user clicks filters and column
//! headers. Lines are split with shell quoting rules, so multi-word values can
//! be quoted: `filter name "Sword Dance"`.
//!
//! Every command that changes the view state re-renders the current view.

use super::commands::{render_current, AppContext};
use super::render::{render_fields, render_messages, render_text_list};
use propdex::api::CmdMessage;
use propdex::config::ViewMode;
use propdex::error::Result;
use propdex::state::ViewState;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "propdex> ";

const HELP: &[&str] = &[
    "filter FIELD [VALUE]   exact-match filter; no value clears it",
    "search FIELD [TEXT]    substring filter; no text clears it",
    "sort [FIELD]           sort ascending on FIELD; no field clears the sort",
    "click FIELD            column-header click: select, or flip direction",
    "toggle                 flip the sort direction",
    "clear-sort             back to dataset order",
    "view table|cards       switch the presentation",
    "state                  show active filters and sort",
    "fields                 list fields",
    "values FIELD           list the values of a field",
    "help                   this text",
    "quit                   leave (also: exit)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Filter { field: String, value: String },
    Search { field: String, text: String },
    Sort(Option<String>),
    Click(String),
    Toggle,
    ClearSort,
    View(ViewMode),
    State,
    Fields,
    Values(String),
    Help,
    Quit,
}

impl BrowseCommand {
    fn changes_view(&self) -> bool {
        matches!(
            self,
            BrowseCommand::Filter { .. }
                | BrowseCommand::Search { .. }
                | BrowseCommand::Sort(_)
                | BrowseCommand::Click(_)
                | BrowseCommand::Toggle
                | BrowseCommand::ClearSort
                | BrowseCommand::View(_)
        )
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let words = shell_words::split(line).map_err(|e| format!("Could not parse line: {}", e))?;
    let Some((command, args)) = words.split_first() else {
        return Ok(None);
    };

    let field_arg = |usage: &str| {
        args.first()
            .cloned()
            .ok_or_else(|| format!("Usage: {}", usage))
    };
    let rest = || args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();

    let parsed = match command.to_lowercase().as_str() {
        "filter" => BrowseCommand::Filter {
            field: field_arg("filter FIELD [VALUE]")?,
            value: rest(),
        },
        "search" => BrowseCommand::Search {
            field: field_arg("search FIELD [TEXT]")?,
            text: rest(),
        },
        "sort" => BrowseCommand::Sort((!args.is_empty()).then(|| args.join(" "))),
        "click" => BrowseCommand::Click(field_arg("click FIELD")?),
        "toggle" => BrowseCommand::Toggle,
        "clear-sort" => BrowseCommand::ClearSort,
        "view" => BrowseCommand::View(field_arg("view table|cards")?.parse()?),
        "state" => BrowseCommand::State,
        "fields" => BrowseCommand::Fields,
        "values" => BrowseCommand::Values(field_arg("values FIELD")?),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command '{}'. Type 'help' for commands.",
                other
            ))
        }
    };
    Ok(Some(parsed))
}

/// Human-readable summary of a view state, one line per constraint.
pub fn describe_state(state: &ViewState, mode: ViewMode) -> Vec<String> {
    let mut lines = vec![format!("view: {}", mode)];

    lines.push(match state.sort().field() {
        Some(field) => {
            let order = if state.sort().order().is_ascending() {
                "ascending"
            } else {
                "descending"
            };
            format!("sort: {} ({})", field, order)
        }
        None => "sort: none".to_string(),
    });

    for (field, values) in state.filters().exact() {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        lines.push(format!("filter: {} = {}", field, values.join(" | ")));
    }
    for (field, text) in state.filters().substring() {
        if !text.is_empty() {
            lines.push(format!("search: {} ~ {}", field, text));
        }
    }
    lines
}

pub(super) fn run_session<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    let mut mode = ctx.config.default_view;
    write_view(ctx, mode, out)?;

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write!(
                    out,
                    "{}",
                    render_messages(&[CmdMessage::error(e)], ctx.use_color)
                )?;
                continue;
            }
        };
        debug!(?command, "browse command");

        if command == BrowseCommand::Quit {
            break;
        }
        if let BrowseCommand::View(next) = command {
            mode = next;
        }
        let redraw = command.changes_view();
        execute(ctx, command, mode, out)?;
        if redraw {
            write_view(ctx, mode, out)?;
        }
    }
    Ok(())
}

fn execute<W: Write>(
    ctx: &mut AppContext,
    command: BrowseCommand,
    mode: ViewMode,
    out: &mut W,
) -> Result<()> {
    match command {
        BrowseCommand::Filter { field, value } => {
            let field = ctx.resolve_field(&field);
            ctx.api.set_exact_filter(&field, &value);
        }
        BrowseCommand::Search { field, text } => {
            let field = ctx.resolve_field(&field);
            ctx.api.set_substring_filter(&field, &text);
        }
        BrowseCommand::Sort(field) => {
            let field = field.map(|f| ctx.resolve_field(&f));
            ctx.api.set_sort_field(field.as_deref());
        }
        BrowseCommand::Click(field) => {
            let field = ctx.resolve_field(&field);
            ctx.api.click_sort(&field);
        }
        BrowseCommand::Toggle => ctx.api.toggle_sort_order(),
        BrowseCommand::ClearSort => ctx.api.clear_sort(),
        BrowseCommand::State => {
            let lines = describe_state(ctx.api.state(), mode);
            write!(out, "{}", render_text_list(&lines, "", ctx.use_color))?;
        }
        BrowseCommand::Fields => {
            let result = ctx.api.fields();
            write!(out, "{}", render_fields(&result.fields, ctx.use_color))?;
        }
        BrowseCommand::Values(field) => {
            let field = ctx.resolve_field(&field);
            let result = ctx.api.values(&field);
            if !result.values.is_empty() {
                write!(
                    out,
                    "{}",
                    render_text_list(&result.values, "No values.", ctx.use_color)
                )?;
            }
            write!(out, "{}", render_messages(&result.messages, ctx.use_color))?;
        }
        BrowseCommand::Help => {
            let lines: Vec<String> = HELP.iter().map(|line| line.to_string()).collect();
            write!(out, "{}", render_text_list(&lines, "", ctx.use_color))?;
        }
        BrowseCommand::View(_) | BrowseCommand::Quit => {}
    }
    Ok(())
}

fn write_view<W: Write>(ctx: &AppContext, mode: ViewMode, out: &mut W) -> Result<()> {
    let (stdout, stderr) = render_current(ctx, mode)?;
    write!(out, "{}", stdout)?;
    eprint!("{}", stderr);
    Ok(())
}
