//! # CLI Layer
//!
//! Dispatch for the `propdex` binary. The CLI layer is the **only** place in the
//! codebase that knows about stdout/stderr, turns arguments into API calls, and
//! formats output for human consumption.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads config and dataset, builds `AppContext`
//! - `handle_*()`: Per-command handlers that call the API and print output
//! - `render_current()`: The current view as text, shared with `browse`
//!
//! With `--output json`, data goes to stdout as JSON and messages go to stderr,
//! so the output can be piped.

use super::browse;
use super::logging::{init_logging, LogConfig};
use super::render::{
    render_cards, render_fields, render_messages, render_table, render_text_list,
};
use super::setup::{Cli, Commands, OutputFormat, ViewArgs};
use clap::Parser;
use propdex::api::{CmdMessage, ConfigAction, PropdexApi};
use propdex::config::{self, PropdexConfig, ViewMode};
use propdex::dataset::Dataset;
use propdex::error::Result;
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub(super) struct AppContext {
    pub(super) api: PropdexApi,
    pub(super) config: PropdexConfig,
    pub(super) output: OutputFormat,
    pub(super) use_color: Option<bool>,
}

impl AppContext {
    /// Maps typed input to a dataset field, warning when nothing matches.
    pub(super) fn resolve_field(&self, input: &str) -> String {
        let field = self.api.resolve_field(input);
        if !self.api.dataset().has_field(&field) {
            warn!(field = %input, "no such field in dataset");
        }
        field
    }
}

pub fn run() -> Result<()> {
    let Cli {
        command,
        data,
        verbose,
        no_color,
        output,
    } = Cli::parse();

    init_logging(&LogConfig::from_verbosity(verbose).with_ansi(!no_color));
    let use_color = if no_color { Some(false) } else { None };
    let config_dir = config::config_dir()?;

    let init = || init_context(&config_dir, data.clone(), output, use_color);

    match command {
        Some(Commands::Config { key, value }) => {
            handle_config(&config_dir, key, value, output, use_color)
        }
        None => {
            let mut ctx = init()?;
            let mode = ctx.config.default_view;
            handle_view(&mut ctx, mode, ViewArgs::default())
        }
        Some(Commands::Table(args)) => handle_view(&mut init()?, ViewMode::Table, args),
        Some(Commands::Cards(args)) => handle_view(&mut init()?, ViewMode::Cards, args),
        Some(Commands::Fields) => handle_fields(&init()?),
        Some(Commands::Values { field }) => handle_values(&init()?, &field),
        Some(Commands::Show { name }) => handle_show(&init()?, &name.join(" ")),
        Some(Commands::Browse) => handle_browse(&mut init()?),
    }
}

fn init_context(
    config_dir: &Path,
    data: Option<PathBuf>,
    output: OutputFormat,
    use_color: Option<bool>,
) -> Result<AppContext> {
    let config = PropdexConfig::load(config_dir)?;
    info!(dir = %config_dir.display(), "loaded config");

    let dataset = match data.or_else(|| config.data_path.clone()) {
        Some(path) => {
            debug!(path = %path.display(), "loading dataset from file");
            Dataset::from_path(&path)?
        }
        None => {
            debug!("loading bundled dataset");
            Dataset::bundled()?
        }
    };

    Ok(AppContext {
        api: PropdexApi::new(dataset),
        config,
        output,
        use_color,
    })
}

/// Applies `--filter`, `--search`, `--sort` and `--desc` to the held view state.
pub(super) fn apply_view_args(ctx: &mut AppContext, args: &ViewArgs) {
    for (field, value) in &args.filters {
        let field = ctx.resolve_field(field);
        ctx.api.set_exact_filter(&field, value);
    }
    for (field, text) in &args.searches {
        let field = ctx.resolve_field(field);
        ctx.api.set_substring_filter(&field, text);
    }
    if let Some(sort) = &args.sort {
        let field = ctx.resolve_field(sort);
        ctx.api.set_sort_field(Some(&field));
        if args.desc {
            ctx.api.toggle_sort_order();
        }
    }
}

/// The current view rendered for the selected output format, followed by the
/// list messages. Returns `(stdout, stderr)` text.
pub(super) fn render_current(ctx: &AppContext, mode: ViewMode) -> Result<(String, String)> {
    let result = ctx.api.list();
    match ctx.output {
        OutputFormat::Json => Ok((
            to_json(&result.listed_records)?,
            render_messages(&result.messages, Some(false)),
        )),
        OutputFormat::Term => {
            let body = match mode {
                ViewMode::Table => render_table(
                    &result.listed_records,
                    &ctx.api.dataset().field_names(),
                    ctx.api.state().sort(),
                    ctx.config.cell_width,
                    ctx.use_color,
                ),
                ViewMode::Cards => render_cards(&result.listed_records, ctx.use_color),
            };
            Ok((
                body + &render_messages(&result.messages, ctx.use_color),
                String::new(),
            ))
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn print_output(stdout: &str, stderr: &str) {
    print!("{}", stdout);
    eprint!("{}", stderr);
}

/// Prints messages where the output format wants them.
fn print_messages(output: OutputFormat, messages: &[CmdMessage], use_color: Option<bool>) {
    match output {
        OutputFormat::Term => print!("{}", render_messages(messages, use_color)),
        OutputFormat::Json => eprint!("{}", render_messages(messages, Some(false))),
    }
}

fn handle_view(ctx: &mut AppContext, mode: ViewMode, args: ViewArgs) -> Result<()> {
    apply_view_args(ctx, &args);
    let (stdout, stderr) = render_current(ctx, mode)?;
    print_output(&stdout, &stderr);
    Ok(())
}

fn handle_fields(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.fields();
    match ctx.output {
        OutputFormat::Json => print!("{}", to_json(&result.fields)?),
        OutputFormat::Term => print!("{}", render_fields(&result.fields, ctx.use_color)),
    }
    print_messages(ctx.output, &result.messages, ctx.use_color);
    Ok(())
}

fn handle_values(ctx: &AppContext, field: &str) -> Result<()> {
    let field = ctx.resolve_field(field);
    let result = ctx.api.values(&field);
    match ctx.output {
        OutputFormat::Json => print!("{}", to_json(&result.values)?),
        OutputFormat::Term if result.messages.is_empty() || !result.values.is_empty() => {
            print!("{}", render_text_list(&result.values, "No values.", ctx.use_color))
        }
        OutputFormat::Term => {}
    }
    print_messages(ctx.output, &result.messages, ctx.use_color);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show(name);
    match ctx.output {
        OutputFormat::Json => print!("{}", to_json(&result.listed_records)?),
        OutputFormat::Term if !result.listed_records.is_empty() => {
            print!("{}", render_cards(&result.listed_records, ctx.use_color))
        }
        OutputFormat::Term => {}
    }
    print_messages(ctx.output, &result.messages, ctx.use_color);
    Ok(())
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    browse::run_session(ctx, stdin.lock(), &mut stdout, interactive)
}

fn handle_config(
    config_dir: &Path,
    key: Option<String>,
    value: Option<String>,
    output: OutputFormat,
    use_color: Option<bool>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = PropdexApi::config(config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            match output {
                OutputFormat::Json => print!("{}", to_json(config)?),
                OutputFormat::Term => {
                    let lines: Vec<String> = config
                        .list_all()
                        .into_iter()
                        .map(|(k, v)| format!("{} = {}", k, v))
                        .collect();
                    print!(
                        "{}",
                        render_text_list(&lines, "No configuration values.", use_color)
                    );
                }
            }
        }
    }
    print_messages(output, &result.messages, use_color);
    Ok(())
}
