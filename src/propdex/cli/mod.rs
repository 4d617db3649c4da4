//! # CLI Behavior
//!
//! This is **one possible UI client** for propdex, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Naked Execution (`propdex`)
//!
//! Running `propdex` with no arguments shows every property in the configured
//! default view (`table` unless `propdex config view cards` was set).
//!
//! ## One-shot vs. Browse
//!
//! `table` and `cards` build a view state from their flags, render it once and
//! exit. `browse` keeps the state between input lines, so filters and sorts
//! accumulate the way they would in a UI:
//!
//! ```text
//! propdex> filter weapon true
//! propdex> search name sw
//! propdex> click cost
//! ```
//!
//! Field names are matched exactly, then case-insensitively, then by short alias
//! (`cost`, `grade`, `weapon`, ...). A name that matches nothing is kept as
//! typed: its filter matches no record and its sort changes nothing, and the
//! CLI says so.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `browse`: Line parser and loop for the interactive session
//! - `render`: Output formatting (tables, cards, lists, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates
//! - `logging`: `tracing` subscriber setup

mod browse;
mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
