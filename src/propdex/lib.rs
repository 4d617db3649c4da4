//! # Propdex Architecture
//!
//! Propdex browses a read-only collection of game-item properties: filter them by
//! exact value or by substring, sort them on one field, and present them as a
//! table or as cards. The library owns the data and the view state; the CLI is
//! just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables/cards, runs `browse`    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the dataset and the current view state              │
//! │  - Applies view transitions, dispatches to commands         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Shapes results and user-facing messages                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View-State Engine (state/, view.rs)                        │
//! │  - Immutable filter/sort state and pure transitions         │
//! │  - Derives the visible sequence from dataset + state        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (dataset.rs, model.rs, schema.rs)                     │
//! │  - Loads the JSON record array once, never mutated after    │
//! │  - Field categories and per-category sort keys              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the Visible Sequence is Derived
//!
//! Nothing stores "the filtered list". Every query recomputes it from the
//! dataset and a [`state::ViewState`] value, so it cannot go stale and the
//! dataset's own order is always the tie-breaker for sorting.
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, and never assumes a terminal. Diagnostics go through `tracing`.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`state/`, `view.rs`): unit tests plus property tests in
//!    `tests/view_properties.rs`.
//! 2. **Commands** (`commands/*.rs`): result shaping and messages.
//! 3. **API** (`api.rs`): state wiring and dispatch.
//! 4. **CLI** (`cli/` + thin `main.rs`): argument parsing, browse-line parsing,
//!    rendering, and binary tests in `tests/cli.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Result shaping for each command
//! - [`state`]: Filter/sort state and its transitions
//! - [`view`]: Derivation of the visible sequence
//! - [`dataset`]: Loading and querying the record collection
//! - [`model`]: Records and field values
//! - [`schema`]: Field categories, filter controls, sort keys
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, templated rendering, logging setup and the browse
//!   loop for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod schema;
pub mod state;
pub mod view;
