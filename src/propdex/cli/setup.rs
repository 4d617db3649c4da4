use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propdex", bin_name = "propdex", version)]
#[command(about = "Browse, filter and sort game-item properties", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset to load (a JSON array of property records)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Term,
        global = true,
        help_heading = "Options"
    )]
    pub output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled tables and cards
    Term,
    /// Machine-readable JSON on stdout
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show properties as a table (the default)
    Table(ViewArgs),

    /// Show properties as cards
    Cards(ViewArgs),

    /// List the dataset's fields with their category and filter control
    Fields,

    /// List the distinct values a field takes (its dropdown options)
    Values {
        /// Field name or short alias (e.g. "grade")
        field: String,
    },

    /// Show the card for one property
    Show {
        /// Property name, case-insensitive
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Interactive session: filter, sort and switch views line by line
    Browse,

    /// Show or set configuration (data-path, view, cell-width)
    Config {
        /// Config key
        key: Option<String>,
        /// New value
        value: Option<String>,
    },
}

/// Filter and sort options shared by the table and card views.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewArgs {
    /// Exact-match filter (repeatable)
    #[arg(long = "filter", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub filters: Vec<(String, String)>,

    /// Case-insensitive substring filter (repeatable)
    #[arg(long = "search", value_name = "FIELD=TEXT", value_parser = parse_assignment)]
    pub searches: Vec<(String, String)>,

    /// Sort on this field
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

/// Splits `FIELD=VALUE` at the first `=`, so values may contain `=` too.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected FIELD=VALUE, got '{}'", s)),
    }
}
