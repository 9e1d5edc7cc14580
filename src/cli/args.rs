// src/cli/args.rs
use clap::Parser;

use super::{
    parsers::RangeSpec,
    value_enum::{CliOutputFormat, CliValueKind},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "clamp",
    version = crate::VERSION,
    about = "Clamp a value into optional bounds or a range"
)]
pub struct Args {
    /// Value to clamp. When omitted the result is absent as well.
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Kind of the value and its bounds
    #[arg(long, value_enum, default_value = "int")]
    pub kind: CliValueKind,

    /// Lower bound (optional, applied after the upper bound)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "range", help_heading = "Bounds")]
    pub lower: Option<String>,

    /// Upper bound (optional)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "range", help_heading = "Bounds")]
    pub upper: Option<String>,

    /// Range to clamp into: a..=b, a..b, a.., ..=b or ..b (exclusive ends need int or char).
    /// Bounds are trimmed, and a '.' char bound only works with ..=
    /// (e.g. '...=z')
    #[arg(long, allow_hyphen_values = true, help_heading = "Bounds")]
    pub range: Option<RangeSpec>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
