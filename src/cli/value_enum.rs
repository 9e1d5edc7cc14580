use clap::ValueEnum;

use crate::config::{OutputFormat, ValueKind};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliValueKind {
    Int,
    Float,
    Char,
}

impl From<CliValueKind> for ValueKind {
    fn from(value: CliValueKind) -> Self {
        match value {
            CliValueKind::Int => ValueKind::Int,
            CliValueKind::Float => ValueKind::Float,
            CliValueKind::Char => ValueKind::Char,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
