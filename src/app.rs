// src/app.rs
use std::{fmt, io::Write};

use clamp_core::clamp_to;
use clamp_shared_kernel::Result;
use log::{debug, info};
use serde::Serialize;

use crate::config::{ArgValue, ClampRequest, Config, OutputFormat, Request, ValueKind};

/// A clamped value of whichever kind was requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Int(i64),
    Float(f64),
    Char(char),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
        }
    }
}

/// Outcome of one CLI clamp; `None` means the value was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: ValueKind,
    pub input: Option<ReportValue>,
    pub output: Option<ReportValue>,
    pub constraint: String,
}

pub fn run(config: &Config) -> Report {
    debug!(
        "resolved {} request, constraint {}",
        config.request.kind(),
        config.request.constraint_label()
    );
    match &config.request {
        ClampRequest::Int(request) => clamp_request(request),
        ClampRequest::Float(request) => clamp_request(request),
        ClampRequest::Char(request) => clamp_request(request),
    }
}

fn clamp_request<T: ArgValue>(request: &Request<T>) -> Report {
    let output = clamp_to(request.value.clone(), Some(request.constraint.range()));

    match (&request.value, &output) {
        (Some(input), Some(output)) if input != output => {
            info!("clamped {input} to {output} within {}", request.constraint.label());
        }
        (None, _) => debug!("no value given; result is absent"),
        _ => debug!("value already satisfies {}", request.constraint.label()),
    }

    Report {
        kind: T::KIND,
        input: request.value.clone().map(ArgValue::into_report),
        output: output.map(ArgValue::into_report),
        constraint: request.constraint.label().to_string(),
    }
}

/// Write `report` to `out` in the requested format.
///
/// # Errors
///
/// Returns an output error when writing or JSON serialization fails.
pub fn render<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => match report.output {
            Some(value) => writeln!(out, "{value}")?,
            None => writeln!(out, "none")?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
