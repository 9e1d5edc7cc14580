// src/cli/mod.rs
mod args;
pub mod parsers;
mod value_enum;

pub use args::Args;
pub use parsers::RangeSpec;
pub use value_enum::{CliOutputFormat, CliValueKind};

use clamp_shared_kernel::{Bounds, ClampError, ClosedRange, ErrorContext, Result};

use crate::config::{ArgValue, ClampRequest, Config, Constraint, Request, ValueKind};

/// Convert parsed CLI arguments into a typed configuration.
///
/// # Errors
///
/// Returns `Err` when a value or bound does not parse for the selected kind,
/// when a closed range is inverted, or when an exclusive end is used with a
/// non-discrete kind.
pub fn build_config(args: &Args) -> Result<Config> {
    let kind = ValueKind::from(args.kind);
    let request = match kind {
        ValueKind::Int => ClampRequest::Int(make_request::<i64>(args)?),
        ValueKind::Float => ClampRequest::Float(make_request::<f64>(args)?),
        ValueKind::Char => ClampRequest::Char(make_request::<char>(args)?),
    };

    Ok(Config {
        request,
        format: args.format.into(),
        verbosity: args.verbose,
    })
}

fn make_request<T: ArgValue>(args: &Args) -> Result<Request<T>> {
    let value = parse_optional::<T>("VALUE", args.value.as_deref())?;
    let constraint = match &args.range {
        Some(spec) => make_range_constraint(spec)
            .with_context(|| format!("--range {spec} for {} values", T::KIND))?,
        None => {
            let lower = parse_optional::<T>("--lower", args.lower.as_deref())?;
            let upper = parse_optional::<T>("--upper", args.upper.as_deref())?;
            Constraint::bounds(Bounds::new(lower, upper))
        }
    };
    Ok(Request { value, constraint })
}

fn parse_optional<T: ArgValue>(flag: &str, raw: Option<&str>) -> Result<Option<T>> {
    raw.map(|raw| T::parse_arg(flag, raw)).transpose().map_err(ClampError::from)
}

fn make_range_constraint<T: ArgValue>(spec: &RangeSpec) -> Result<Constraint<T>> {
    let start = parse_optional::<T>("--range", spec.start.as_deref())?;
    let end = parse_optional::<T>("--range", spec.end.as_deref())?;

    let constraint = match (start, end, spec.inclusive) {
        (Some(lower), Some(upper), true) => Constraint::closed(ClosedRange::try_new(lower, upper)?),
        (start, Some(upper), true) => Constraint::bounds(Bounds::new(start, Some(upper))),
        (start, None, _) => Constraint::bounds(Bounds::new(start, None)),
        (start, Some(upper), false) => T::excluding_upper(start, upper)?,
    };
    Ok(constraint)
}
