// src/config.rs
use std::fmt;
use std::ops::RangeTo;

use clamp_core::ClampRange;
use clamp_shared_kernel::{
    Bounds, ClosedRange, DomainError, DomainResult, HalfOpenRange, PresentationResult,
};
use serde::Serialize;

use crate::app::ReportValue;
use crate::cli::parsers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Char,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

type BoxedRange<T> = Box<dyn ClampRange<T> + Send + Sync>;

/// A range of any supported shape, together with how it was written.
pub struct Constraint<T> {
    label: String,
    range: BoxedRange<T>,
}

impl<T> Constraint<T> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> &(dyn ClampRange<T> + Send + Sync) {
        self.range.as_ref()
    }
}

impl<T> Constraint<T>
where
    T: PartialOrd + Clone + fmt::Display + Send + Sync + 'static,
{
    pub fn bounds(bounds: Bounds<T>) -> Self {
        Self { label: bounds.to_string(), range: Box::new(bounds) }
    }

    pub fn closed(range: ClosedRange<T>) -> Self {
        Self { label: range.to_string(), range: Box::new(range) }
    }
}

impl<T> fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint").field("label", &self.label).finish_non_exhaustive()
    }
}

/// A value kind the CLI can parse and clamp.
pub trait ArgValue: PartialOrd + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    const KIND: ValueKind;

    /// # Errors
    ///
    /// Returns [`clamp_shared_kernel::PresentationError::InvalidValue`] when
    /// `raw` does not parse as this kind.
    fn parse_arg(flag: &str, raw: &str) -> PresentationResult<Self>;

    /// Constraint for a range with an exclusive upper end (`a..b` or `..b`).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotDiscrete`] for kinds without a step, and
    /// [`DomainError::InvalidRange`] when `lower > upper`.
    fn excluding_upper(lower: Option<Self>, upper: Self) -> DomainResult<Constraint<Self>>;

    fn into_report(self) -> ReportValue;
}

fn discrete_excluding_upper<T>(lower: Option<T>, upper: T) -> DomainResult<Constraint<T>>
where
    T: clamp_core::Step + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    match lower {
        Some(lower) => {
            let range = HalfOpenRange::try_new(lower, upper)?;
            Ok(Constraint { label: range.to_string(), range: Box::new(range) })
        }
        None => Ok(Constraint { label: format!("..{upper}"), range: Box::new(RangeTo { end: upper }) }),
    }
}

impl ArgValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn parse_arg(flag: &str, raw: &str) -> PresentationResult<Self> {
        parsers::parse_number(flag, raw)
    }

    fn excluding_upper(lower: Option<Self>, upper: Self) -> DomainResult<Constraint<Self>> {
        discrete_excluding_upper(lower, upper)
    }

    fn into_report(self) -> ReportValue {
        ReportValue::Int(self)
    }
}

impl ArgValue for char {
    const KIND: ValueKind = ValueKind::Char;

    fn parse_arg(flag: &str, raw: &str) -> PresentationResult<Self> {
        parsers::parse_char(flag, raw)
    }

    fn excluding_upper(lower: Option<Self>, upper: Self) -> DomainResult<Constraint<Self>> {
        discrete_excluding_upper(lower, upper)
    }

    fn into_report(self) -> ReportValue {
        ReportValue::Char(self)
    }
}

impl ArgValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn parse_arg(flag: &str, raw: &str) -> PresentationResult<Self> {
        parsers::parse_finite(flag, raw)
    }

    fn excluding_upper(_lower: Option<Self>, _upper: Self) -> DomainResult<Constraint<Self>> {
        Err(DomainError::NotDiscrete { kind: Self::KIND.to_string() })
    }

    fn into_report(self) -> ReportValue {
        ReportValue::Float(self)
    }
}

/// One clamp to perform: an optional value and the constraint to apply.
#[derive(Debug)]
pub struct Request<T> {
    pub value: Option<T>,
    pub constraint: Constraint<T>,
}

#[derive(Debug)]
pub enum ClampRequest {
    Int(Request<i64>),
    Float(Request<f64>),
    Char(Request<char>),
}

impl ClampRequest {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Char(_) => ValueKind::Char,
        }
    }

    pub fn constraint_label(&self) -> &str {
        match self {
            Self::Int(request) => request.constraint.label(),
            Self::Float(request) => request.constraint.label(),
            Self::Char(request) => request.constraint.label(),
        }
    }
}

/// Fully resolved CLI configuration.
#[derive(Debug)]
pub struct Config {
    pub request: ClampRequest,
    pub format: OutputFormat,
    pub verbosity: u8,
}
