// src/cli/parsers.rs
use std::{fmt::Display, str::FromStr};

use clamp_shared_kernel::{PresentationError, PresentationResult};

/// Range typed on the command line, kept textual until the value kind is known.
///
/// Accepts `a..=b`, `a..b`, `a..`, `..=b` and `..b`. Bounds are trimmed, so a
/// space cannot be a bound, and `.` can only be a bound in the `..=` forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<String>,
    pub end: Option<String>,
    pub inclusive: bool,
}

impl FromStr for RangeSpec {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let invalid = |reason: &str| PresentationError::InvalidRangeSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        // `..=` is matched first so a `.` bound still works in inclusive specs.
        let (start, end, inclusive) = match spec.split_once("..=") {
            Some((start, end)) => (start, end, true),
            None => {
                let (start, end) = spec.split_once("..").ok_or_else(|| invalid("missing '..'"))?;
                (start, end, false)
            }
        };

        let start = non_empty(start);
        let end = non_empty(end);
        if inclusive && end.is_none() {
            return Err(invalid("an inclusive range needs an upper bound"));
        }

        Ok(Self { start, end, inclusive })
    }
}

impl std::fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = if self.inclusive { "..=" } else { ".." };
        write!(f, "{}{op}{}", self.start.as_deref().unwrap_or(""), self.end.as_deref().unwrap_or(""))
    }
}

fn non_empty(part: &str) -> Option<String> {
    let part = part.trim();
    (!part.is_empty()).then(|| part.to_string())
}

/// Parse a number for `flag`, keeping the parser's message as the reason.
pub fn parse_number<T>(flag: &str, raw: &str) -> PresentationResult<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    let cleaned = raw.trim().replace('_', "");
    cleaned.parse::<T>().map_err(|err| PresentationError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    })
}

/// Parse a float for `flag`, rejecting NaN and infinities.
///
/// JSON has no encoding for non-finite numbers, and `null` already means an
/// absent value.
pub fn parse_finite(flag: &str, raw: &str) -> PresentationResult<f64> {
    let value: f64 = parse_number(flag, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: raw.to_string(),
            reason: "expected a finite number".to_string(),
        })
    }
}

/// Parse exactly one character for `flag`.
pub fn parse_char(flag: &str, raw: &str) -> PresentationResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: raw.to_string(),
            reason: "expected exactly one character".to_string(),
        }),
    }
}
