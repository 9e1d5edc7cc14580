// crates/shared-kernel/src/value_objects/bounds.rs
use std::fmt;

use clamp_core::{ClampRange, clamp_between_opt};
use serde::{Deserialize, Serialize};

/// Independently optional lower and upper bounds.
///
/// A missing side imposes no restriction. No ordering between the two sides is
/// enforced; see [`Bounds::clamp`] for how inverted bounds resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub lower: Option<T>,
    pub upper: Option<T>,
}

impl<T> Bounds<T> {
    pub const fn new(lower: Option<T>, upper: Option<T>) -> Self {
        Self { lower, upper }
    }

    pub const fn unbounded() -> Self {
        Self { lower: None, upper: None }
    }

    pub const fn at_least(lower: T) -> Self {
        Self { lower: Some(lower), upper: None }
    }

    pub const fn at_most(upper: T) -> Self {
        Self { lower: None, upper: Some(upper) }
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: PartialOrd> Bounds<T> {
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.lower.as_ref().is_none_or(|m| value >= m) && self.upper.as_ref().is_none_or(|m| value <= m)
    }
}

impl<T: PartialOrd + Clone> Bounds<T> {
    /// Applies the upper bound, then the lower bound to the result.
    ///
    /// With `lower > upper` every value ends on `lower`.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        clamp_between_opt(value, self.lower.as_ref(), self.upper.as_ref())
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for Bounds<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        self.clamp(value)
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lower) = &self.lower {
            write!(f, "{lower}")?;
        }
        match &self.upper {
            Some(upper) => write!(f, "..={upper}"),
            None => f.write_str(".."),
        }
    }
}
