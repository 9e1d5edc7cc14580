// crates/shared-kernel/src/value_objects/ranges.rs
use std::{
    fmt,
    ops::{Range, RangeInclusive},
};

use clamp_core::{ClampRange, Step, clamp_between, clamp_half_open};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Unvalidated wire form of a range; deserialization goes through this first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawRange<T> {
    pub lower: T,
    pub upper: T,
}

fn ensure_ordered<T: PartialOrd + fmt::Debug>(lower: &T, upper: &T) -> DomainResult<()> {
    if lower <= upper {
        Ok(())
    } else {
        Err(DomainError::InvalidRange {
            lower: format!("{lower:?}"),
            upper: format!("{upper:?}"),
        })
    }
}

/// Inclusive range `[lower, upper]`; `lower <= upper` holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + std::fmt::Debug")
)]
pub struct ClosedRange<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + fmt::Debug> ClosedRange<T> {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `lower > upper` or the bounds
    /// are unordered.
    pub fn try_new(lower: T, upper: T) -> DomainResult<Self> {
        ensure_ordered(&lower, &upper)?;
        Ok(Self { lower, upper })
    }
}

impl<T> ClosedRange<T> {
    #[inline]
    pub const fn lower(&self) -> &T {
        &self.lower
    }

    #[inline]
    pub const fn upper(&self) -> &T {
        &self.upper
    }

    pub fn into_inner(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: PartialOrd> ClosedRange<T> {
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.lower && *value <= self.upper
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for ClosedRange<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_between(value, &self.lower, &self.upper)
    }
}

impl<T: PartialOrd + fmt::Debug> TryFrom<RawRange<T>> for ClosedRange<T> {
    type Error = DomainError;

    fn try_from(raw: RawRange<T>) -> DomainResult<Self> {
        Self::try_new(raw.lower, raw.upper)
    }
}

impl<T: PartialOrd + fmt::Debug> TryFrom<RangeInclusive<T>> for ClosedRange<T> {
    type Error = DomainError;

    fn try_from(range: RangeInclusive<T>) -> DomainResult<Self> {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper)
    }
}

impl<T> From<ClosedRange<T>> for RangeInclusive<T> {
    fn from(range: ClosedRange<T>) -> Self {
        range.lower..=range.upper
    }
}

impl<T: fmt::Display> fmt::Display for ClosedRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lower, self.upper)
    }
}

/// Half-open range `[lower, upper)` over a discrete type.
///
/// `lower == upper` is allowed and denotes an empty range, which never
/// restricts a clamped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + std::fmt::Debug")
)]
pub struct HalfOpenRange<T> {
    lower: T,
    upper: T,
}

impl<T: PartialOrd + fmt::Debug> HalfOpenRange<T> {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `lower > upper` or the bounds
    /// are unordered.
    pub fn try_new(lower: T, upper: T) -> DomainResult<Self> {
        ensure_ordered(&lower, &upper)?;
        Ok(Self { lower, upper })
    }
}

impl<T> HalfOpenRange<T> {
    #[inline]
    pub const fn lower(&self) -> &T {
        &self.lower
    }

    /// The excluded end.
    #[inline]
    pub const fn upper(&self) -> &T {
        &self.upper
    }

    pub fn into_inner(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: PartialOrd> HalfOpenRange<T> {
    #[inline]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_empty(&self) -> bool {
        !(self.lower < self.upper)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.lower && *value < self.upper
    }
}

impl<T: Step + Clone> HalfOpenRange<T> {
    /// The equivalent inclusive range, or `None` when this range is empty.
    pub fn to_closed(&self) -> Option<ClosedRange<T>> {
        if self.is_empty() {
            return None;
        }
        self.upper.predecessor().map(|last| ClosedRange { lower: self.lower.clone(), upper: last })
    }
}

impl<T: Step + Clone> ClampRange<T> for HalfOpenRange<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_half_open(value, &self.lower, &self.upper)
    }
}

impl<T: PartialOrd + fmt::Debug> TryFrom<RawRange<T>> for HalfOpenRange<T> {
    type Error = DomainError;

    fn try_from(raw: RawRange<T>) -> DomainResult<Self> {
        Self::try_new(raw.lower, raw.upper)
    }
}

impl<T: PartialOrd + fmt::Debug> TryFrom<Range<T>> for HalfOpenRange<T> {
    type Error = DomainError;

    fn try_from(range: Range<T>) -> DomainResult<Self> {
        Self::try_new(range.start, range.end)
    }
}

impl<T> From<HalfOpenRange<T>> for Range<T> {
    fn from(range: HalfOpenRange<T>) -> Self {
        range.lower..range.upper
    }
}

impl<T: fmt::Display> fmt::Display for HalfOpenRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lower, self.upper)
    }
}
