// crates/core/src/range.rs
use core::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use log::trace;

use crate::clamp::{clamp_between, clamp_between_opt};
use crate::step::Step;

/// A range that values can be clamped into.
///
/// Inclusive ranges clamp to `[start, end]`. Half-open ranges are only
/// available for [`Step`] types and clamp to `[start, end - 1]`; an empty
/// half-open range never restricts the value.
pub trait ClampRange<T> {
    /// `value` restricted to this range.
    fn clamp_value(&self, value: T) -> T;

    /// Clamps `element` into this range, keeping `None` as `None`.
    #[inline]
    fn clamp_element(&self, element: Option<T>) -> Option<T> {
        element.map(|element| self.clamp_value(element))
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeInclusive<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_between(value, self.start(), self.end())
    }
}

impl<T: Step + Clone> ClampRange<T> for Range<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_half_open(value, &self.start, &self.end)
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeFrom<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_between_opt(value, Some(&self.start), None)
    }
}

impl<T: PartialOrd + Clone> ClampRange<T> for RangeToInclusive<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        clamp_between_opt(value, None, Some(&self.end))
    }
}

impl<T: Step + Clone> ClampRange<T> for RangeTo<T> {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        match self.end.predecessor() {
            Some(last) => clamp_between_opt(value, None, Some(&last)),
            None => {
                trace!("range below the minimum value is empty; value left unchanged");
                value
            }
        }
    }
}

impl<T> ClampRange<T> for RangeFull {
    #[inline]
    fn clamp_value(&self, value: T) -> T {
        value
    }
}

/// Clamps into `[start, end)` by closing the range to `[start, end - 1]`.
///
/// `start == end` produces an inverted pair, which the closed clamp treats as
/// a no-op. An `end` without a predecessor can only bound an empty range.
pub fn clamp_half_open<T: Step + Clone>(value: T, start: &T, end: &T) -> T {
    match end.predecessor() {
        Some(last) => clamp_between(value, start, &last),
        None => {
            trace!("half-open range ends at the minimum value; value left unchanged");
            value
        }
    }
}
