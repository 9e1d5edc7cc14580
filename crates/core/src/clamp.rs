// crates/core/src/clamp.rs
use log::trace;

use crate::range::ClampRange;

/// Which candidate a clamp settles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    Value,
    Lower,
    Upper,
}

/// Closed-bound resolution. Inverted or unordered bounds resolve to the value.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn resolve<T: PartialOrd + ?Sized>(value: &T, lower: &T, upper: &T) -> Resolution {
    if !(upper >= lower) {
        trace!("clamp bounds are inverted or unordered; value left unchanged");
        return Resolution::Value;
    }

    if value > upper {
        Resolution::Upper
    } else if value < lower {
        Resolution::Lower
    } else {
        Resolution::Value
    }
}

/// Optional-bound resolution.
///
/// The upper bound is applied first and overwrites the working value; the lower
/// bound is then tested against that working value. There is no `lower <= upper`
/// check, so inverted bounds always end on `lower`.
#[inline]
pub(crate) fn resolve_opt<T: PartialOrd + ?Sized>(value: &T, lower: Option<&T>, upper: Option<&T>) -> Resolution {
    let mut resolution = Resolution::Value;
    let mut working = value;

    if let Some(upper) = upper
        && working > upper
    {
        resolution = Resolution::Upper;
        working = upper;
    }

    if let Some(lower) = lower
        && working < lower
    {
        resolution = Resolution::Lower;
    }

    resolution
}

/// Clamps an owned value against borrowed bounds, cloning a bound only when it wins.
#[inline]
pub fn clamp_between<T: PartialOrd + Clone>(value: T, lower: &T, upper: &T) -> T {
    match resolve(&value, lower, upper) {
        Resolution::Value => value,
        Resolution::Lower => lower.clone(),
        Resolution::Upper => upper.clone(),
    }
}

/// Optional-bound counterpart of [`clamp_between`].
#[inline]
pub fn clamp_between_opt<T: PartialOrd + Clone>(value: T, lower: Option<&T>, upper: Option<&T>) -> T {
    match (resolve_opt(&value, lower, upper), lower, upper) {
        (Resolution::Lower, Some(lower), _) => lower.clone(),
        (Resolution::Upper, _, Some(upper)) => upper.clone(),
        _ => value,
    }
}

/// Clamping for any partially ordered type.
///
/// The `*_assign` methods write the result of their pure counterpart back into
/// `self` and carry no extra semantics.
pub trait Clamp: PartialOrd + Sized {
    /// `self` restricted to `[lower, upper]`.
    ///
    /// When `upper < lower` (or the bounds are unordered, e.g. NaN) the bounds
    /// are degenerate and `self` is returned unchanged; they are never swapped.
    #[must_use]
    #[inline]
    fn clamped(self, lower: Self, upper: Self) -> Self {
        match resolve(&self, &lower, &upper) {
            Resolution::Value => self,
            Resolution::Lower => lower,
            Resolution::Upper => upper,
        }
    }

    /// `self` restricted by each bound that is present.
    ///
    /// Bounds are applied independently, upper first, without checking that
    /// `lower <= upper`. With both bounds absent this is the identity.
    #[must_use]
    #[inline]
    fn clamped_opt(self, lower: Option<Self>, upper: Option<Self>) -> Self {
        match resolve_opt(&self, lower.as_ref(), upper.as_ref()) {
            Resolution::Lower => lower.unwrap_or(self),
            Resolution::Upper => upper.unwrap_or(self),
            Resolution::Value => self,
        }
    }

    /// `self` restricted to `range`, or unchanged when there is no range.
    #[must_use]
    #[inline]
    fn clamped_to<R>(self, range: Option<&R>) -> Self
    where
        R: ClampRange<Self> + ?Sized,
    {
        match range {
            Some(range) => range.clamp_value(self),
            None => self,
        }
    }

    #[inline]
    fn clamp_assign(&mut self, lower: Self, upper: Self) {
        match resolve(&*self, &lower, &upper) {
            Resolution::Value => {}
            Resolution::Lower => *self = lower,
            Resolution::Upper => *self = upper,
        }
    }

    #[inline]
    fn clamp_assign_opt(&mut self, lower: Option<Self>, upper: Option<Self>) {
        let resolution = resolve_opt(&*self, lower.as_ref(), upper.as_ref());
        match (resolution, lower, upper) {
            (Resolution::Lower, Some(lower), _) => *self = lower,
            (Resolution::Upper, _, Some(upper)) => *self = upper,
            _ => {}
        }
    }

    #[inline]
    fn clamp_assign_to<R>(&mut self, range: Option<&R>)
    where
        Self: Clone,
        R: ClampRange<Self> + ?Sized,
    {
        if let Some(range) = range {
            *self = range.clamp_value(self.clone());
        }
    }
}

impl<T: PartialOrd> Clamp for T {}
