//! # Clamp core
//!
//! `no_std` clamping primitives:
//!
//! - [`Clamp`]: extension trait for every `PartialOrd` type (two required
//!   bounds, independently optional bounds, in-place forms)
//! - [`ClampRange`]: clamping into the standard range types, including
//!   half-open ranges over discrete types
//! - [`Step`]: the capability used to close half-open ranges
//!
//! None of these functions fail. Inverted closed bounds leave the value
//! untouched, and absent values stay absent.

// crates/core/src/lib.rs
#![no_std]
#![allow(clippy::multiple_crate_versions)]

mod clamp;
mod range;
mod step;

pub use clamp::{Clamp, clamp_between, clamp_between_opt};
pub use range::{ClampRange, clamp_half_open};
pub use step::Step;

/// Clamps an optional value against independently optional bounds.
///
/// An absent `value` short-circuits to `None` without looking at the bounds.
#[inline]
pub fn clamp<T: PartialOrd>(value: Option<T>, lower: Option<T>, upper: Option<T>) -> Option<T> {
    value.map(|value| value.clamped_opt(lower, upper))
}

/// Clamps an optional value into an optional range.
///
/// An absent range imposes no constraint; an absent value stays absent.
#[inline]
pub fn clamp_to<T, R>(value: Option<T>, range: Option<&R>) -> Option<T>
where
    T: PartialOrd,
    R: ClampRange<T> + ?Sized,
{
    value.map(|value| value.clamped_to(range))
}
