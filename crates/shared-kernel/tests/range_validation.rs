// crates/shared-kernel/tests/range_validation.rs
use std::ops::{Range, RangeInclusive};

use clamp_shared_kernel::{ClosedRange, DomainError, HalfOpenRange};

#[test]
fn closed_range_requires_ordered_bounds() {
    let range = ClosedRange::try_new(3, 4).expect("ordered");
    assert_eq!((*range.lower(), *range.upper()), (3, 4));
    assert!(ClosedRange::try_new(4, 4).is_ok());
    assert!(matches!(ClosedRange::try_new(5, 4), Err(DomainError::InvalidRange { .. })));
}

#[test]
fn nan_bounds_are_rejected() {
    assert!(ClosedRange::try_new(f64::NAN, 1.0).is_err());
    assert!(ClosedRange::try_new(0.0, f64::NAN).is_err());
}

#[test]
fn closed_range_contains_endpoints() {
    let range = ClosedRange::try_new('a', 'z').expect("ordered");
    assert!(range.contains(&'a'));
    assert!(range.contains(&'z'));
    assert!(!range.contains(&'A'));
}

#[test]
fn half_open_range_excludes_upper() {
    let range = HalfOpenRange::try_new(2, 5).expect("ordered");
    assert!(range.contains(&2));
    assert!(range.contains(&4));
    assert!(!range.contains(&5));
    assert!(!range.is_empty());
}

#[test]
fn empty_half_open_range_has_no_closed_form() {
    let empty = HalfOpenRange::try_new(7_u8, 7).expect("ordered");
    assert!(empty.is_empty());
    assert_eq!(empty.to_closed(), None);

    let zero = HalfOpenRange::try_new(0_u8, 0).expect("ordered");
    assert_eq!(zero.to_closed(), None);
}

#[test]
fn half_open_range_closes_to_predecessor() {
    let range = HalfOpenRange::try_new(2, 5).expect("ordered");
    assert_eq!(range.to_closed(), Some(ClosedRange::try_new(2, 4).expect("ordered")));

    let letters = HalfOpenRange::try_new('a', 'd').expect("ordered");
    assert_eq!(letters.to_closed().map(|r| *r.upper()), Some('c'));
}

#[test]
fn std_range_conversions() {
    let closed = ClosedRange::try_from(1..=3).expect("ordered");
    assert_eq!(RangeInclusive::from(closed), 1..=3);
    assert!(ClosedRange::try_from(RangeInclusive::new(3, 1)).is_err());

    let half_open = HalfOpenRange::try_from(1..3).expect("ordered");
    assert_eq!(Range::from(half_open), 1..3);
    assert_eq!(closed.into_inner(), (1, 3));
}

#[test]
fn display_uses_rust_range_syntax() {
    assert_eq!(ClosedRange::try_new(3, 4).expect("ordered").to_string(), "3..=4");
    assert_eq!(HalfOpenRange::try_new(2, 5).expect("ordered").to_string(), "2..5");
}
