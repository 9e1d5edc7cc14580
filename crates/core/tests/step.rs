// crates/core/tests/step.rs
use clamp_core::Step;

#[test]
fn integers_step_within_their_width() {
    assert_eq!(5_i32.advanced_by(-1), Some(4));
    assert_eq!(0_u8.advanced_by(255), Some(255));
    assert_eq!(100_i8.advanced_by(-200), Some(-100));
    assert_eq!(i8::MIN.predecessor(), None);
    assert_eq!(u8::MAX.successor(), None);
    assert_eq!(0_usize.predecessor(), None);
    assert_eq!(i128::MIN.predecessor(), None);
}

#[test]
fn u128_steps_past_i128_range() {
    assert_eq!(u128::MAX.successor(), None);
    assert_eq!(u128::MAX.advanced_by(-1), Some(u128::MAX - 1));
    assert_eq!(0_u128.predecessor(), None);
}

#[test]
fn chars_step_over_surrogates() {
    assert_eq!('b'.predecessor(), Some('a'));
    assert_eq!('a'.advanced_by(25), Some('z'));
    assert_eq!('\u{E000}'.predecessor(), Some('\u{D7FF}'));
    assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
    assert_eq!('\0'.predecessor(), None);
    assert_eq!(char::MAX.successor(), None);
}
