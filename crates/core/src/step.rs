// crates/core/src/step.rs
use num_traits::{FromPrimitive, ToPrimitive};

/// Discrete types that can be advanced by a signed number of steps.
///
/// Only half-open ranges need this: `lower..upper` is closed to
/// `lower..=upper.predecessor()` before clamping.
pub trait Step: PartialOrd + Sized {
    /// `self` moved `n` steps, or `None` when the result is not representable.
    fn advanced_by(&self, n: i64) -> Option<Self>;

    #[inline]
    fn predecessor(&self) -> Option<Self> {
        self.advanced_by(-1)
    }

    #[inline]
    fn successor(&self) -> Option<Self> {
        self.advanced_by(1)
    }
}

macro_rules! impl_step_via_i128 {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Step for $ty {
                #[inline]
                fn advanced_by(&self, n: i64) -> Option<Self> {
                    let wide = self.to_i128()?.checked_add(i128::from(n))?;
                    <$ty as FromPrimitive>::from_i128(wide)
                }
            }
        )*
    };
}

impl_step_via_i128!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

// u128 does not fit in i128.
impl Step for u128 {
    #[inline]
    fn advanced_by(&self, n: i64) -> Option<Self> {
        let magnitude = u128::from(n.unsigned_abs());
        if n < 0 { self.checked_sub(magnitude) } else { self.checked_add(magnitude) }
    }
}

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// Position of `ch` in the dense sequence of Unicode scalar values.
#[inline]
fn scalar_index(ch: char) -> u32 {
    let code = u32::from(ch);
    if code >= SURROGATE_START { code - SURROGATE_LEN } else { code }
}

/// Chars step by scalar value, so `'\u{D7FF}'` and `'\u{E000}'` are neighbours.
impl Step for char {
    fn advanced_by(&self, n: i64) -> Option<Self> {
        let index = i64::from(scalar_index(*self)).checked_add(n)?;
        let index = u32::try_from(index).ok()?;
        let code = if index >= SURROGATE_START { index.checked_add(SURROGATE_LEN)? } else { index };
        char::from_u32(code)
    }
}
