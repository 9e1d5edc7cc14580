// crates/shared-kernel/src/value_objects/mod.rs
pub mod bounds;
pub mod ranges;

pub use bounds::Bounds;
pub use ranges::{ClosedRange, HalfOpenRange, RawRange};
