// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ClampError, DomainError, DomainResult, ErrorContext, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Bounds, ClosedRange, HalfOpenRange, RawRange};
