// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

pub use clamp_core::{
    Clamp, ClampRange, Step, clamp, clamp_between, clamp_between_opt, clamp_half_open, clamp_to,
};
pub use clamp_shared_kernel::{
    Bounds, ClampError, ClosedRange, DomainError, ErrorContext, HalfOpenRange, PresentationError, Result,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
