//! # LaunchKit Core
//!
//! Scheduling primitives shared by the LaunchKit crates.
//!
//! The launcher defers a few side effects (spoken announcements in
//! particular) and wants only the latest request to survive. [`DelayedTask`]
//! covers that: one pending task at most, and scheduling a new one replaces
//! whatever was waiting.

pub mod delayed;

pub use delayed::DelayedTask;

use thiserror::Error;

/// Errors from the core scheduling layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
