//! # LaunchKit Animation
//!
//! Timing curves used by the launcher and the helper that applies the
//! user's motion preferences to them.
//!
//! ## Modules
//!
//! - [`curve`]: spring and cubic-bezier timing curves
//! - [`presets`]: the curves and transitions the launcher uses
//! - [`preferences`]: disable or soften animations per user settings

pub mod curve;
pub mod preferences;
pub mod presets;

pub use curve::{CubicBezier, Curve, MAX_SETTLE_SECONDS};
pub use launchkit_common::AnimationPreferences;
pub use preferences::{resolve, resolve_transition, REDUCED_MOTION_DURATION};
pub use presets::{Transition, TransitionFrame, DRAG_PREVIEW, GRID_UPDATE, SPRING_FAST};

use thiserror::Error;

/// Errors from curve construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("Invalid duration: {0}")]
    InvalidDuration(f32),

    #[error("Invalid spring: response {response}, damping fraction {damping_fraction}")]
    InvalidSpring { response: f32, damping_fraction: f32 },

    #[error("Bezier control x values must lie in [0, 1]: {0}, {1}")]
    InvalidControlPoints(f32, f32),
}
