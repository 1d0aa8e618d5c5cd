//! Motion preferences.

use launchkit_common::AnimationPreferences;
use tracing::trace;

use crate::curve::Curve;
use crate::presets::Transition;

/// Length of the fade that replaces motion when reduce-motion is on, in seconds.
pub const REDUCED_MOTION_DURATION: f32 = 0.15;

/// Curve to run under `prefs`, or `None` to apply the change immediately.
///
/// With reduce-motion on, springs become a short linear fade and longer
/// eased curves are capped at the same length.
pub fn resolve(curve: Curve, prefs: &AnimationPreferences) -> Option<Curve> {
    if !prefs.animations_enabled {
        trace!("Animations disabled, applying change immediately");
        return None;
    }

    if !prefs.reduce_motion {
        return Some(curve);
    }

    let duration = if curve.is_spring() {
        REDUCED_MOTION_DURATION
    } else {
        curve.settle_seconds().min(REDUCED_MOTION_DURATION)
    };
    Some(Curve::Linear { duration })
}

/// Transition to run under `prefs`. Reduce-motion keeps the fade and drops
/// the scale. `None` means the view appears immediately.
pub fn resolve_transition(transition: Transition, prefs: &AnimationPreferences) -> Option<Transition> {
    if !prefs.animations_enabled {
        return None;
    }

    if prefs.reduce_motion {
        return Some(Transition {
            scale_from: None,
            ..transition
        });
    }

    Some(transition)
}
