//! Curves and transitions used across the launcher.

use crate::curve::Curve;

/// Selection highlight and other quick state changes.
pub const SPRING_FAST: Curve = Curve::Spring {
    response: 0.3,
    damping_fraction: 0.8,
};

/// Icon following the pointer during a drag.
pub const DRAG_PREVIEW: Curve = Curve::ease_out(0.3);

/// Icons sliding into new slots after a reorder.
pub const GRID_UPDATE: Curve = Curve::ease_in_out(0.3);

/// How a view enters: optionally scaled up from `scale_from`, optionally faded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub scale_from: Option<f32>,
    pub fade: bool,
}

/// Visual state of a transition at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub scale: f32,
    pub opacity: f32,
}

impl Transition {
    /// Folder popover: grows from 95% while fading in.
    pub const fn folder_open() -> Self {
        Self {
            scale_from: Some(0.95),
            fade: true,
        }
    }

    pub const fn opacity() -> Self {
        Self {
            scale_from: None,
            fade: true,
        }
    }

    /// Appearance at `progress` (0.0 hidden, 1.0 fully presented).
    pub fn frame(&self, progress: f32) -> TransitionFrame {
        let scale = match self.scale_from {
            Some(from) => from + (1.0 - from) * progress,
            None => 1.0,
        };
        let opacity = if self.fade {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        TransitionFrame { scale, opacity }
    }
}
