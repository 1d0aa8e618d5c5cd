//! Timing curves.
//!
//! Springs are parameterised the way the platform's UI toolkit does it: a
//! `response` (the period of the undamped oscillation, in seconds) and a
//! `damping_fraction` (1.0 is critically damped). Eased curves are unit
//! cubic beziers stretched over a duration.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::AnimationError;

/// Residual displacement at which a spring counts as settled.
const SETTLE_THRESHOLD: f32 = 0.001;

/// Upper bound on how long any curve runs, in seconds.
pub const MAX_SETTLE_SECONDS: f32 = 60.0;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f32 = 1e-6;

/// Unit cubic bezier from (0, 0) to (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const EASE_OUT: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    pub const EASE_IN_OUT: Self = Self {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self, AnimationError> {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(AnimationError::InvalidControlPoints(x1, x2));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Curve parameter whose x coordinate is `x`.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled on a flat section; bisect instead.
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }

    /// Eased progress at normalized time `x` in `[0, 1]`.
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

/// A timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Spring { response: f32, damping_fraction: f32 },
    Bezier { duration: f32, bezier: CubicBezier },
    Linear { duration: f32 },
}

impl Curve {
    pub fn spring(response: f32, damping_fraction: f32) -> Result<Self, AnimationError> {
        let valid = response.is_finite()
            && response > 0.0
            && damping_fraction.is_finite()
            && damping_fraction > 0.0;
        if !valid {
            return Err(AnimationError::InvalidSpring {
                response,
                damping_fraction,
            });
        }
        Ok(Self::Spring {
            response,
            damping_fraction,
        })
    }

    pub const fn ease_out(duration: f32) -> Self {
        Self::Bezier {
            duration,
            bezier: CubicBezier::EASE_OUT,
        }
    }

    pub const fn ease_in_out(duration: f32) -> Self {
        Self::Bezier {
            duration,
            bezier: CubicBezier::EASE_IN_OUT,
        }
    }

    pub fn linear(duration: f32) -> Result<Self, AnimationError> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(AnimationError::InvalidDuration(duration));
        }
        Ok(Self::Linear { duration })
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, Self::Spring { .. })
    }

    /// Time after which progress is reported as exactly 1.0, in seconds.
    ///
    /// Always finite and within `[0, MAX_SETTLE_SECONDS]`. Curves built
    /// directly from the variants with nonsensical values settle at once.
    pub fn settle_seconds(&self) -> f32 {
        let seconds = match *self {
            Self::Spring {
                response,
                damping_fraction,
            } => {
                let omega = TAU / response;
                let decay = if damping_fraction > 1.0 {
                    // The slower of the two overdamped modes dominates.
                    slow_overdamped_rate(omega, damping_fraction)
                } else {
                    damping_fraction * omega
                };
                (1.0 / SETTLE_THRESHOLD).ln() / decay
            }
            Self::Bezier { duration, .. } | Self::Linear { duration } => duration,
        };

        if seconds.is_nan() || seconds < 0.0 {
            0.0
        } else {
            seconds.min(MAX_SETTLE_SECONDS)
        }
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.settle_seconds()).unwrap_or(Duration::ZERO)
    }

    /// Progress at `elapsed` seconds. Springs may overshoot 1.0 before settling.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed >= self.settle_seconds() {
            return 1.0;
        }

        match *self {
            Self::Spring {
                response,
                damping_fraction,
            } => 1.0 - spring_displacement(response, damping_fraction, elapsed),
            Self::Bezier { duration, bezier } => bezier.ease(elapsed / duration),
            Self::Linear { duration } => elapsed / duration,
        }
    }
}

/// Remaining displacement of a unit spring released from rest.
fn spring_displacement(response: f32, zeta: f32, t: f32) -> f32 {
    let omega = TAU / response;

    if (zeta - 1.0).abs() < 1e-4 {
        return (-omega * t).exp() * (1.0 + omega * t);
    }

    if zeta < 1.0 {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        return envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin());
    }

    let r1 = -slow_overdamped_rate(omega, zeta);
    let r2 = -omega * (zeta + (zeta * zeta - 1.0).sqrt());
    (r1 * (r2 * t).exp() - r2 * (r1 * t).exp()) / (r1 - r2)
}

/// `omega * (zeta - sqrt(zeta^2 - 1))`, written so heavy damping does not
/// cancel to zero.
fn slow_overdamped_rate(omega: f32, zeta: f32) -> f32 {
    omega / (zeta + (zeta * zeta - 1.0).sqrt())
}
