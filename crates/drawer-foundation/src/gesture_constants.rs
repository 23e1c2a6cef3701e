//! Shared gesture constants for the drawer drag.
//!
//! All distances are CSS pixels and all times are milliseconds, so
//! velocities are in px/ms.

/// Closing speed above which a release dismisses the drawer wherever it is.
///
/// Measured from the last two move samples only, so a fast flick at the end
/// of a slow drag still dismisses.
pub const COMMIT_VELOCITY: f32 = 0.5;

/// Fraction of the viewport height the sheet top must pass to dismiss on release.
pub const DISMISS_FRACTION: f32 = 0.5;

/// Scale of the logarithmic resistance applied when dragging past fully open.
pub const ELASTIC_SCALE: f32 = 20.0;

/// Shift inside the logarithm; keeps the curve defined at zero displacement.
pub const ELASTIC_SHIFT: f32 = 11.0;

/// Bias subtracted from the logarithm before scaling.
pub const ELASTIC_BIAS: f32 = 2.0;
