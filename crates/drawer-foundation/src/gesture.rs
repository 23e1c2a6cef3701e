//! Drag tracking for the sheet container.
//!
//! A [`GestureSession`] lives from pointer-down to pointer-up. Each move
//! sample either moves the sheet (1:1 when pulled down, with logarithmic
//! resistance when pushed up past fully open) or hands the gesture over to
//! scrollable content, as decided by the caller's arbiter.

use crate::arbiter::{Direction, DragDecision};
use crate::gesture_constants::{
    COMMIT_VELOCITY, DISMISS_FRACTION, ELASTIC_BIAS, ELASTIC_SCALE, ELASTIC_SHIFT,
};

/// Displacement applied when the pointer is `delta_y` pixels above where it
/// started. Always negative and grows sub-linearly with `delta_y`.
pub fn elastic_offset(delta_y: f32) -> f32 {
    -ELASTIC_SCALE * ((delta_y + ELASTIC_SHIFT).ln() - ELASTIC_BIAS)
}

/// Limits that turn a release into a dismissal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseThresholds {
    /// Closing speed in px/ms at or above which the drawer dismisses.
    pub commit_velocity: f32,
    /// Fraction of the viewport the sheet top must pass to dismiss.
    pub dismiss_fraction: f32,
}

impl Default for ReleaseThresholds {
    fn default() -> Self {
        Self {
            commit_velocity: COMMIT_VELOCITY,
            dismiss_fraction: DISMISS_FRACTION,
        }
    }
}

/// What the sheet should do when the pointer is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Dismiss,
    SnapBack,
}

/// Result of feeding one move sample to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No live drag, or the sample had no position.
    Ignored,
    /// The sheet follows the pointer at `offset` pixels from rest.
    Dragged { offset: f32 },
    /// Scrollable content took over; the sheet stays where it is.
    Yielded,
}

/// Live state of one drag interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub start_y: f32,
    pub last_y: f32,
    pub last_time_ms: f64,
    /// Signed px/ms between the last two samples; negative while moving down.
    pub velocity: f32,
    /// Cleared when scrollable content takes the gesture over.
    pub is_dragging: bool,
    /// Current sheet displacement; `None` until the first accepted move.
    pub offset: Option<f32>,
}

impl GestureSession {
    fn new(start_y: f32, time_ms: f64) -> Self {
        Self {
            start_y,
            last_y: start_y,
            last_time_ms: time_ms,
            velocity: 0.0,
            is_dragging: true,
            offset: None,
        }
    }

    fn track(&mut self, y: f32, time_ms: f64) {
        let elapsed = time_ms - self.last_time_ms;
        if elapsed <= 0.0 {
            return;
        }
        self.velocity = ((self.last_y - y) as f64 / elapsed) as f32;
        self.last_y = y;
        self.last_time_ms = time_ms;
    }

    /// Decide the release given where the sheet top currently is.
    pub fn release_decision(
        &self,
        top: f32,
        viewport_height: f32,
        thresholds: &ReleaseThresholds,
    ) -> Release {
        let past_half = top > viewport_height * thresholds.dismiss_fraction;
        let flicked = -self.velocity >= thresholds.commit_velocity;
        if past_half || flicked {
            Release::Dismiss
        } else {
            Release::SnapBack
        }
    }
}

/// Owns the (at most one) gesture session of a drawer instance.
#[derive(Debug, Default)]
pub struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session at `y`. A press without a position starts nothing.
    pub fn start(&mut self, y: Option<f32>, time_ms: f64) -> bool {
        match y {
            Some(y) => {
                self.session = Some(GestureSession::new(y, time_ms));
                true
            }
            None => {
                log::debug!("drag start without a pointer position ignored");
                false
            }
        }
    }

    /// Feed one move sample. `arbitrate` is consulted with the direction of
    /// travel relative to the start before the sheet is moved.
    pub fn sample(
        &mut self,
        y: Option<f32>,
        time_ms: f64,
        arbitrate: impl FnOnce(Direction) -> DragDecision,
    ) -> MoveOutcome {
        let Some(session) = self.session.as_mut().filter(|session| session.is_dragging) else {
            return MoveOutcome::Ignored;
        };
        let Some(y) = y else {
            return MoveOutcome::Ignored;
        };

        let delta_y = session.start_y - y;
        let (direction, offset) = if y > session.start_y {
            (Direction::Down, -delta_y)
        } else {
            (Direction::Up, elastic_offset(delta_y))
        };

        if arbitrate(direction) == DragDecision::Scroll {
            session.is_dragging = false;
            log::trace!("drag yielded to scrollable content ({direction:?})");
            return MoveOutcome::Yielded;
        }

        session.offset = Some(offset);
        session.track(y, time_ms);
        log::trace!(
            "drag sample y={y} offset={offset} velocity={}",
            session.velocity
        );
        MoveOutcome::Dragged { offset }
    }

    /// End the session, handing it back for the release decision.
    pub fn finish(&mut self) -> Option<GestureSession> {
        self.session.take()
    }

    /// Drop any session and its velocity.
    pub fn reset(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.is_dragging)
    }

    /// Velocity of the live session, zero when idle.
    pub fn velocity(&self) -> f32 {
        self.session.map_or(0.0, |session| session.velocity)
    }
}
