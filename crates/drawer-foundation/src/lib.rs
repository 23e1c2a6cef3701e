//! Gesture tracking and scroll arbitration for drawers.
//!
//! Nothing here writes styles. The tracker turns pointer samples into sheet
//! offsets and a release decision; the arbiter decides, per move, whether a
//! gesture belongs to the sheet or to scrollable content inside it.

pub mod arbiter;
pub mod gesture;
pub mod gesture_constants;

pub use arbiter::{Direction, DragDecision, ScrollArbiter};
pub use gesture::{
    elastic_offset, GestureSession, GestureTracker, MoveOutcome, Release, ReleaseThresholds,
};
