//! Open/close phase machine.
//!
//! `Closed -> Opening -> Open -> Closing -> Closed`. Opening and Closing each
//! wait on one deferred continuation; the sequencer owns its registration so
//! starting a new transition always cancels the previous one.

use crate::settings::DrawerSettings;
use drawer_core::TimerRegistration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Root hidden, page scrollable.
    #[default]
    Closed,
    /// Root shown with the sheet off-screen, waiting out the open guard.
    Opening,
    /// Sheet at rest (or following a drag).
    Open,
    /// Sheet sliding out, waiting for the unmount delay.
    Closing,
}

impl Phase {
    /// Whether the root is rendered in this phase.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, Phase::Closed)
    }
}

/// What the caller must do after a transition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Phase changed; schedule the continuation after `delay_ms` and [`Sequencer::arm`] it.
    Schedule { delay_ms: u32 },
    /// Nothing to schedule.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    phase: Phase,
    pending: Option<TimerRegistration>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn request_open(&mut self, settings: &DrawerSettings) -> Step {
        match self.phase {
            Phase::Closed | Phase::Closing => {
                self.cancel_pending();
                self.phase = Phase::Opening;
                Step::Schedule {
                    delay_ms: settings.open_guard_ms,
                }
            }
            Phase::Opening | Phase::Open => Step::Unchanged,
        }
    }

    pub fn request_close(&mut self, settings: &DrawerSettings) -> Step {
        match self.phase {
            Phase::Opening | Phase::Open => {
                self.cancel_pending();
                self.phase = Phase::Closing;
                Step::Schedule {
                    delay_ms: settings.unmount_delay_ms,
                }
            }
            Phase::Closing | Phase::Closed => Step::Unchanged,
        }
    }

    /// Hold the registration of the continuation for the current phase.
    pub fn arm(&mut self, registration: TimerRegistration) {
        self.cancel_pending();
        self.pending = Some(registration);
    }

    /// The pending continuation fired. Returns the phase entered, if any.
    pub fn complete(&mut self) -> Option<Phase> {
        if let Some(registration) = self.pending.take() {
            registration.disarm();
        }
        let next = match self.phase {
            Phase::Opening => Phase::Open,
            Phase::Closing => Phase::Closed,
            Phase::Open | Phase::Closed => return None,
        };
        self.phase = next;
        Some(next)
    }

    fn cancel_pending(&mut self) {
        if let Some(registration) = self.pending.take() {
            registration.cancel();
        }
    }
}
