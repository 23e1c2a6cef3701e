//! Platform abstraction traits for drawer timing.
//!
//! The open/close sequence needs two deferred continuations and the gesture
//! tracker needs timestamps. Both are delegated to the host so the state
//! machine runs on a browser event loop or under virtual time in tests.

use std::fmt;
use std::rc::Rc;

/// Provides timestamps for pointer samples.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_millis(&self) -> f64;
}

/// Identifies a pending deferred task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Runs tasks after a delay on the UI event loop.
///
/// Tasks never run synchronously inside `schedule`; they are invoked later
/// from the event loop, outside of any drawer borrow.
pub trait Scheduler {
    /// Queue `task` to run after `delay_ms`. Returns `None` when the host
    /// could not schedule it, in which case `task` has been dropped.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<TimerId>;

    /// Cancel a pending task. Unknown or already fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

/// Owned handle to a scheduled task. Dropping it cancels the task.
pub struct TimerRegistration {
    scheduler: Rc<dyn Scheduler>,
    id: Option<TimerId>,
}

impl TimerRegistration {
    /// Schedule `task`, returning `None` if the scheduler refused it.
    pub fn schedule(
        scheduler: &Rc<dyn Scheduler>,
        delay_ms: u32,
        task: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let id = scheduler.schedule(delay_ms, Box::new(task))?;
        Some(Self {
            scheduler: Rc::clone(scheduler),
            id: Some(id),
        })
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Release the handle without cancelling. Used once the task has fired.
    pub fn disarm(mut self) {
        self.id = None;
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingScheduler {
        next: RefCell<u64>,
        cancelled: RefCell<Vec<TimerId>>,
    }

    impl Scheduler for RecordingScheduler {
        fn schedule(&self, _delay_ms: u32, _task: Box<dyn FnOnce()>) -> Option<TimerId> {
            let mut next = self.next.borrow_mut();
            *next += 1;
            Some(TimerId(*next))
        }

        fn cancel(&self, id: TimerId) {
            self.cancelled.borrow_mut().push(id);
        }
    }

    #[test]
    fn drop_cancels_pending_task() {
        let recorder = Rc::new(RecordingScheduler::default());
        let scheduler: Rc<dyn Scheduler> = recorder.clone();
        let registration = TimerRegistration::schedule(&scheduler, 10, || {}).unwrap();
        let id = registration.id().unwrap();
        drop(registration);
        assert_eq!(recorder.cancelled.borrow().as_slice(), &[id]);
    }

    #[test]
    fn disarm_does_not_cancel() {
        let recorder = Rc::new(RecordingScheduler::default());
        let scheduler: Rc<dyn Scheduler> = recorder.clone();
        TimerRegistration::schedule(&scheduler, 10, || {})
            .unwrap()
            .disarm();
        assert!(recorder.cancelled.borrow().is_empty());
    }
}
