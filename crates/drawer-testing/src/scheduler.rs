//! Virtual-time scheduler.

use drawer_core::{Scheduler, TimerId};
use std::cell::{Cell, RefCell};

struct PendingTask {
    id: TimerId,
    due: u64,
    task: Box<dyn FnOnce()>,
}

/// Runs scheduled tasks only when the test advances time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<PendingTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delays of the pending tasks relative to now, soonest first.
    pub fn pending_delays(&self) -> Vec<u64> {
        let now = self.now.get();
        let mut delays: Vec<u64> = self
            .pending
            .borrow()
            .iter()
            .map(|task| task.due.saturating_sub(now))
            .collect();
        delays.sort_unstable();
        delays
    }

    /// Move time forward by `millis`, running every task that falls due in
    /// order of due time, then scheduling order.
    pub fn advance_by(&self, millis: u64) {
        let target = self.now.get() + millis;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let index = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                index.map(|index| pending.remove(index))
            };
            let Some(next) = next else {
                break;
            };
            self.now.set(next.due);
            (next.task)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<TimerId> {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.pending.borrow_mut().push(PendingTask {
            id,
            due: self.now.get() + u64::from(delay_ms),
            task,
        });
        Some(id)
    }

    fn cancel(&self, id: TimerId) {
        self.pending.borrow_mut().retain(|task| task.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(400, "late"), (10, "early"), (10, "early-second")] {
            let log = Rc::clone(&log);
            scheduler.schedule(delay, Box::new(move || log.borrow_mut().push(label)));
        }

        scheduler.advance_by(9);
        assert!(log.borrow().is_empty());
        scheduler.advance_by(1);
        assert_eq!(log.borrow().as_slice(), &["early", "early-second"]);
        scheduler.advance_by(390);
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(scheduler.now(), 400);
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let id = scheduler
            .schedule(5, Box::new(move || flag.set(true)))
            .unwrap();
        scheduler.cancel(id);
        scheduler.advance_by(100);
        assert!(!ran.get());
        assert_eq!(scheduler.pending_count(), 0);
    }
}
