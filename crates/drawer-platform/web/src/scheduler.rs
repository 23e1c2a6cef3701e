//! [`Scheduler`] backed by `window.setTimeout`.

use drawer_core::{Scheduler, TimerId};
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimeoutState {
    Pending,
    Running,
    Done,
}

struct PendingTimeout {
    handle: i32,
    state: Rc<Cell<TimeoutState>>,
    // Kept alive until the browser has invoked it.
    _callback: Closure<dyn FnMut()>,
}

pub struct WebScheduler {
    window: Window,
    next_id: Cell<u64>,
    timeouts: RefCell<FxHashMap<TimerId, PendingTimeout>>,
}

impl WebScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            next_id: Cell::new(1),
            timeouts: RefCell::new(FxHashMap::default()),
        }
    }

    /// Drop callbacks the browser has already run. A callback that is
    /// currently executing is left alone.
    fn sweep(&self) {
        self.timeouts
            .borrow_mut()
            .retain(|_, timeout| timeout.state.get() != TimeoutState::Done);
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<TimerId> {
        self.sweep();

        let state = Rc::new(Cell::new(TimeoutState::Pending));
        let mut task = Some(task);
        let callback = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move || {
                let Some(task) = task.take() else {
                    return;
                };
                state.set(TimeoutState::Running);
                task();
                state.set(TimeoutState::Done);
            }) as Box<dyn FnMut()>)
        };

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            ) {
            Ok(handle) => handle,
            Err(err) => {
                log::error!("setTimeout failed: {err:?}");
                return None;
            }
        };

        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timeouts.borrow_mut().insert(
            id,
            PendingTimeout {
                handle,
                state,
                _callback: callback,
            },
        );
        Some(id)
    }

    fn cancel(&self, id: TimerId) {
        let mut timeouts = self.timeouts.borrow_mut();
        let Some(timeout) = timeouts.get(&id) else {
            return;
        };
        match timeout.state.get() {
            TimeoutState::Pending => {
                self.window.clear_timeout_with_handle(timeout.handle);
                timeouts.remove(&id);
            }
            TimeoutState::Running => {}
            TimeoutState::Done => {
                timeouts.remove(&id);
            }
        }
    }
}
