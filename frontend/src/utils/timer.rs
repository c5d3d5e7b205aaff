use gloo_timers::callback::Timeout;
use std::{cell::Cell, rc::Rc, time::Duration};

/// Runs one-shot tasks after a delay on the UI thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// Handle to a task handed to a [`Scheduler`].
///
/// Dropping the handle cancels the task if it has not run yet.
pub struct ScheduledTask {
    cancelled: Rc<Cell<bool>>,
    timer: Option<Timeout>,
}

impl ScheduledTask {
    pub(crate) fn new(cancelled: Rc<Cell<bool>>, timer: Option<Timeout>) -> Self {
        Self { cancelled, timer }
    }

    pub fn cancel(mut self) {
        self.cancelled.set(true);
        if let Some(timer) = self.timer.take() {
            let _ = timer.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Browser scheduler backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let cancelled = Rc::new(Cell::new(false));
        let guard = Rc::clone(&cancelled);
        let timer = Timeout::new(delay_millis(delay), move || {
            if !guard.get() {
                task();
            }
        });
        ScheduledTask::new(cancelled, Some(timer))
    }
}

/// Clamps a delay to what `setTimeout` accepts.
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
