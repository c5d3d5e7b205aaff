use crate::utils::timer::{ScheduledTask, Scheduler};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

struct Entry {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

/// Deterministic scheduler: tasks only run when the test advances time.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of scheduled tasks that are neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .queue
            .iter()
            .filter(|e| !e.cancelled.get())
            .count()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                state.queue.retain(|e| !e.cancelled.get());
                let idx = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let entry = state.queue.remove(i);
                    state.now = entry.due;
                    entry
                })
            };
            match next {
                // Run outside the borrow so tasks may schedule more work.
                Some(entry) => (entry.task)(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Scheduler for ManualClock {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(Entry {
            due,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        ScheduledTask::new(cancelled, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_run_in_due_order_once_time_is_reached() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        let _late = clock.schedule(Duration::from_millis(30), Box::new(move || a.borrow_mut().push("late")));
        let _early = clock.schedule(Duration::from_millis(10), Box::new(move || b.borrow_mut().push("early")));

        clock.advance_ms(9);
        assert!(log.borrow().is_empty());
        clock.advance_ms(21);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), Duration::from_millis(30));
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let clock = ManualClock::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let handle = clock.schedule(Duration::from_millis(5), Box::new(move || flag.set(true)));
        assert_eq!(clock.pending(), 1);
        handle.cancel();
        assert_eq!(clock.pending(), 0);
        clock.advance_ms(10);
        assert!(!ran.get());
    }
}
