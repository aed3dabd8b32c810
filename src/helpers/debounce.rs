//! Debounce - Timer-Based Rate Limiting
//!
//! [`Debounce`] wraps a function so that a burst of calls results in a single
//! invocation, `wait` after the last call, with the last call's arguments.
//! Timers come from a [`Scheduler`]; dropping a timer handle cancels it,
//! which is how a new call supersedes the pending one.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Boxed one-shot timer callback
pub type Task = Box<dyn FnOnce()>;

/// Source of one-shot timers
pub trait Scheduler {
    /// Handle for a scheduled task; dropping it cancels the task
    type Timer;

    fn schedule(&self, wait: Duration, task: Task) -> Self::Timer;
}

/// A debounced function
pub struct Debounce<A, S: Scheduler> {
    wait: Duration,
    scheduler: S,
    func: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Timer>>,
}

impl<A: 'static, S: Scheduler> Debounce<A, S> {
    pub fn new(wait: Duration, scheduler: S, func: impl Fn(A) + 'static) -> Self {
        Self {
            wait,
            scheduler,
            func: Rc::new(func),
            pending: RefCell::new(None),
        }
    }

    /// Schedule `func(args)` after the wait window, superseding any pending call
    pub fn call(&self, args: A) {
        let func = Rc::clone(&self.func);
        let timer = self.scheduler.schedule(self.wait, Box::new(move || func(args)));
        // The previous timer is dropped outside the borrow so a scheduler
        // whose cancellation re-enters this debounce cannot double-borrow.
        let previous = self.pending.replace(Some(timer));
        drop(previous);
    }
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_seq: u64,
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// Virtual-time scheduler
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock; tasks
/// then fire in deadline order. Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

/// Timer handle issued by [`ManualScheduler`]
pub struct ManualTimer {
    key: (Duration, u64),
    queue: Weak<RefCell<ManualQueue>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            // Dropping a task may drop captured timers, so let it go after the borrow ends
            let task = queue.borrow_mut().tasks.remove(&self.key);
            drop(task);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Number of tasks waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Move the clock forward, running every task that comes due
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                match queue.tasks.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        queue.now = key.0;
                        queue.tasks.remove(&key)
                    }
                    _ => None,
                }
            };
            match due {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn schedule(&self, wait: Duration, task: Task) -> ManualTimer {
        let mut queue = self.queue.borrow_mut();
        let key = (queue.now + wait, queue.next_seq);
        queue.next_seq += 1;
        queue.tasks.insert(key, task);
        ManualTimer {
            key,
            queue: Rc::downgrade(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl Fn(i32) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_burst_fires_once_with_last_args() {
        let scheduler = ManualScheduler::new();
        let (calls, func) = recorder();
        let debounced = Debounce::new(Duration::from_millis(100), scheduler.clone(), func);

        for v in 1..=5 {
            debounced.call(v);
            scheduler.advance(Duration::from_millis(30));
        }
        assert!(calls.borrow().is_empty());

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*calls.borrow(), vec![5]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_quiet_period_splits_bursts() {
        let scheduler = ManualScheduler::new();
        let (calls, func) = recorder();
        let debounced = Debounce::new(Duration::from_millis(50), scheduler.clone(), func);

        debounced.call(1);
        scheduler.advance(Duration::from_millis(50));
        debounced.call(2);
        debounced.call(3);
        scheduler.advance(Duration::from_millis(49));
        assert_eq!(*calls.borrow(), vec![1]);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_dropping_debounce_drops_pending_call() {
        let scheduler = ManualScheduler::new();
        let (calls, func) = recorder();
        let debounced = Debounce::new(Duration::from_millis(10), scheduler.clone(), func);

        debounced.call(7);
        assert_eq!(scheduler.pending(), 1);
        drop(debounced);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(Duration::from_secs(1));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_tasks_fire_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let (calls, _) = recorder();
        let a = Rc::clone(&calls);
        let b = Rc::clone(&calls);
        let _late = scheduler.schedule(Duration::from_millis(20), Box::new(move || a.borrow_mut().push(20)));
        let _early = scheduler.schedule(Duration::from_millis(10), Box::new(move || b.borrow_mut().push(10)));

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*calls.borrow(), vec![10, 20]);
        assert_eq!(scheduler.now(), Duration::from_millis(25));
    }
}
