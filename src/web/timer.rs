//! `setTimeout`-backed [`Scheduler`]

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::helpers::{Scheduler, Task};

/// Schedules tasks on the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Timer = Timeout;

    fn schedule(&self, wait: Duration, task: Task) -> Timeout {
        let millis = u32::try_from(wait.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}
