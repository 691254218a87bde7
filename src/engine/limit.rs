use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::GraphError;

/// The budget of a single search, checked before every frontier extraction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchLimits<'a> {
    deadline: Option<Instant>,
    interrupt: Option<&'a AtomicBool>,
    steps: u64,
}

impl<'a> SearchLimits<'a> {
    pub fn new(time_limit: Option<Duration>, interrupt: Option<&'a AtomicBool>) -> Self {
        SearchLimits {
            deadline: time_limit.map(|limit| Instant::now() + limit),
            interrupt,
            steps: 0,
        }
    }

    /// Counts one extraction step and fails once a limit is reached
    pub fn step(&mut self) -> Result<(), GraphError> {
        self.steps = self.steps.wrapping_add(1);
        if let Some(flag) = self.interrupt {
            if flag.load(Ordering::Relaxed) {
                return Err(GraphError::Interrupted);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(GraphError::TimeLimitExceeded);
            }
        }
        Ok(())
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}
