//! Delayed tasks for the match engine
//!
//! Tasks are due at an absolute time and fire when the session is advanced past
//! it. The session cancels all of them when it ends.

/// Deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Flip a mismatched pair back face down.
    Rehide { first: usize, second: usize },
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_ms: u64,
    task: Task,
}

/// Pending tasks, ordered by due time then by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn schedule(&mut self, due_ms: u64, task: Task) {
        let at = self.queue.partition_point(|s| s.due_ms <= due_ms);
        self.queue.insert(at, Scheduled { due_ms, task });
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }

    /// Take the earliest task whose due time has passed.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Task> {
        match self.queue.first() {
            Some(s) if s.due_ms <= now_ms => Some(self.queue.remove(0).task),
            _ => None,
        }
    }
}
