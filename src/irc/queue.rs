//! Thread-safe FIFO buffer of outbound protocol lines.
//!
//! The run loop is the only producer and consumer today, but the queue is
//! written to the documented contract: safe for concurrent producers (a
//! future event-source task) and consumers (a future sender task). Lines
//! enqueued as a batch are inserted in one critical section, and the queue
//! drains front-to-back, so batches like the registration sequence are
//! transmitted in their logical order.

use std::collections::VecDeque;
use std::sync::Mutex;

/// FIFO queue of pending protocol lines.
#[derive(Debug, Default)]
pub struct OutboundQueue {
    lines: Mutex<VecDeque<String>>,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single line.
    pub fn push(&self, line: String) {
        self.lock().push_back(line);
    }

    /// Append a batch of lines under one lock acquisition, preserving the
    /// batch's internal order.
    pub fn extend(&self, lines: Vec<String>) {
        self.lock().extend(lines);
    }

    /// Remove and return the oldest line, or `None` when the queue is empty.
    /// Check and removal happen under the same lock acquisition, so there is
    /// no window for another consumer to race between them.
    pub fn pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the VecDeque itself is still structurally valid.
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}
