//! Record queue shared between execution contexts
//!
//! The receive context pushes and the control loop pops, and either can be
//! preempted by the other. Every operation therefore runs inside one short
//! critical section. Nothing here blocks: push and pop are O(C) copies.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::fifo::{QueueError, RecordQueue};

/// [`RecordQueue`] behind a critical-section mutex, usable from a `static`
pub struct SharedRecordQueue<const N: usize, const C: usize> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<RecordQueue<N, C>>>,
}

impl<const N: usize, const C: usize> Default for SharedRecordQueue<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const C: usize> SharedRecordQueue<N, C> {
    /// Create an empty shared queue
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RecordQueue::new())),
        }
    }

    /// Run `f` with exclusive access to the queue
    ///
    /// Keep `f` short; interrupts are masked while it runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut RecordQueue<N, C>) -> R) -> R {
        self.inner.lock(|queue| f(&mut queue.borrow_mut()))
    }

    /// See [`RecordQueue::push`]
    pub fn push(&self, item: &[u8]) -> Result<(), QueueError> {
        self.with(|q| q.push(item))
    }

    /// See [`RecordQueue::pop`]
    pub fn pop(&self, out: &mut [u8]) -> Result<(), QueueError> {
        self.with(|q| q.pop(out))
    }

    /// Number of queued records
    pub fn count(&self) -> usize {
        self.with(|q| q.count())
    }

    /// Check if no records are queued
    pub fn is_empty(&self) -> bool {
        self.with(|q| q.is_empty())
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.with(|q| q.is_full())
    }

    /// See [`RecordQueue::reset_all`]
    pub fn reset_all(&self) {
        self.with(|q| q.reset_all())
    }

    /// See [`RecordQueue::reset_item`]
    pub fn reset_item(&self, index: usize) -> Result<(), QueueError> {
        self.with(|q| q.reset_item(index))
    }
}
