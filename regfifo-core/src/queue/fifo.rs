//! Single-context record FIFO
//!
//! Invariants: `count <= N` and `tail == (head + count) % N`. Records carry
//! no length field; a slot is reset to [`SENTINEL`] before every push, so a
//! record's content is whatever precedes its first sentinel byte.

/// Value of every unused record byte
pub const SENTINEL: u8 = 0x00;

/// Queue operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Push rejected, every slot is occupied
    Full,
    /// Pop on an empty queue
    Empty,
    /// Requested length exceeds the record size
    TooLong,
    /// Slot index out of range
    InvalidSlot,
}

/// Fixed-capacity circular buffer of `N` records of `C` bytes
#[derive(Debug, Clone)]
pub struct RecordQueue<const N: usize, const C: usize> {
    slots: [[u8; C]; N],
    /// Next slot to pop
    head: usize,
    /// Next slot to push
    tail: usize,
    count: usize,
}

impl<const N: usize, const C: usize> Default for RecordQueue<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const C: usize> RecordQueue<N, C> {
    /// Create an empty queue with every slot cleared
    pub const fn new() -> Self {
        Self {
            slots: [[SENTINEL; C]; N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Append a record
    ///
    /// The tail slot is cleared to sentinel, then `item` is copied in. No
    /// state changes on error.
    pub fn push(&mut self, item: &[u8]) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        if item.len() > C {
            return Err(QueueError::TooLong);
        }

        let slot = &mut self.slots[self.tail];
        slot.fill(SENTINEL);
        slot[..item.len()].copy_from_slice(item);

        self.tail = (self.tail + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Remove the oldest record, copying its first `out.len()` bytes
    ///
    /// Sentinel padding is copied too, so `out` of length `C` receives the
    /// whole record. No state changes on error.
    pub fn pop(&mut self, out: &mut [u8]) -> Result<(), QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        if out.len() > C {
            return Err(QueueError::TooLong);
        }

        out.copy_from_slice(&self.slots[self.head][..out.len()]);

        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(())
    }

    /// Number of queued records
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if no records are queued
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.count >= N
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Size of one record in bytes
    pub const fn record_size(&self) -> usize {
        C
    }

    /// Clear every slot and empty the queue
    pub fn reset_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.fill(SENTINEL);
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// Clear the bytes of one slot
    ///
    /// Head, tail and count are untouched; clearing an occupied slot leaves
    /// an empty record in its place.
    pub fn reset_item(&mut self, index: usize) -> Result<(), QueueError> {
        let slot = self.slots.get_mut(index).ok_or(QueueError::InvalidSlot)?;
        slot.fill(SENTINEL);
        Ok(())
    }
}

/// Logical content of a record: the bytes before the first sentinel
pub fn record_content(record: &[u8]) -> &[u8] {
    let end = record
        .iter()
        .position(|&b| b == SENTINEL)
        .unwrap_or(record.len());
    &record[..end]
}
