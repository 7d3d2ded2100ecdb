//! Receive path: transport bytes to queued records
//!
//! Runs in the preemptive context. Each chunk the transport delivers is fed
//! through the [`LineFramer`]; every completed line is offered to the queue
//! exactly once. A full queue drops the line (newest-drop), an overlong line
//! is discarded by the framer. Both are counted in [`LinkStats`].

use regfifo_protocol::{LineEvent, LineFramer};

use crate::queue::SharedRecordQueue;
use crate::stats::LinkStats;

/// What one call to [`Receiver::feed`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedSummary {
    /// Lines pushed into the queue
    pub lines: u16,
    /// Lines discarded for exceeding the record size
    pub overflows: u16,
    /// Complete lines rejected by a full queue
    pub dropped: u16,
}

impl FeedSummary {
    /// Check if anything was lost in this chunk
    pub fn lost_any(&self) -> bool {
        self.overflows > 0 || self.dropped > 0
    }
}

/// Frames received bytes into a shared record queue
pub struct Receiver<'a, const N: usize, const C: usize> {
    framer: LineFramer<C>,
    queue: &'a SharedRecordQueue<N, C>,
    stats: &'a LinkStats,
}

impl<'a, const N: usize, const C: usize> Receiver<'a, N, C> {
    /// Create a receiver with an empty line buffer
    pub fn new(queue: &'a SharedRecordQueue<N, C>, stats: &'a LinkStats) -> Self {
        Self {
            framer: LineFramer::new(),
            queue,
            stats,
        }
    }

    /// Feed one chunk of received bytes
    ///
    /// A line may span any number of chunks.
    pub fn feed(&mut self, bytes: &[u8]) -> FeedSummary {
        let mut summary = FeedSummary::default();

        for &byte in bytes {
            match self.framer.feed(byte) {
                LineEvent::Pending => {}
                LineEvent::Line(line) => {
                    // Not retried: the framer has already moved on
                    if self.queue.push(line).is_ok() {
                        summary.lines = summary.lines.saturating_add(1);
                    } else {
                        self.stats.record_queue_full();
                        summary.dropped = summary.dropped.saturating_add(1);
                    }
                }
                LineEvent::Overflow => {
                    self.stats.record_framer_overflow();
                    summary.overflows = summary.overflows.saturating_add(1);
                }
            }
        }

        summary
    }

    /// Bytes accumulated for the line in progress
    pub fn pending(&self) -> usize {
        self.framer.cursor()
    }
}
