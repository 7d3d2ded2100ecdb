//! Bounded record queue
//!
//! Fixed-capacity FIFO of fixed-size byte records. The receive context
//! pushes completed lines, the control loop pops them. Overflow policy is
//! drop-newest: a push into a full queue fails and the caller decides what
//! to do with the rejected line.

pub mod fifo;
pub mod shared;

pub use fifo::{record_content, QueueError, RecordQueue, SENTINEL};
pub use shared::SharedRecordQueue;
