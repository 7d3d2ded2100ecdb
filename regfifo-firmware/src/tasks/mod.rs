//! Embassy async tasks
//!
//! All of these run on the interrupt executor, so they preempt the
//! control loop. Keep each poll short.

pub mod serial_rx;
pub mod serial_tx;
pub mod tick;

pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
pub use tick::tick_task;
