//! Regfifo Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the command core
//! needs from a board. Chip-specific glue (RP2040 UART, GPIO, ...) lives in
//! the firmware crate and implements these traits so the core logic stays
//! testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  regfifo-firmware (board glue, tasks)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  regfifo-core (queue, dispatcher, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  regfifo-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`transport::TransportTx`] - Asynchronous write with a completion signal
//! - [`gpio::OutputPin`] - Digital output (status indicator)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod transport;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use transport::{TransportConfig, TransportTx};
