//! Board configuration
//!
//! Identity strings come from device.toml through build.rs.

use regfifo_protocol::Identity;

/// UART receive chunk size
pub const RX_CHUNK_SIZE: usize = 32;

/// Buffered UART ring sizes
pub const UART_TX_BUF_SIZE: usize = 256;
pub const UART_RX_BUF_SIZE: usize = 256;

/// Identity reported by `*IDN?`
pub const IDENTITY: Identity = Identity {
    manufacturer: env!("REGFIFO_MANUFACTURER"),
    model: env!("REGFIFO_MODEL"),
    serial: env!("REGFIFO_SERIAL"),
    firmware_version: env!("CARGO_PKG_VERSION"),
    hardware_version: env!("REGFIFO_HW_VERSION"),
};
