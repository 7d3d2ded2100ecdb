//! Byte-stream transport abstractions
//!
//! The command link is a byte stream (UART or USB CDC). Reception is push
//! based: the board delivers received batches to the core from its
//! asynchronous context, so only the transmit half needs a trait here.

/// Transport transmitter
///
/// `start_write` only *starts* a transfer and must return immediately.
/// Completion is reported out of band: the board's write-completion
/// context raises the shared transfer-complete flag owned by the core.
pub trait TransportTx {
    /// Error type for transmit operations
    type Error;

    /// Begin an asynchronous write of `data`
    ///
    /// Must not block. An error means the transfer was never started and no
    /// completion signal will follow.
    fn start_write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: TransportTx + ?Sized> TransportTx for &mut T {
    type Error = T::Error;

    fn start_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).start_write(data)
    }
}

/// Serial link configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportConfig {
    /// Baud rate in bits per second (ignored by USB CDC)
    pub baudrate: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
        }
    }
}
