//! Transport glue between the blocking writer and the async UART
//!
//! The control loop never awaits. [`ChannelTransport`] hands each response
//! line to the serial TX task through a one-slot channel and returns at
//! once; the TX task signals completion after the UART has flushed it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

use regfifo_hal::TransportTx;
use regfifo_protocol::TX_LINE_MAX;

/// One response line as queued for the UART
pub type TxLine = Vec<u8, TX_LINE_MAX>;

/// Errors starting a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Previous line still waiting for the TX task
    Busy,
    /// Line longer than [`TX_LINE_MAX`]
    TooLong,
}

/// [`TransportTx`] over a channel drained by the serial TX task
pub struct ChannelTransport<const N: usize> {
    lines: &'static Channel<CriticalSectionRawMutex, TxLine, N>,
}

impl<const N: usize> ChannelTransport<N> {
    pub fn new(lines: &'static Channel<CriticalSectionRawMutex, TxLine, N>) -> Self {
        Self { lines }
    }
}

impl<const N: usize> TransportTx for ChannelTransport<N> {
    type Error = TransportError;

    fn start_write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let line = TxLine::from_slice(data).map_err(|_| TransportError::TooLong)?;
        self.lines.try_send(line).map_err(|_| TransportError::Busy)
    }
}
