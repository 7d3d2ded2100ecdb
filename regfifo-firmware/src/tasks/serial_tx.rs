//! Serial transmit task
//!
//! Completion context for the timeout writer: sends one queued line, waits
//! for the UART to drain it, then raises the transfer-complete flag.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::{TX_COMPLETE, TX_LINES};

/// Serial TX task - drains response lines to the UART
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        let line = TX_LINES.receive().await;

        if let Err(e) = tx.write_all(&line).await {
            warn!("Failed to send response: {:?}", e);
            continue;
        }
        if let Err(e) = tx.flush().await {
            warn!("Failed to flush response: {:?}", e);
            continue;
        }

        trace!("TX: {} bytes", line.len());
        TX_COMPLETE.signal();
    }
}
