//! Serial receive task
//!
//! Reads whatever the UART has buffered and feeds it to the receiver,
//! which frames lines into the command queue. The next read is issued as
//! soon as a chunk has been handled.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use regfifo_core::config::{QUEUE_SLOTS, RECORD_SIZE};
use regfifo_core::Receiver;

use crate::channels::{COMMAND_QUEUE, LINK_STATS};
use crate::config::RX_CHUNK_SIZE;

/// Serial RX task - frames incoming bytes into queued command records
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut receiver: Receiver<'static, QUEUE_SLOTS, RECORD_SIZE> =
        Receiver::new(&COMMAND_QUEUE, &LINK_STATS);
    let mut buf = [0u8; RX_CHUNK_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                let summary = receiver.feed(&buf[..n]);
                if summary.overflows > 0 {
                    warn!("Line too long, {} discarded", summary.overflows);
                }
                if summary.dropped > 0 {
                    warn!("Command queue full, {} lines dropped", summary.dropped);
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
