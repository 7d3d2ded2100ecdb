//! Cooperative control loop
//!
//! Runs in thread mode at the lowest priority and never awaits. Each
//! iteration dispatches at most one queued command, then services the
//! status LED. Response writes spin inside the dispatcher until the serial
//! TX task (on the interrupt executor) signals completion or the write
//! deadline passes.

use defmt::*;

use regfifo_core::config::{LED_OFF_TIME_MS, LED_ON_TIME_MS, WRITE_TIMEOUT_MS};
use regfifo_core::{BlinkIndicator, Dispatched, Dispatcher, TimeoutWriter};

use crate::channels::{COMMAND_QUEUE, LINK_STATS, TICKS, TX_COMPLETE, TX_LINES};
use crate::config::IDENTITY;
use crate::led::StatusLed;
use crate::transport::ChannelTransport;

/// Run the control loop forever
pub fn run(mut led: StatusLed) -> ! {
    info!("Control loop started");

    let writer = TimeoutWriter::new(
        ChannelTransport::new(&TX_LINES),
        &TX_COMPLETE,
        &TICKS,
        WRITE_TIMEOUT_MS,
    );
    let mut dispatcher = Dispatcher::new(writer, IDENTITY, &TICKS, &LINK_STATS);
    let mut indicator = BlinkIndicator::new(LED_ON_TIME_MS, LED_OFF_TIME_MS);

    loop {
        if COMMAND_QUEUE.count() > 0 {
            if let Some(outcome) = dispatcher.poll(&COMMAND_QUEUE) {
                log_dispatched(outcome);
            }
        }

        indicator.update(TICKS.now(), &mut led);
    }
}

fn log_dispatched(outcome: Dispatched) {
    match outcome {
        Dispatched::Executed {
            command,
            lines,
            timeouts,
            dropped,
        } => {
            debug!("{}: {} lines", command.name(), lines);
            if timeouts > 0 {
                warn!("{}: {} writes timed out", command.name(), timeouts);
            }
            if dropped > 0 {
                warn!("{}: {} lines not sent", command.name(), dropped);
            }
        }
        Dispatched::Ignored => trace!("Unknown command ignored"),
    }
}
