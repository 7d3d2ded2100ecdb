//! Millisecond time base
//!
//! Sole writer of the shared tick counter.

use defmt::*;
use embassy_time::{Duration, Ticker};

use regfifo_core::config::TICK_PERIOD_MS;

use crate::channels::TICKS;

/// Tick task - advances the tick counter once per millisecond
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        ticker.next().await;
        TICKS.tick();
    }
}
