//! Regfifo - register command firmware
//!
//! Line-oriented command interface over a serial link for RP2040 boards.
//!
//! Two execution contexts:
//! - an interrupt executor (SWI_IRQ_1) running the tick, serial RX and
//!   serial TX tasks; these preempt
//! - the thread-mode control loop, which dispatches queued commands and
//!   blinks the status LED

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use regfifo_hal::TransportConfig;

use crate::config::{UART_RX_BUF_SIZE, UART_TX_BUF_SIZE};
use crate::led::StatusLed;

mod channels;
mod config;
mod controller;
mod led;
mod tasks;
mod transport;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Executor for the preemptive context
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_RX_BUF_SIZE]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Regfifo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Serial link: UART0 on GPIO0 (TX) / GPIO1 (RX), 8N1
    let link = TransportConfig::default();
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = link.baudrate;

    let tx_buf = TX_BUF.init([0u8; UART_TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_RX_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", link.baudrate);

    // Status LED (GPIO25 on the Pico), active high
    let led = StatusLed::new(Output::new(p.PIN_25, Level::Low));

    // Preemptive context: above thread mode, below the UART interrupt
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();

    info!("All tasks spawned, entering control loop");

    controller::run(led)
}
