//! Radio listen task
//!
//! Drains inbound payloads and latches them as parsed commands. Sole
//! producer of the command latch; arrivals between two apply ticks
//! coalesce there, last one wins. Parsing fails closed, so a mangled
//! payload degrades towards full stop instead of being reported.

use crate::system::command_latch;
use crate::system::radio;
use crate::system::resources::ReceiverRadioResources;
use defmt::{info, warn, Debug2Format};
use embassy_rp::gpio;
use embassy_rp::spi;
use embassy_time::{Duration, Timer};
use embedded_nrf24l01::NRF24L01;
use rc_link::Command;

/// RX FIFO poll interval while idle
const RX_POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Receiver radio task
#[embassy_executor::task]
pub async fn radio_listen(r: ReceiverRadioResources) {
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 1_000_000;
    let spi = spi::Spi::new_blocking(r.spi, r.clk, r.mosi, r.miso, spi_config);
    let ce = gpio::Output::new(r.ce, gpio::Level::Low);
    let csn = gpio::Output::new(r.csn, gpio::Level::High);
    let mut nrf = NRF24L01::new(ce, csn, spi).unwrap();
    radio::configure(&mut nrf).unwrap();
    let mut rx = nrf.rx().map_err(|(_, e)| e).unwrap();

    info!("receiver radio listening");

    loop {
        match rx.can_read() {
            Ok(Some(_pipe)) => match rx.read() {
                Ok(payload) => {
                    command_latch::offer(Command::from_wire(payload.as_ref()));
                }
                Err(e) => warn!("radio read failed: {}", Debug2Format(&e)),
            },
            Ok(None) => Timer::after(RX_POLL_INTERVAL).await,
            Err(e) => {
                warn!("radio status failed: {}", Debug2Format(&e));
                Timer::after(RX_POLL_INTERVAL).await;
            }
        }
    }
}
