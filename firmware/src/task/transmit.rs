//! Transmit tick
//!
//! The transmitter's main loop. Every tick it consumes any pending arm
//! toggle, samples both tilt axes, encodes the command (full stop while
//! disarmed, regardless of tilt) and broadcasts it fire-and-forget.
//! There is no delivery confirmation; a lost packet is superseded by
//! the next tick's, so at most one tick of actuation goes stale.

use crate::system::arming;
use crate::system::indicator;
use crate::system::radio;
use crate::system::resources::{AccelerometerResources, TransmitterRadioResources};
use defmt::{info, warn, Debug2Format};
use embassy_rp::gpio;
use embassy_rp::i2c;
use embassy_rp::spi;
use embassy_time::{Duration, Timer};
use embedded_nrf24l01::NRF24L01;
use lsm303dlhc::Lsm303dlhc;
use rc_link::TransmitterState;

/// Broadcast cadence
const TRANSMIT_INTERVAL: Duration = Duration::from_millis(50);

/// Tilt threshold in milli-g; readings within [-T, T] are neutral
const SENSITIVITY: i32 = 200;

/// Transmitter main loop
#[embassy_executor::task]
pub async fn transmit(r_accel: AccelerometerResources, r_radio: TransmitterRadioResources) {
    // Accelerometer on blocking I2C
    let i2c = i2c::I2c::new_blocking(r_accel.i2c, r_accel.scl, r_accel.sda, i2c::Config::default());
    let mut accel = Lsm303dlhc::new(i2c).unwrap();

    // Radio on blocking SPI
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 1_000_000;
    let spi = spi::Spi::new_blocking(r_radio.spi, r_radio.clk, r_radio.mosi, r_radio.miso, spi_config);
    let ce = gpio::Output::new(r_radio.ce, gpio::Level::Low);
    let csn = gpio::Output::new(r_radio.csn, gpio::Level::High);
    let mut nrf = NRF24L01::new(ce, csn, spi).unwrap();
    radio::configure(&mut nrf).unwrap();
    let mut tx = nrf.tx().map_err(|(_, e)| e).unwrap();

    let mut state = TransmitterState::new();
    info!("transmitter up, disarmed");

    loop {
        if arming::take_toggle() {
            let armed = state.toggle_armed();
            indicator::update(armed);
            info!("{}", if armed { "armed" } else { "disarmed" });
        }

        // LSM303DLHC at +/-2g: 1 milli-g per LSB after the 4-bit
        // left alignment. Y is the longitudinal axis on this board,
        // X the lateral one, same as the hand-held orientation.
        let reading = accel.accel().unwrap();
        let longitudinal = (reading.y >> 4) as i32;
        let lateral = (reading.x >> 4) as i32;

        let command = state.command(longitudinal, lateral, SENSITIVITY);
        let payload = command.to_wire();

        if let Err(e) = tx.send(&payload).and_then(|()| tx.wait_empty()) {
            warn!("radio send failed: {}", Debug2Format(&e));
        }

        Timer::after(TRANSMIT_INTERVAL).await;
    }
}
