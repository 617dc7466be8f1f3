//! Receiver firmware entry point
//!
//! Car-side node: latches inbound commands and continuously applies the
//! current one to the drive outputs.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use rc_car::split_resources;
use rc_car::system::resources::*;
use rc_car::task::{apply::apply, radio_listen::radio_listen};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());
    let r = split_resources!(p);

    // Listener first, so a command in the air can be latched before the
    // first apply tick runs
    spawner.spawn(radio_listen(r.receiver_radio)).unwrap();
    spawner.spawn(apply(r.actuators)).unwrap();
}
