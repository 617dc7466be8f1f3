//! Transmitter firmware entry point
//!
//! Hand-held node: samples tilt, encodes commands and broadcasts them
//! while armed.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use rc_car::split_resources;
use rc_car::system::resources::*;
use rc_car::task::{
    arm_button::arm_button_handle, armed_indicate::armed_indicate, transmit::transmit,
};
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

    spawner.spawn(arm_button_handle(r.arm_button)).unwrap();
    spawner.spawn(armed_indicate(r.arm_indicator)).unwrap();
    spawner
        .spawn(transmit(r.accelerometer, r.transmitter_radio))
        .unwrap();
}
