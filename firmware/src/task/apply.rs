//! Apply tick
//!
//! The receiver's main loop. Every tick it promotes a pending command
//! if one arrived, projects the current command onto the four drive
//! channels and re-asserts every output level plus its mirror LED.
//! The writes happen whether or not anything changed: re-asserting a
//! known state each tick is the only recovery mechanism for an output
//! that drifted, and it is what keeps the car driving the last command
//! indefinitely when the transmitter goes quiet.

use crate::system::command_latch;
use crate::system::resources::ActuatorResources;
use defmt::info;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Timer};
use rc_link::ReceiverState;

/// Apply cadence
const APPLY_TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Receiver main loop
#[embassy_executor::task]
pub async fn apply(r: ActuatorResources) {
    let mut forward = Output::new(r.forward_pin, Level::Low);
    let mut backward = Output::new(r.backward_pin, Level::Low);
    let mut left = Output::new(r.left_pin, Level::Low);
    let mut right = Output::new(r.right_pin, Level::Low);

    let mut forward_led = Output::new(r.forward_led, Level::Low);
    let mut backward_led = Output::new(r.backward_led, Level::Low);
    let mut left_led = Output::new(r.left_led, Level::Low);
    let mut right_led = Output::new(r.right_led, Level::Low);

    let mut state = ReceiverState::new();
    let mut last = state.current();

    loop {
        let acts = state.poll(command_latch::latch());

        if state.current() != last {
            info!("command {}", state.current());
            last = state.current();
        }

        // Unconditional level writes, every tick
        forward.set_level(acts.forward.into());
        backward.set_level(acts.backward.into());
        left.set_level(acts.left.into());
        right.set_level(acts.right.into());

        forward_led.set_level(acts.forward.into());
        backward_led.set_level(acts.backward.into());
        left_led.set_level(acts.left.into());
        right_led.set_level(acts.right.into());

        Timer::after(APPLY_TICK_INTERVAL).await;
    }
}
