//! Arm button handling
//!
//! Debounces the transmitter's arm button and requests an armed-state
//! toggle on each press edge. The transmit loop applies the toggle, so
//! disarming takes effect no later than the next transmit tick.

use crate::system::arming;
use crate::system::resources::ArmButtonResources;
use embassy_rp::gpio::{Input, Level, Pull};
use embassy_time::{Duration, Timer};

/// Button debounce delay (ms)
const DEBOUNCE_DURATION: Duration = Duration::from_millis(30);

/// Arm button handler
#[embassy_executor::task]
pub async fn arm_button_handle(r: ArmButtonResources) {
    let mut btn = Input::new(r.btn, Pull::Down);

    loop {
        let init_level = debounce(&mut btn).await;

        // Only a rising edge counts as a press
        if init_level != Level::High {
            continue;
        }

        arming::request_toggle();
        btn.wait_for_low().await;
    }
}

/// Ensures stable button state
async fn debounce(button: &mut Input<'static>) -> Level {
    loop {
        let st_level = button.get_level();
        button.wait_for_any_edge().await;
        Timer::after(DEBOUNCE_DURATION).await;
        let end_level = button.get_level();
        if st_level != end_level {
            break end_level;
        }
    }
}
