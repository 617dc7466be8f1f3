//! Armed-state indicator
//!
//! Drives the transmitter's red/green LED: red while disarmed, green
//! while armed. Follows the armed-state signal from the transmit loop.

use crate::system::indicator;
use crate::system::resources::ArmIndicatorResources;
use embassy_rp::pwm;
use embassy_rp::pwm::SetDutyCycle;

/// Armed-state indicator task
#[embassy_executor::task]
pub async fn armed_indicate(r: ArmIndicatorResources) {
    // configure pwm for the led, 100Hz
    let desired_freq_hz = 100;
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / desired_freq_hz) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (desired_freq_hz * divider as u32)) as u16 - 1;

    // Configure red LED PWM
    let mut config_red = pwm::Config::default();
    config_red.divider = divider.into();
    config_red.top = period;
    let mut pwm_red = pwm::Pwm::new_output_a(r.pwm_red, r.red_pin, config_red.clone());

    // Configure green LED PWM
    let mut config_green = pwm::Config::default();
    config_green.divider = divider.into();
    config_green.top = period;
    let mut pwm_green = pwm::Pwm::new_output_a(r.pwm_green, r.green_pin, config_green.clone());

    // Power-up state is disarmed
    let mut armed = false;

    loop {
        if armed {
            let _ = pwm_red.set_duty_cycle_fully_off();
            let _ = pwm_green.set_duty_cycle_fully_on();
        } else {
            let _ = pwm_red.set_duty_cycle_fully_on();
            let _ = pwm_green.set_duty_cycle_fully_off();
        }

        armed = indicator::wait().await;
    }
}
