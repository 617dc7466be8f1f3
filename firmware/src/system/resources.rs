//! Hardware resource assignments
//!
//! Splits the RP2350 peripherals into per-task groups for both node
//! boards. The two boards run different binaries from this crate, so
//! the groups are disjoint: the transmitter binary only takes the
//! accelerometer, arm button, indicator LED and its radio; the
//! receiver binary only takes its radio, the actuator channels and the
//! mirror LEDs. Splitting everything on either board is harmless, the
//! unused groups are simply dropped.
//!
//! All peripherals here are used in blocking mode, so no interrupt
//! bindings are needed.

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// LSM303DLHC accelerometer, blocking I2C (transmitter board)
    accelerometer: AccelerometerResources {
        i2c: I2C0,
        scl: PIN_13,
        sda: PIN_12,
    },
    /// Arm/disarm toggle button (transmitter board)
    arm_button: ArmButtonResources {
        btn: PIN_16,
    },
    /// PWM-controlled red/green armed-state indicator (transmitter board)
    arm_indicator: ArmIndicatorResources {
        pwm_red: PWM_SLICE1,
        pwm_green: PWM_SLICE2,
        red_pin: PIN_2,
        green_pin: PIN_4,
    },
    /// nRF24L01+ on SPI0 (transmitter board)
    transmitter_radio: TransmitterRadioResources {
        spi: SPI0,
        clk: PIN_18,
        mosi: PIN_19,
        miso: PIN_20,
        csn: PIN_21,
        ce: PIN_22,
    },
    /// nRF24L01+ on SPI1 (receiver board)
    receiver_radio: ReceiverRadioResources {
        spi: SPI1,
        clk: PIN_10,
        mosi: PIN_11,
        miso: PIN_8,
        csn: PIN_9,
        ce: PIN_7,
    },
    /// Four binary drive channels plus their mirror LEDs (receiver board)
    actuators: ActuatorResources {
        forward_pin: PIN_0,
        backward_pin: PIN_1,
        left_pin: PIN_3,
        right_pin: PIN_5,
        forward_led: PIN_6,
        backward_led: PIN_14,
        left_led: PIN_15,
        right_led: PIN_17,
    },
}
