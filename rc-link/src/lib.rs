//! Command protocol and control state for the RC car radio link
//!
//! A hand-held transmitter quantizes two tilt axes into a 2-byte
//! directional command and broadcasts it; the car-side receiver latches
//! the most recent command and keeps re-applying it to four binary
//! actuator outputs until a newer one arrives. This crate holds
//! everything with design content and nothing hardware-bound:
//!
//! - [`command`]: symbols, wire codec, tilt encoder and the actuator
//!   projection
//! - [`latch`]: the coalescing receive cell and per-node state structs
//!
//! The crate is `no_std` and free of HAL dependencies, so the firmware
//! links it on target while the tests run on the host.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod latch;

pub use command::{ActuatorState, Command, LateralSymbol, LongitudinalSymbol};
pub use latch::{CommandLatch, ReceiverState, TransmitterState};
