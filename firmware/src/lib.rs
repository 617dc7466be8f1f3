//! RC car firmware
//!
//! Shared modules for the two node binaries, `transmitter` and
//! `receiver`. Each binary spawns its own subset of the tasks in
//! [`task`]; the inter-task channels and hardware resource assignments
//! live in [`system`]. Protocol and control-state logic comes from the
//! `rc-link` crate.

#![no_std]

/// System core modules
pub mod system;
/// Task implementations
pub mod task;
