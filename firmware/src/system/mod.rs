//! Core system components shared by the node binaries
pub mod arming;
pub mod command_latch;
pub mod indicator;
pub mod radio;
pub mod resources;
