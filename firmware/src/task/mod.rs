//! Node tasks
//!
//! Transmitter binary: [`arm_button`], [`armed_indicate`], [`transmit`].
//! Receiver binary: [`radio_listen`], [`apply`].
pub mod apply;
pub mod arm_button;
pub mod armed_indicate;
pub mod radio_listen;
pub mod transmit;
