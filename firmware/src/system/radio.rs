//! Radio link configuration
//!
//! Both nodes carry an nRF24L01+ and must agree on these constants for
//! the link to come up. The link is a one-way broadcast: auto-ack and
//! retransmission are disabled, every payload is a single 2-byte
//! command sent fire-and-forget. The radio's own link-layer CRC stays
//! enabled; the payload itself has no framing, checksum or sequencing,
//! a lost or mangled packet is simply superseded by the next tick's.

use embedded_nrf24l01::{Configuration, CrcMode, DataRate, Device};

/// RF channel shared by both nodes
pub const CHANNEL: u8 = 1;

/// Pipe address shared by both nodes
pub const LINK_ADDRESS: &[u8; 5] = b"CARRC";

/// Static payload length: exactly one wire command
pub const PAYLOAD_LEN: u8 = 2;

/// Applies the shared link configuration to a radio in any mode.
///
/// Used by both binaries before entering RX or TX mode.
pub fn configure<R>(radio: &mut R) -> Result<(), <R::Inner as Device>::Error>
where
    R: Configuration,
{
    radio.set_frequency(CHANNEL)?;
    radio.set_rf(&DataRate::R250Kbps, 3)?;
    radio.set_crc(CrcMode::TwoBytes)?;
    radio.set_auto_ack(&[false; 6])?;
    radio.set_auto_retransmit(0, 0)?;
    radio.set_pipes_rx_enable(&[true, false, false, false, false, false])?;
    radio.set_pipes_rx_lengths(&[Some(PAYLOAD_LEN), None, None, None, None, None])?;
    radio.set_rx_addr(0, &LINK_ADDRESS[..])?;
    radio.set_tx_addr(&LINK_ADDRESS[..])?;
    radio.flush_rx()?;
    radio.flush_tx()?;
    Ok(())
}
