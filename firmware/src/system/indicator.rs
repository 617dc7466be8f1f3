//! Armed-state indicator signaling
//!
//! Notifies the indicator task whenever the transmit loop flips the
//! armed state, using an embassy-sync Signal so the newest state always
//! wins.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Signal carrying the new armed state
static ARMED_CHANGED: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Publishes a change of the armed state
pub fn update(armed: bool) {
    ARMED_CHANGED.signal(armed);
}

/// Waits for the next armed-state change
pub async fn wait() -> bool {
    ARMED_CHANGED.wait().await
}
