//! Arm toggle signaling
//!
//! Carries button press edges from the arm button task to the transmit
//! loop. The transmit loop owns the armed flag itself; this signal only
//! says "a press happened since your last tick". Multiple presses
//! within one tick coalesce into a single toggle, which matches the
//! debounce granularity of the button anyway.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Signal for arm/disarm toggle requests
static TOGGLE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Requests an armed-state toggle (button task side)
pub fn request_toggle() {
    TOGGLE.signal(());
}

/// Consumes a pending toggle request, if any (transmit loop side)
pub fn take_toggle() -> bool {
    TOGGLE.try_take().is_some()
}
