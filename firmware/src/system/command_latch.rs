//! Receiver-side command latch
//!
//! Static instance of the coalescing receive cell, with access split by
//! role: the radio listen task can only latch new commands through
//! [`offer`], while the apply loop reads and clears through the handle
//! from [`latch`]. Only the newest unconsumed command is ever retained.

use rc_link::{Command, CommandLatch};

static PENDING: CommandLatch = CommandLatch::new();

/// Latches a received command, overwriting any unconsumed one.
///
/// Called only by the radio listen task.
pub fn offer(command: Command) {
    PENDING.offer(command);
}

/// Read-and-clear handle for the apply loop
pub fn latch() -> &'static CommandLatch {
    &PENDING
}
