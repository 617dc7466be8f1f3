//! Per-node control state and the coalescing receive latch
//!
//! The receiver runs two tasks: a radio listener that parses inbound
//! payloads and a drive loop that applies the current command to the
//! actuators every tick. They meet in [`CommandLatch`], a
//! single-producer/single-consumer cell that only ever retains the
//! newest command. The listener gets the write side, the drive loop the
//! read-and-clear side, and neither can touch the other's half.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::command::{ActuatorState, Command};

/// Coalescing cell for the most recently received command.
///
/// Arrivals overwrite: if several commands land between two apply
/// ticks, only the last survives and the earlier ones are silently
/// dropped. That is backpressure by coalescing, never by buffering.
pub struct CommandLatch {
    pending: Signal<CriticalSectionRawMutex, Command>,
}

impl CommandLatch {
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
        }
    }

    /// Latches a newly received command, replacing any unconsumed one.
    ///
    /// Sole caller is the radio listen task.
    pub fn offer(&self, command: Command) {
        self.pending.signal(command);
    }

    /// Takes the pending command, leaving the latch empty.
    ///
    /// Sole caller is the apply loop, once per tick.
    pub fn try_take(&self) -> Option<Command> {
        self.pending.try_take()
    }
}

/// Receiver-side control state, owned by the apply loop.
///
/// `current` holds the last command ever promoted from the latch and
/// starts at [`Command::STOP`], so a receiver that never hears from the
/// transmitter idles with every actuator off.
pub struct ReceiverState {
    current: Command,
}

impl ReceiverState {
    pub const fn new() -> Self {
        Self {
            current: Command::STOP,
        }
    }

    /// One apply tick: promote a pending command if there is one, then
    /// project the current command.
    ///
    /// The projection runs whether or not anything changed; the caller
    /// re-asserts the outputs from the returned state every tick, which
    /// is what heals a physical output that drifted from the logical
    /// one.
    pub fn poll(&mut self, latch: &CommandLatch) -> ActuatorState {
        if let Some(command) = latch.try_take() {
            self.current = command;
        }
        self.current.actuators()
    }

    /// The command currently being applied
    pub fn current(&self) -> Command {
        self.current
    }
}

/// Transmitter-side control state, owned by the transmit loop.
///
/// Starts disarmed; while disarmed the tilt readings are ignored
/// entirely and every tick broadcasts full stop.
pub struct TransmitterState {
    armed: bool,
}

impl TransmitterState {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Flips the armed state on a button press edge, returning the new
    /// state
    pub fn toggle_armed(&mut self) -> bool {
        self.armed = !self.armed;
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The command to broadcast this tick: the encoded tilt when armed,
    /// full stop otherwise
    pub fn command(&self, longitudinal: i32, lateral: i32, threshold: i32) -> Command {
        if self.armed {
            Command::from_tilt(longitudinal, lateral, threshold)
        } else {
            Command::STOP
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i32 = 200;

    #[test]
    fn safe_default_with_no_messages() {
        let latch = CommandLatch::new();
        let mut state = ReceiverState::new();
        for _ in 0..3 {
            assert_eq!(state.poll(&latch), ActuatorState::ALL_OFF);
        }
        assert_eq!(state.current(), Command::STOP);
    }

    #[test]
    fn latch_coalesces_to_last_arrival() {
        let latch = CommandLatch::new();
        let mut state = ReceiverState::new();

        latch.offer(Command::from_wire(b"F-"));
        latch.offer(Command::from_wire(b"B-"));
        latch.offer(Command::from_wire(b"-L"));

        let acts = state.poll(&latch);
        assert_eq!(state.current(), Command::from_wire(b"-L"));
        assert!(acts.left && !acts.forward && !acts.backward && !acts.right);
        // The overwritten commands are gone for good
        assert!(latch.try_take().is_none());
    }

    #[test]
    fn holds_last_command_indefinitely() {
        let latch = CommandLatch::new();
        let mut state = ReceiverState::new();

        latch.offer(Command::from_wire(b"FR"));
        let first = state.poll(&latch);
        assert!(first.forward && first.right);

        // No further arrivals; every subsequent tick keeps driving it
        for _ in 0..10 {
            assert_eq!(state.poll(&latch), first);
        }
    }

    #[test]
    fn disarmed_transmitter_always_sends_stop() {
        let state = TransmitterState::new();
        assert!(!state.is_armed());
        assert_eq!(state.command(-300, 300, T), Command::STOP);
    }

    #[test]
    fn arming_gates_the_encoder() {
        let mut state = TransmitterState::new();
        assert!(state.toggle_armed());
        assert_eq!(state.command(-300, 0, T), Command::from_wire(b"F-"));
        // Disarming forces stop on the very next tick
        assert!(!state.toggle_armed());
        assert_eq!(state.command(-300, 0, T), Command::STOP);
    }

    #[test]
    fn end_to_end_command_sequence() {
        let mut tx = TransmitterState::new();
        let latch = CommandLatch::new();
        let mut rx = ReceiverState::new();

        // (armed, x=-300, y=0) then (disarmed) then (armed, x=0, y=300)
        tx.toggle_armed();
        let sent = [
            tx.command(-300, 0, T),
            {
                tx.toggle_armed();
                tx.command(-300, 0, T)
            },
            {
                tx.toggle_armed();
                tx.command(0, 300, T)
            },
        ];

        let mut observed = [ActuatorState::ALL_OFF; 3];
        for (i, command) in sent.iter().enumerate() {
            latch.offer(Command::from_wire(&command.to_wire()));
            observed[i] = rx.poll(&latch);
        }

        assert_eq!(sent[0].to_wire(), *b"F-");
        assert_eq!(sent[1].to_wire(), *b"--");
        assert_eq!(sent[2].to_wire(), *b"-R");

        assert!(observed[0].forward && !observed[0].backward);
        assert_eq!(observed[1], ActuatorState::ALL_OFF);
        assert!(observed[2].right && !observed[2].left && !observed[2].forward);
    }
}
