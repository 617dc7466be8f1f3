//! Directional command protocol
//!
//! A command is one symbol per movement axis, sent on the wire as two
//! ASCII bytes: position 0 is the longitudinal symbol (`F`/`B`/`-`),
//! position 1 the lateral symbol (`L`/`R`/`-`). `"--"` is full stop.
//!
//! The parser fails closed: a short payload or a byte outside the
//! per-position alphabet yields [`Neutral`](LongitudinalSymbol::Neutral)
//! for that axis. There is no error type anywhere in this module; every
//! input maps to a valid command and a corrupted payload can at worst
//! stop an axis, never drive opposing outputs.

/// Symbol for the longitudinal (forward/backward) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LongitudinalSymbol {
    Forward,
    Backward,
    Neutral,
}

impl LongitudinalSymbol {
    /// Parses a wire byte, mapping anything unrecognized to `Neutral`
    fn from_wire(byte: u8) -> Self {
        match byte {
            b'F' => Self::Forward,
            b'B' => Self::Backward,
            _ => Self::Neutral,
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            Self::Forward => b'F',
            Self::Backward => b'B',
            Self::Neutral => b'-',
        }
    }
}

/// Symbol for the lateral (left/right) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LateralSymbol {
    Left,
    Right,
    Neutral,
}

impl LateralSymbol {
    /// Parses a wire byte, mapping anything unrecognized to `Neutral`
    fn from_wire(byte: u8) -> Self {
        match byte {
            b'L' => Self::Left,
            b'R' => Self::Right,
            _ => Self::Neutral,
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            Self::Left => b'L',
            Self::Right => b'R',
            Self::Neutral => b'-',
        }
    }
}

/// A 2-symbol directional command, one symbol per movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub longitudinal: LongitudinalSymbol,
    pub lateral: LateralSymbol,
}

impl Command {
    /// Full stop, `"--"` on the wire. All four actuators off.
    pub const STOP: Command = Command {
        longitudinal: LongitudinalSymbol::Neutral,
        lateral: LateralSymbol::Neutral,
    };

    /// Quantizes two tilt readings into a command.
    ///
    /// Each axis is compared against the same sensitivity threshold:
    /// strictly below `-threshold` or strictly above `threshold`
    /// selects a direction, the closed band `[-threshold, threshold]`
    /// is neutral. Tilting towards the body (negative longitudinal)
    /// drives forward, matching the hand-held orientation of the
    /// controller.
    pub fn from_tilt(longitudinal: i32, lateral: i32, threshold: i32) -> Self {
        let longitudinal = if longitudinal < -threshold {
            LongitudinalSymbol::Forward
        } else if longitudinal > threshold {
            LongitudinalSymbol::Backward
        } else {
            LongitudinalSymbol::Neutral
        };

        let lateral = if lateral < -threshold {
            LateralSymbol::Left
        } else if lateral > threshold {
            LateralSymbol::Right
        } else {
            LateralSymbol::Neutral
        };

        Command {
            longitudinal,
            lateral,
        }
    }

    /// Parses a received payload, failing closed per axis.
    ///
    /// Missing positions count as unrecognized, so a truncated or empty
    /// payload degrades towards [`Command::STOP`] instead of erroring.
    pub fn from_wire(payload: &[u8]) -> Self {
        Command {
            longitudinal: payload
                .first()
                .map(|&b| LongitudinalSymbol::from_wire(b))
                .unwrap_or(LongitudinalSymbol::Neutral),
            lateral: payload
                .get(1)
                .map(|&b| LateralSymbol::from_wire(b))
                .unwrap_or(LateralSymbol::Neutral),
        }
    }

    /// Encodes the command as its 2-byte wire payload
    pub fn to_wire(self) -> [u8; 2] {
        [self.longitudinal.to_wire(), self.lateral.to_wire()]
    }

    /// Projects the command onto the four actuator channels.
    ///
    /// Pure and idempotent; the receiver re-runs this every apply tick
    /// whether or not the command changed.
    pub fn actuators(self) -> ActuatorState {
        ActuatorState {
            forward: self.longitudinal == LongitudinalSymbol::Forward,
            backward: self.longitudinal == LongitudinalSymbol::Backward,
            left: self.lateral == LateralSymbol::Left,
            right: self.lateral == LateralSymbol::Right,
        }
    }
}

/// Levels for the four binary actuator channels.
///
/// At most one of `forward`/`backward` and at most one of `left`/`right`
/// is set, guaranteed by the symbol enums rather than checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl ActuatorState {
    /// All four channels off
    pub const ALL_OFF: ActuatorState = ActuatorState {
        forward: false,
        backward: false,
        left: false,
        right: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i32 = 200;

    #[test]
    fn tilt_encoding_covers_all_nine_commands() {
        let readings = [-300, 0, 300];
        let mut seen = [[false; 3]; 3];
        for (i, &lon) in readings.iter().enumerate() {
            for (j, &lat) in readings.iter().enumerate() {
                let cmd = Command::from_tilt(lon, lat, T);
                // Same inputs, same command
                assert_eq!(cmd, Command::from_tilt(lon, lat, T));
                seen[i][j] = true;
                let wire = cmd.to_wire();
                assert!(matches!(wire[0], b'F' | b'B' | b'-'));
                assert!(matches!(wire[1], b'L' | b'R' | b'-'));
            }
        }
        assert!(seen.iter().flatten().all(|&s| s));
    }

    #[test]
    fn threshold_boundary_is_neutral_on_both_axes() {
        assert_eq!(
            Command::from_tilt(-T, 0, T).longitudinal,
            LongitudinalSymbol::Neutral
        );
        assert_eq!(
            Command::from_tilt(T, 0, T).longitudinal,
            LongitudinalSymbol::Neutral
        );
        assert_eq!(Command::from_tilt(0, -T, T).lateral, LateralSymbol::Neutral);
        assert_eq!(Command::from_tilt(0, T, T).lateral, LateralSymbol::Neutral);
        // One past the boundary triggers motion
        assert_eq!(
            Command::from_tilt(-T - 1, T + 1, T),
            Command {
                longitudinal: LongitudinalSymbol::Forward,
                lateral: LateralSymbol::Right,
            }
        );
    }

    #[test]
    fn wire_parse_fails_closed() {
        assert_eq!(Command::from_wire(b""), Command::STOP);
        assert_eq!(Command::from_wire(b"F"), Command {
            longitudinal: LongitudinalSymbol::Forward,
            lateral: LateralSymbol::Neutral,
        });
        assert_eq!(Command::from_wire(b"??"), Command::STOP);
        // Trailing garbage beyond the two positions is ignored
        assert_eq!(Command::from_wire(b"-Rxx"), Command {
            longitudinal: LongitudinalSymbol::Neutral,
            lateral: LateralSymbol::Right,
        });
    }

    #[test]
    fn corrupted_payload_cannot_drive_opposing_actuators() {
        // A direction byte in the wrong position is not a lateral
        // symbol, so "FB" is forward-only rather than forward+backward.
        let acts = Command::from_wire(b"FB").actuators();
        assert!(acts.forward);
        assert!(!acts.backward);
        assert!(!acts.left);
        assert!(!acts.right);

        // And per axis the enum makes opposing outputs unrepresentable.
        let acts = Command::from_wire(b"BL").actuators();
        assert!(acts.backward && !acts.forward);
        assert!(acts.left && !acts.right);
    }

    #[test]
    fn projection_is_idempotent() {
        let cmd = Command::from_wire(b"FR");
        assert_eq!(cmd.actuators(), cmd.actuators());
    }

    #[test]
    fn stop_projects_to_all_off() {
        assert_eq!(Command::STOP.actuators(), ActuatorState::ALL_OFF);
        assert_eq!(Command::STOP.to_wire(), *b"--");
    }
}
