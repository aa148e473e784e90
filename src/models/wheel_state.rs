//! Wheel state and navigation
//!
//! The state is a plain value: the current tonal centre plus the cumulative
//! rotation of each dial. Transitions take a state and return the next one.
//!
//! Angles are never normalized into 0..360. Stepping right then left must
//! rotate the dial back the short way, even across the B/C boundary, so the
//! dial that was stepped accumulates ±30° and the other dial is moved to the
//! equivalent angle nearest to where it already was.

use serde::{Deserialize, Serialize};

use crate::models::pitch_class::PitchClass;
use crate::models::theory::fifths_index;

/// Degrees between adjacent labels on either dial
pub const STEP_DEGREES: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dial {
    Chromatic,
    Fifths,
}

impl Dial {
    pub const ALL: [Dial; 2] = [Dial::Chromatic, Dial::Fifths];

    pub fn as_str(self) -> &'static str {
        match self {
            Dial::Chromatic => "chromatic",
            Dial::Fifths => "fifths",
        }
    }
}

/// The four navigation commands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    RotateChromaticLeft,
    RotateChromaticRight,
    RotateFifthsLeft,
    RotateFifthsRight,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::RotateChromaticLeft,
        Command::RotateChromaticRight,
        Command::RotateFifthsLeft,
        Command::RotateFifthsRight,
    ];

    pub fn dial(self) -> Dial {
        match self {
            Command::RotateChromaticLeft | Command::RotateChromaticRight => Dial::Chromatic,
            Command::RotateFifthsLeft | Command::RotateFifthsRight => Dial::Fifths,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Command::RotateChromaticLeft | Command::RotateFifthsLeft => Direction::Left,
            Command::RotateChromaticRight | Command::RotateFifthsRight => Direction::Right,
        }
    }

    /// DOM id of the button bound to this command
    pub fn button_id(self) -> &'static str {
        match self {
            Command::RotateChromaticLeft => "chromatic-rotate-left",
            Command::RotateChromaticRight => "chromatic-rotate-right",
            Command::RotateFifthsLeft => "fifths-rotate-left",
            Command::RotateFifthsRight => "fifths-rotate-right",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    pub pitch_class: PitchClass,
    /// Cumulative rotation of the chromatic dial, in degrees
    pub chromatic_angle: f64,
    /// Cumulative rotation of the fifths dial, in degrees
    pub fifths_angle: f64,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State centred on `pitch_class` with both dials at their base angles
    pub fn at(pitch_class: PitchClass) -> Self {
        Self {
            pitch_class,
            chromatic_angle: chromatic_base_angle(pitch_class),
            fifths_angle: fifths_base_angle(pitch_class),
        }
    }

    /// Move one semitone around the chromatic dial
    pub fn step_chromatic(self, direction: Direction) -> Self {
        let sign = direction.sign();
        let pitch_class = self.pitch_class.transpose(sign);
        Self {
            pitch_class,
            chromatic_angle: self.chromatic_angle + sign as f64 * STEP_DEGREES,
            fifths_angle: nearest_equivalent(fifths_base_angle(pitch_class), self.fifths_angle),
        }
    }

    /// Move one fifth around the fifths dial
    pub fn step_fifths(self, direction: Direction) -> Self {
        let sign = direction.sign();
        let pitch_class = self.pitch_class.transpose(sign * 7);
        Self {
            pitch_class,
            chromatic_angle: nearest_equivalent(chromatic_base_angle(pitch_class), self.chromatic_angle),
            fifths_angle: self.fifths_angle + sign as f64 * STEP_DEGREES,
        }
    }

    pub fn apply(self, command: Command) -> Self {
        match command.dial() {
            Dial::Chromatic => self.step_chromatic(command.direction()),
            Dial::Fifths => self.step_fifths(command.direction()),
        }
    }

    pub fn angle(&self, dial: Dial) -> f64 {
        match dial {
            Dial::Chromatic => self.chromatic_angle,
            Dial::Fifths => self.fifths_angle,
        }
    }
}

fn chromatic_base_angle(pc: PitchClass) -> f64 {
    pc.index() as f64 * STEP_DEGREES
}

fn fifths_base_angle(pc: PitchClass) -> f64 {
    fifths_index(pc) as f64 * STEP_DEGREES
}

/// `base + k*360` for the integer k that lands closest to `previous`
pub fn nearest_equivalent(base: f64, previous: f64) -> f64 {
    let turns = ((previous - base) / 360.0).round();
    base + turns * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_equivalent() {
        assert_eq!(nearest_equivalent(330.0, 0.0), -30.0);
        assert_eq!(nearest_equivalent(30.0, 0.0), 30.0);
        assert_eq!(nearest_equivalent(0.0, 720.0), 720.0);
        assert_eq!(nearest_equivalent(210.0, -60.0), -150.0);
    }

    #[test]
    fn test_chromatic_left_from_c_wraps_to_b() {
        let state = WheelState::new().step_chromatic(Direction::Left);
        assert_eq!(state.pitch_class, PitchClass::B);
        assert_eq!(state.chromatic_angle, -30.0);
        // B sits at fifths position 5 (150°); nearest to 0 is 150 itself
        assert_eq!(state.fifths_angle, 150.0);
    }

    #[test]
    fn test_fifths_left_from_c_goes_short_way() {
        let state = WheelState::new().step_fifths(Direction::Left);
        assert_eq!(state.pitch_class, PitchClass::F);
        assert_eq!(state.fifths_angle, -30.0);
        // F is 150° on the chromatic dial
        assert_eq!(state.chromatic_angle, 150.0);
    }

    #[test]
    fn test_chromatic_resync_keeps_fifths_dial_close() {
        // Walk around twice to the right; the fifths dial never jumps a full turn
        let mut state = WheelState::new();
        for _ in 0..24 {
            let next = state.step_chromatic(Direction::Right);
            assert!((next.fifths_angle - state.fifths_angle).abs() <= 180.0);
            state = next;
        }
        assert_eq!(state.pitch_class, PitchClass::C);
        assert_eq!(state.chromatic_angle, 720.0);
    }

    #[test]
    fn test_apply_matches_steps() {
        let state = WheelState::at(PitchClass::D);
        assert_eq!(
            state.apply(Command::RotateFifthsRight),
            state.step_fifths(Direction::Right)
        );
        assert_eq!(
            state.apply(Command::RotateChromaticLeft),
            state.step_chromatic(Direction::Left)
        );
    }

    #[test]
    fn test_at_uses_base_angles() {
        let state = WheelState::at(PitchClass::G);
        assert_eq!(state.chromatic_angle, 210.0);
        assert_eq!(state.fifths_angle, 30.0);
    }
}
