// Navigation properties of the wheel state

use keywheel_wasm::models::{Command, Direction, PitchClass, WheelState};

#[test]
fn test_chromatic_steps_land_on_expected_pitch_class() {
    for d in -30i64..=30 {
        let direction = if d < 0 { Direction::Left } else { Direction::Right };
        let mut state = WheelState::new();
        for _ in 0..d.abs() {
            state = state.step_chromatic(direction);
        }
        let expected = (((d % 12) + 12) % 12) as usize;
        assert_eq!(state.pitch_class.index(), expected, "after {} steps", d);
        assert_eq!(state.chromatic_angle, d as f64 * 30.0);
    }
}

#[test]
fn test_twelve_fifths_return_home() {
    for start in PitchClass::ALL {
        let initial = WheelState::at(start);
        let mut state = initial;
        for _ in 0..12 {
            state = state.step_fifths(Direction::Right);
        }
        assert_eq!(state.pitch_class, start);
        assert_eq!(state.fifths_angle - initial.fifths_angle, 360.0);
        assert_eq!(state.fifths_angle % 360.0, initial.fifths_angle % 360.0);
    }

    let mut state = WheelState::new();
    for _ in 0..12 {
        state = state.step_fifths(Direction::Right);
    }
    assert_eq!(state.fifths_angle % 360.0, 0.0);
}

#[test]
fn test_right_then_left_is_identity() {
    let start = WheelState::new();
    for command in [Command::RotateChromaticRight, Command::RotateFifthsRight] {
        let back = match command {
            Command::RotateChromaticRight => Command::RotateChromaticLeft,
            _ => Command::RotateFifthsLeft,
        };
        let mut state = start;
        for _ in 0..5 {
            state = state.apply(command);
        }
        for _ in 0..5 {
            state = state.apply(back);
        }
        assert_eq!(state, start, "{:?} then {:?}", command, back);
    }
}

#[test]
fn test_mixed_navigation_keeps_dials_in_sync() {
    let commands = [
        Command::RotateChromaticRight,
        Command::RotateFifthsLeft,
        Command::RotateFifthsLeft,
        Command::RotateChromaticLeft,
        Command::RotateChromaticLeft,
        Command::RotateFifthsRight,
        Command::RotateChromaticRight,
    ];
    let mut state = WheelState::new();
    for command in commands {
        let next = state.apply(command);
        // Whichever dial was not stepped moves by at most half a turn
        assert!((next.chromatic_angle - state.chromatic_angle).abs() <= 180.0);
        assert!((next.fifths_angle - state.fifths_angle).abs() <= 180.0);
        // Both dials always show the current pitch class at the anchor
        let home = WheelState::at(next.pitch_class);
        assert_eq!((next.chromatic_angle - home.chromatic_angle) % 360.0, 0.0);
        assert_eq!((next.fifths_angle - home.fifths_angle) % 360.0, 0.0);
        state = next;
    }
}

#[test]
fn test_wrapping_past_c_does_not_spin_backwards() {
    // C -> B is one step left, not eleven steps right
    let state = WheelState::new().step_chromatic(Direction::Left);
    assert_eq!(state.pitch_class, PitchClass::B);
    assert_eq!(state.chromatic_angle, -30.0);

    // B -> C continues the same way round
    let state = WheelState::at(PitchClass::B).step_chromatic(Direction::Right);
    assert_eq!(state.pitch_class, PitchClass::C);
    assert_eq!(state.chromatic_angle, 360.0);
}
