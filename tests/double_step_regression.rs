//! Regression tests for rotor stepping and the middle-rotor double-step.
//!
//! The machine checks the middle notch before the right notch and always
//! steps the right rotor last. These tests pin that order so it is not
//! "corrected" into a different stepping scheme by accident.

use enigma_sim::Machine;

fn machine_at(positions: [usize; 3]) -> Machine {
    Machine::new(&[0, 1, 2], &positions, &[0, 0, 0], &[]).unwrap()
}

/// 25 letters from AAA: the right rotor moves 25 times and carries the
/// middle rotor once, on the keystroke where it leaves V.
#[test]
fn twenty_five_letters_from_origin() {
    let mut machine = machine_at([0, 0, 0]);
    let cipher = machine.process(&"A".repeat(25));
    assert_eq!(cipher, "BDZGOWCXLTKSBTMCDLPBMUQOF");
    assert_eq!(machine.positions(), [0, 1, 25]);
}

/// Replays the stepping rules independently and checks every keystroke.
#[test]
fn stepping_matches_notch_rules_per_keystroke() {
    const NOTCH_MIDDLE: usize = 4; // E on rotor II
    const NOTCH_RIGHT: usize = 21; // V on rotor III

    let mut machine = machine_at([0, 0, 0]);
    let mut expected = [0usize, 0, 0];
    for _ in 0..2000 {
        let [l, m, r] = expected;
        if m == NOTCH_MIDDLE {
            expected = [(l + 1) % 26, (m + 1) % 26, r];
        } else if r == NOTCH_RIGHT {
            expected = [l, (m + 1) % 26, r];
        }
        expected[2] = (expected[2] + 1) % 26;

        machine.encrypt_char('X');
        assert_eq!(machine.positions(), expected);
    }
}

/// ADU -> ADV -> AEW -> BFX: the middle rotor moves on two consecutive
/// keystrokes.
#[test]
fn middle_rotor_double_steps() {
    let mut machine = machine_at([0, 3, 20]);
    let windows: Vec<String> = (0..3)
        .map(|_| {
            machine.encrypt_char('A');
            machine.window()
        })
        .collect();
    assert_eq!(windows, vec!["ADV", "AEW", "BFX"]);
}

/// Left rotor only ever moves together with the middle rotor.
#[test]
fn left_rotor_moves_only_with_middle() {
    let mut machine = machine_at([0, 0, 0]);
    let mut previous = machine.positions();
    for _ in 0..5000 {
        machine.encrypt_char('Q');
        let current = machine.positions();
        if current[0] != previous[0] {
            assert_ne!(current[1], previous[1]);
        }
        previous = current;
    }
}

/// 1000 letters from AAA end at a fixed window.
#[test]
fn long_run_final_positions() {
    let mut machine = machine_at([0, 0, 0]);
    machine.process(&"A".repeat(1000));
    assert_eq!(machine.positions(), [2, 14, 12]);
}

/// The right rotor wraps from Z back to A.
#[test]
fn positions_wrap_at_z() {
    let mut machine = Machine::new(&[2, 2, 2], &[25, 25, 25], &[0, 0, 0], &[]).unwrap();
    machine.encrypt_char('A');
    assert_eq!(machine.positions(), [25, 25, 0]);
}

/// Turnover across the left rotor's own notch changes nothing: only the
/// middle and right notches drive stepping.
#[test]
fn left_notch_is_ignored() {
    let mut machine = machine_at([16, 4, 21]);
    assert_eq!(machine.process("AAA"), "LNP");
    assert_eq!(machine.positions(), [17, 5, 24]);
}
