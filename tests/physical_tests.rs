mod common;

use chordforge::geometry::{Finger, Hand, Keyboard};
use chordforge::physical::{PhysicalState, Tap};
use chordforge::typing::type_taps;
use chordforge::ChordError;
use common::{layout_from, tenkey, two_key, KeyBuilder};

#[test]
fn test_default_layer() {
    let mut state = PhysicalState::new(2);
    assert_eq!(state.current_layer(), 2);
    assert_eq!(state.default_layer(), 2);
    assert_eq!(state.pending_one_tap(), None);
}

#[test]
fn test_one_tap_is_read_once() {
    let mut state = PhysicalState::new(0);
    state.add_one_tap(3);
    assert_eq!(state.peek_layer(), 3);
    assert_eq!(state.pending_one_tap(), Some(3));

    assert_eq!(state.current_layer(), 3);
    assert_eq!(state.current_layer(), 0);
}

#[test]
fn test_busy_and_release() {
    let mut state = PhysicalState::new(0);
    state.busy_finger(Hand::Left, Finger::Index, 3, 1).unwrap();
    assert_eq!(state.is_finger_busy(Hand::Left, Finger::Index), Some(3));
    assert_eq!(state.is_finger_busy(Hand::Right, Finger::Index), None);
    assert_eq!(state.current_layer(), 1);

    state.unbusy_finger(Hand::Left, Finger::Index).unwrap();
    assert_eq!(state.is_finger_busy(Hand::Left, Finger::Index), None);
    assert_eq!(state.current_layer(), 0);
}

#[test]
fn test_double_busy_fails() {
    let mut state = PhysicalState::new(0);
    state.busy_finger(Hand::Left, Finger::Thumb, 4, 1).unwrap();
    let err = state.busy_finger(Hand::Left, Finger::Thumb, 4, 2).unwrap_err();
    assert!(matches!(err, ChordError::FingerAlreadyBusy { held: 4, .. }));
    // Failed call leaves the stack alone
    assert_eq!(state.current_layer(), 1);
}

#[test]
fn test_release_of_free_finger_fails() {
    let mut state = PhysicalState::new(0);
    let err = state.unbusy_finger(Hand::Right, Finger::Pinky).unwrap_err();
    assert!(matches!(err, ChordError::FingerNotBusy { .. }));
    assert_eq!(state.current_layer(), 0);
}

#[test]
fn test_release_removes_that_fingers_layer_not_the_top() {
    let mut state = PhysicalState::new(0);
    state.busy_finger(Hand::Left, Finger::Thumb, 4, 1).unwrap();
    state.busy_finger(Hand::Right, Finger::Thumb, 5, 2).unwrap();
    assert_eq!(state.current_layer(), 2);

    state.unbusy_finger(Hand::Left, Finger::Thumb).unwrap();
    assert_eq!(state.current_layer(), 2);

    state.unbusy_finger(Hand::Right, Finger::Thumb).unwrap();
    assert_eq!(state.current_layer(), 0);
}

#[test]
fn test_one_tap_overrides_held_layer() {
    let mut state = PhysicalState::new(0);
    state.busy_finger(Hand::Left, Finger::Thumb, 4, 1).unwrap();
    state.add_one_tap(3);
    assert_eq!(state.current_layer(), 3);
    assert_eq!(state.current_layer(), 1);
}

#[test]
fn test_two_key_hold_to_switch() {
    let layout = two_key();
    let mut state = PhysicalState::new(0);
    let taps = [Tap::down(1), Tap::once(0), Tap::up(1)];
    assert_eq!(type_taps(&layout, &taps, &mut state).unwrap(), "A");
    assert_eq!(state.current_layer(), 0);
}

#[test]
fn test_two_key_one_shot_switch() {
    let layout = two_key();
    let mut state = PhysicalState::new(0);
    let taps = [Tap::once(1), Tap::once(0), Tap::once(0)];
    assert_eq!(type_taps(&layout, &taps, &mut state).unwrap(), "Aa");
}

#[test]
fn test_hold_on_symbol_key_fails() {
    let layout = tenkey();
    let mut state = PhysicalState::new(0);
    let err = type_taps(&layout, &[Tap::down(0)], &mut state).unwrap_err();
    assert!(matches!(err, ChordError::NotAHoldKey { layer: 0, key: 0 }));
}

#[test]
fn test_release_without_hold_fails() {
    let layout = tenkey();
    let mut state = PhysicalState::new(0);
    let err = type_taps(&layout, &[Tap::up(5)], &mut state).unwrap_err();
    assert!(matches!(err, ChordError::FingerNotBusy { .. }));
}

#[test]
fn test_tap_with_busy_finger_fails() {
    let layout = tenkey();
    let mut state = PhysicalState::new(0);
    let taps = [Tap::down(5), Tap::once(5)];
    let err = type_taps(&layout, &taps, &mut state).unwrap_err();
    assert!(matches!(err, ChordError::FingerAlreadyBusy { held: 5, .. }));
}

#[test]
fn test_release_of_other_key_on_same_finger_fails() {
    let keys = vec![
        KeyBuilder::new(Hand::Left, Finger::Index).at(0.0).build(),
        KeyBuilder::new(Hand::Left, Finger::Index).at(1.0).build(),
    ];
    let layout = layout_from(
        Keyboard::new("shared_finger", keys),
        &[(0, 0, "①"), (0, 1, "x"), (1, 1, "X")],
    );
    let mut state = PhysicalState::new(0);
    let err = type_taps(&layout, &[Tap::down(0), Tap::up(1)], &mut state).unwrap_err();
    assert!(matches!(err, ChordError::KeyNotHeld { key: 1, held: 0, .. }));
}

#[test]
fn test_unknown_key_fails() {
    let layout = two_key();
    let mut state = PhysicalState::new(0);
    let err = type_taps(&layout, &[Tap::once(7)], &mut state).unwrap_err();
    assert!(matches!(err, ChordError::KeyOutOfRange { key: 7, size: 2 }));
}
