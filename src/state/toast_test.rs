use super::*;

// =============================================================
// ToastState defaults
// =============================================================

#[test]
fn toast_state_default_hidden() {
    let state = ToastState::default();
    assert!(!state.visible);
    assert!(state.message.is_empty());
    assert_eq!(state.kind, ToastKind::Success);
}

// =============================================================
// Show / dismiss
// =============================================================

#[test]
fn show_makes_toast_visible_with_message() {
    let mut state = ToastState::default();
    state.show("Sent!".to_owned(), ToastKind::Success);
    assert!(state.visible);
    assert_eq!(state.message, "Sent!");
    assert_eq!(state.kind, ToastKind::Success);
}

#[test]
fn dismiss_with_current_sequence_hides() {
    let mut state = ToastState::default();
    let seq = state.show("Sent!".to_owned(), ToastKind::Success);
    state.dismiss(seq);
    assert!(!state.visible);
}

#[test]
fn dismiss_with_stale_sequence_is_a_no_op() {
    let mut state = ToastState::default();
    let first = state.show("first".to_owned(), ToastKind::Success);
    let second = state.show("second".to_owned(), ToastKind::Error);
    assert_ne!(first, second);

    // The first toast's timer fires after being superseded.
    state.dismiss(first);
    assert!(state.visible);
    assert_eq!(state.message, "second");

    // Only the second toast's timer actually hides it.
    state.dismiss(second);
    assert!(!state.visible);
}

#[test]
fn each_show_bumps_the_sequence() {
    let mut state = ToastState::default();
    let a = state.show("a".to_owned(), ToastKind::Success);
    let b = state.show("b".to_owned(), ToastKind::Error);
    let c = state.show("c".to_owned(), ToastKind::Success);
    assert!(a < b && b < c);
}

#[test]
fn show_replaces_previous_kind_and_message() {
    let mut state = ToastState::default();
    state.show("ok".to_owned(), ToastKind::Success);
    state.show("boom".to_owned(), ToastKind::Error);
    assert_eq!(state.kind, ToastKind::Error);
    assert_eq!(state.message, "boom");
}
