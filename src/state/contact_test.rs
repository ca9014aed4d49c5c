use super::*;

// =============================================================
// ContactPayload
// =============================================================

#[test]
fn payload_trims_all_fields() {
    let payload = ContactPayload::from_fields("  Ada ", "ada@example.com\n", "  hi  ");
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.message, "hi");
}

#[test]
fn payload_allows_empty_fields() {
    let payload = ContactPayload::from_fields("   ", "", "");
    assert_eq!(payload, ContactPayload::default());
}

#[test]
fn payload_serializes_to_flat_json() {
    let payload = ContactPayload::from_fields("Ada", "ada@example.com", "hello");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello",
        })
    );
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn contact_state_default_idle() {
    let state = ContactState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert!(!state.is_sending());
}

#[test]
fn begin_enters_sending() {
    let mut state = ContactState::default();
    assert!(state.begin());
    assert!(state.is_sending());
}

#[test]
fn begin_while_sending_is_rejected() {
    let mut state = ContactState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.is_sending());
}

#[test]
fn finish_restores_idle_and_label() {
    let mut state = ContactState::default();
    state.begin();
    assert_eq!(state.submit_label(), "Sending...");
    state.finish();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.submit_label(), "Send Message");
}

#[test]
fn begin_works_again_after_finish() {
    let mut state = ContactState::default();
    state.begin();
    state.finish();
    assert!(state.begin());
}
