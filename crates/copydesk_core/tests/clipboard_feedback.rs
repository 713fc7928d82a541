use copydesk_core::ClipboardFeedback;

#[test]
fn trigger_activates_and_matching_expiry_resets() {
    let mut feedback = ClipboardFeedback::default();
    assert!(!feedback.is_active());

    let token = feedback.trigger();
    assert!(feedback.is_active());

    assert!(feedback.expire(token));
    assert!(!feedback.is_active());
}

#[test]
fn retrigger_invalidates_earlier_expiry() {
    let mut feedback = ClipboardFeedback::default();
    let first = feedback.trigger();
    let second = feedback.trigger();
    assert_ne!(first, second);

    assert!(!feedback.expire(first));
    assert!(feedback.is_active());

    assert!(feedback.expire(second));
    assert!(!feedback.is_active());
}

#[test]
fn expiry_when_inactive_is_ignored() {
    let mut feedback = ClipboardFeedback::default();
    let token = feedback.trigger();
    assert!(feedback.expire(token));
    assert!(!feedback.expire(token));
}
