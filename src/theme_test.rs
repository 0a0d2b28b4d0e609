use super::*;

// =============================================================
// Preference resolution
// =============================================================

#[test]
fn stored_dark_wins_over_light_system() {
    assert!(resolve_preference(Some("true"), false));
}

#[test]
fn stored_light_wins_over_dark_system() {
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn nothing_stored_follows_the_system() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
}

#[test]
fn unrecognized_stored_value_reads_as_light() {
    assert!(!resolve_preference(Some("yes"), true));
    assert!(!resolve_preference(Some(""), true));
}
