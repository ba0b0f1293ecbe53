use super::*;

// =============================================================
// Visibility
// =============================================================

#[test]
fn visibility_default_is_hidden() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
}

#[test]
fn toggled_inverts_both_ways() {
    assert_eq!(Visibility::Hidden.toggled(), Visibility::Shown);
    assert_eq!(Visibility::Shown.toggled(), Visibility::Hidden);
}

#[test]
fn is_shown_only_for_shown() {
    assert!(Visibility::Shown.is_shown());
    assert!(!Visibility::Hidden.is_shown());
}

// =============================================================
// Display encoding
// =============================================================

#[test]
fn from_display_recognizes_shown_value() {
    let config = DropdownConfig::default();
    assert_eq!(Visibility::from_display("block", &config), Visibility::Shown);
    assert_eq!(Visibility::from_display("none", &config), Visibility::Hidden);
}

#[test]
fn from_display_treats_unset_as_hidden() {
    let config = DropdownConfig::default();
    assert_eq!(Visibility::from_display("", &config), Visibility::Hidden);
}

#[test]
fn from_display_treats_foreign_values_as_hidden() {
    let config = DropdownConfig::default();
    assert_eq!(Visibility::from_display("flex", &config), Visibility::Hidden);
    assert_eq!(Visibility::from_display("inline-block", &config), Visibility::Hidden);
}

#[test]
fn display_value_uses_configured_pair() {
    let config = DropdownConfig {
        shown_display: "flex".to_owned(),
        hidden_display: String::new(),
        ..DropdownConfig::default()
    };
    assert_eq!(Visibility::Shown.display_value(&config), "flex");
    assert_eq!(Visibility::Hidden.display_value(&config), "");
    assert_eq!(Visibility::from_display("flex", &config), Visibility::Shown);
}

// =============================================================
// transition
// =============================================================

#[test]
fn trigger_activation_inverts() {
    for state in [Visibility::Hidden, Visibility::Shown] {
        assert_eq!(transition(state, Activation::Trigger), state.toggled());
    }
}

#[test]
fn two_trigger_activations_restore_state() {
    for state in [Visibility::Hidden, Visibility::Shown] {
        let once = transition(state, Activation::Trigger);
        assert_eq!(transition(once, Activation::Trigger), state);
    }
}

#[test]
fn outside_activation_always_hides() {
    assert_eq!(transition(Visibility::Shown, Activation::Outside), Visibility::Hidden);
    assert_eq!(transition(Visibility::Hidden, Activation::Outside), Visibility::Hidden);
}

#[test]
fn repeated_outside_activations_stay_hidden() {
    let mut state = Visibility::Hidden;
    for _ in 0..5 {
        state = transition(state, Activation::Outside);
        assert_eq!(state, Visibility::Hidden);
    }
}
