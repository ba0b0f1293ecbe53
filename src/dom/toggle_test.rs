use super::*;
use crate::dom::Host;
use crate::dom::fake_test::{FakeDocument, FakePanel, FakeTrigger};

// =============================================================
// Helpers
// =============================================================

fn toggle_for(doc: &FakeDocument) -> DropdownToggle<FakeTrigger, FakePanel> {
    let config = DropdownConfig::default();
    let trigger = doc.trigger(&config.trigger_id).unwrap();
    let panel = doc.panel(&config.panel_id).unwrap();
    DropdownToggle::attach(trigger, panel, config).unwrap()
}

// =============================================================
// attach
// =============================================================

#[test]
fn attach_requires_both_handles() {
    let doc = FakeDocument::login_page();
    let config = DropdownConfig::default();

    let missing_trigger = DropdownToggle::attach(None::<FakeTrigger>, doc.panel("dropdownMenu").unwrap(), config.clone());
    assert!(missing_trigger.is_none());

    let missing_panel = DropdownToggle::attach(doc.trigger("loginBtn").unwrap(), None::<FakePanel>, config.clone());
    assert!(missing_panel.is_none());

    let neither = DropdownToggle::<FakeTrigger, FakePanel>::attach(None, None, config);
    assert!(neither.is_none());
}

#[test]
fn attach_does_not_touch_panel() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);
    assert_eq!(doc.display_of("dropdownMenu"), "");
    assert_eq!(toggle.visibility().unwrap(), Visibility::Hidden);
}

// =============================================================
// on_trigger_activation
// =============================================================

#[test]
fn trigger_activation_opens_hidden_panel() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);

    assert_eq!(toggle.on_trigger_activation().unwrap(), Visibility::Shown);
    assert_eq!(doc.display_of("dropdownMenu"), "block");
}

#[test]
fn trigger_activation_closes_shown_panel() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    assert_eq!(toggle.on_trigger_activation().unwrap(), Visibility::Hidden);
    assert_eq!(doc.display_of("dropdownMenu"), "none");
}

#[test]
fn trigger_activation_reads_external_style_changes() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);

    toggle.on_trigger_activation().unwrap();
    doc.set_display_of("dropdownMenu", "none");
    assert_eq!(toggle.on_trigger_activation().unwrap(), Visibility::Shown);
}

#[test]
fn trigger_activation_uses_configured_display_pair() {
    let doc = FakeDocument::login_page();
    let config = DropdownConfig { shown_display: "flex".to_owned(), ..DropdownConfig::default() };
    let toggle = DropdownToggle::attach(doc.trigger("loginBtn").unwrap(), doc.panel("dropdownMenu").unwrap(), config)
        .unwrap();

    toggle.on_trigger_activation().unwrap();
    assert_eq!(doc.display_of("dropdownMenu"), "flex");
    toggle.on_trigger_activation().unwrap();
    assert_eq!(doc.display_of("dropdownMenu"), "none");
}

// =============================================================
// on_outside_activation / classify
// =============================================================

#[test]
fn outside_activation_closes_shown_panel() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    let content = doc.by_id("content");
    assert_eq!(toggle.on_outside_activation(Some(&content)).unwrap(), Visibility::Hidden);
    assert_eq!(doc.display_of("dropdownMenu"), "none");
}

#[test]
fn outside_activation_on_hidden_panel_is_idempotent() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);
    let body = doc.body();

    for _ in 0..3 {
        assert_eq!(toggle.on_outside_activation(Some(&body)).unwrap(), Visibility::Hidden);
    }
    assert_eq!(doc.display_of("dropdownMenu"), "none");
}

#[test]
fn outside_activation_inside_panel_closes_it() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    let panel = doc.by_id("dropdownMenu");
    assert_eq!(toggle.on_outside_activation(Some(&panel)).unwrap(), Visibility::Hidden);
}

#[test]
fn activation_on_trigger_is_never_outside() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    let button = doc.by_id("loginBtn");
    assert_eq!(toggle.classify(Some(&button)), Activation::Trigger);
    assert_eq!(toggle.on_outside_activation(Some(&button)).unwrap(), Visibility::Shown);
    assert_eq!(doc.display_of("dropdownMenu"), "block");
}

#[test]
fn activation_on_trigger_descendant_is_never_outside() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    let icon = doc.first_child(doc.by_id("loginBtn"));
    assert_eq!(toggle.classify(Some(&icon)), Activation::Trigger);
    assert_eq!(toggle.on_outside_activation(Some(&icon)).unwrap(), Visibility::Shown);
}

#[test]
fn missing_target_counts_as_outside() {
    let doc = FakeDocument::login_page();
    doc.set_display_of("dropdownMenu", "block");
    let toggle = toggle_for(&doc);

    assert_eq!(toggle.classify(None), Activation::Outside);
    assert_eq!(toggle.on_outside_activation(None).unwrap(), Visibility::Hidden);
}

#[test]
fn trigger_ancestor_is_outside() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);
    let body = doc.body();
    assert_eq!(toggle.classify(Some(&body)), Activation::Outside);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn style_failures_propagate() {
    let doc = FakeDocument::login_page();
    let toggle = toggle_for(&doc);
    doc.fail_styles(true);

    assert!(matches!(toggle.on_trigger_activation(), Err(DropdownError::Style(_))));
    let body = doc.body();
    assert!(matches!(toggle.on_outside_activation(Some(&body)), Err(DropdownError::Style(_))));
}
