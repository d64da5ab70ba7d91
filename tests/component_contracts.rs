//! Integration tests for the component contracts.
//!
//! These tests verify the cross-module behavior of the component set:
//! style resolution, identifier wiring, error/helper precedence, and the
//! password visibility round trip. Each component module contains its own
//! unit tests for detailed logic.

use pretty_assertions::assert_eq;

use coreframe::ui::accessibility::{description_for, Role};
use coreframe::ui::components::{
    input, ButtonStyle, ButtonVariant, ControlSize, FieldId, FieldStyle, FieldVariant, InputKind,
    Select, SelectOption, TextArea, TextFieldState,
};
use coreframe::ui::theme::ThemeColors;

// ============================================================================
// Style Resolution
// ============================================================================

#[test]
fn field_styles_are_pure_functions_of_their_inputs() {
    let colors = ThemeColors::light();

    for variant in [FieldVariant::Outline, FieldVariant::Filled] {
        for size in [ControlSize::Sm, ControlSize::Md, ControlSize::Lg] {
            for disabled in [false, true] {
                for has_error in [false, true] {
                    let a = FieldStyle::resolve(variant, size, disabled, has_error, &colors);
                    let b = FieldStyle::resolve(variant, size, disabled, has_error, &colors);
                    assert_eq!(a, b);
                }
            }
        }
    }
}

#[test]
fn error_presence_overrides_every_variant_border() {
    let colors = ThemeColors::dark();
    for variant in [FieldVariant::Outline, FieldVariant::Filled] {
        let style = FieldStyle::resolve(variant, ControlSize::Lg, false, true, &colors);
        assert_eq!(style.border, colors.error);
    }
}

#[test]
fn disabled_wins_over_error_for_interactivity() {
    let colors = ThemeColors::light();
    let style = FieldStyle::resolve(FieldVariant::Outline, ControlSize::Md, true, true, &colors);
    assert!(!style.interactive);
    assert_eq!(style.opacity, 0.5);
    // The error border still shows through
    assert_eq!(style.border, colors.error);
}

#[test]
fn omitting_size_matches_explicit_medium() {
    let colors = ThemeColors::light();

    let implicit = ButtonStyle::resolve(
        ButtonVariant::default(),
        ControlSize::default(),
        false,
        &colors,
    );
    let explicit = ButtonStyle::resolve(ButtonVariant::Primary, ControlSize::Md, false, &colors);
    assert_eq!(implicit, explicit);
}

// ============================================================================
// Identifier Wiring
// ============================================================================

#[test]
fn explicit_identifier_survives_unchanged() {
    let id = FieldId::resolve(Some("signup-email"), "input");
    assert_eq!(id.as_str(), "signup-email");
    assert_eq!(id.error_id().as_ref(), "signup-email-error");
}

#[test]
fn generated_identifiers_are_prefixed_and_distinct() {
    let a = FieldId::resolve(None::<&str>, "input");
    let b = FieldId::resolve(None::<&str>, "input");
    assert!(a.as_str().starts_with("input-"));
    assert_ne!(a, b);
}

#[test]
fn state_identifier_is_stable_across_reads() {
    let state = TextFieldState::new(None::<&str>);
    let first = state.id().to_shared();
    let second = state.id().to_shared();
    assert_eq!(first, second);
}

#[test]
fn description_reference_prefers_error_over_helper() {
    let id = FieldId::resolve(Some("age"), "input");

    let both = description_for(&id, Some("Must be a number"), Some("Your age"));
    assert_eq!(both.as_deref().map(|v| &**v), Some("age-error"));

    let helper_only = description_for(&id, None, Some("Your age"));
    assert_eq!(helper_only.as_deref().map(|v| &**v), Some("age-helper"));

    assert_eq!(description_for(&id, None, None), None);
}

// ============================================================================
// Password Visibility
// ============================================================================

#[test]
fn password_toggle_round_trip() {
    let mut state = TextFieldState::with_value(None::<&str>, "secret123");

    // hidden -> revealed -> hidden, value untouched at every step
    assert_eq!(
        input::effective_kind(InputKind::Password, true, state.revealed()),
        InputKind::Password
    );
    assert_eq!(state.buffer().text(), "secret123");

    state.toggle_visibility();
    assert_eq!(
        input::effective_kind(InputKind::Password, true, state.revealed()),
        InputKind::Text
    );
    assert_eq!(state.buffer().text(), "secret123");

    state.toggle_visibility();
    assert_eq!(
        input::effective_kind(InputKind::Password, true, state.revealed()),
        InputKind::Password
    );
    assert_eq!(state.buffer().text(), "secret123");
}

#[test]
fn toggle_only_renders_for_opted_in_password_fields() {
    assert!(input::toggle_eligible(InputKind::Password, true));
    assert!(!input::toggle_eligible(InputKind::Password, false));
    assert!(!input::toggle_eligible(InputKind::Email, true));
}

#[test]
fn toggle_always_wins_the_right_inset() {
    let slot = input::resolve_right_slot(InputKind::Password, true, Some("\u{2713}".into()));
    assert_eq!(slot, input::RightSlot::Toggle);
}

#[test]
fn toggle_announcement_follows_state() {
    let mut state = TextFieldState::new(None::<&str>);
    let a11y = state.toggle_accessible();
    assert_eq!(a11y.role, Role::Button);
    assert_eq!(a11y.name.as_deref().map(|v| &**v), Some("Show password"));

    state.toggle_visibility();
    assert_eq!(
        state.toggle_accessible().name.as_deref().map(|v| &**v),
        Some("Hide password")
    );
}

// ============================================================================
// Field Components
// ============================================================================

#[test]
fn select_places_placeholder_first_and_disabled() {
    let select = Select::new(
        FieldId::resolve(Some("choice"), "select"),
        vec![SelectOption::new("1", "A"), SelectOption::new("2", "B")],
    )
    .placeholder("Choose");

    let entries = select.entries();
    let labels: Vec<_> = entries.iter().map(|e| e.label.as_ref()).collect();
    let disabled: Vec<_> = entries.iter().map(|e| e.disabled).collect();

    assert_eq!(labels, ["Choose", "A", "B"]);
    assert_eq!(disabled, [true, false, false]);
    assert!(entries[0].value.is_empty());
}

#[test]
fn select_error_suppresses_helper_description() {
    let select = Select::new(
        FieldId::resolve(Some("country"), "select"),
        vec![SelectOption::new("us", "United States")],
    )
    .error("Required")
    .helper_text("Where you live");

    let a11y = select.accessible();
    assert!(a11y.invalid);
    assert_eq!(
        a11y.described_by.as_deref().map(|v| &**v),
        Some("country-error")
    );
}

#[test]
fn textarea_error_suppresses_helper_description() {
    let area = TextArea::new(FieldId::resolve(Some("bio"), "textarea"))
        .error("Too long")
        .helper_text("A short introduction");

    let a11y = area.accessible();
    assert!(a11y.invalid);
    assert_eq!(
        a11y.described_by.as_deref().map(|v| &**v),
        Some("bio-error")
    );
}

#[test]
fn disabled_field_annotations_carry_the_flag() {
    let area = TextArea::new(FieldId::resolve(Some("notes"), "textarea")).disabled(true);
    assert!(area.accessible().disabled);

    let select = Select::new(FieldId::resolve(Some("plan"), "select"), vec![]).disabled(true);
    assert!(select.accessible().disabled);
}
