//! Single-line text field.
//!
//! The field itself is presentational; its value, resolved identifier,
//! and password visibility live in a [`TextFieldState`] entity owned by
//! the host view. That split keeps the identifier stable across
//! re-renders and scopes the visibility flag to one mounted instance.

use gpui::{
    div, px, Entity, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled,
};

use crate::ui::accessibility::{AccessibleField, Role};
use crate::ui::components::label::Label;
use crate::ui::components::style::{ControlSize, FieldStyle, FieldVariant};
use crate::ui::components::text_buffer::TextBuffer;
use crate::ui::components::FieldId;
use crate::ui::theme::ThemeColors;

/// Glyph shown on the visibility toggle while the password is hidden.
const REVEAL_GLYPH: &str = "\u{25C9}";
/// Glyph shown on the visibility toggle while the password is revealed.
const CONCEAL_GLYPH: &str = "\u{25CE}";
/// Replacement character for hidden password text.
const MASK_CHAR: char = '\u{2022}';

/// The kind of value a text field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Numeric value.
    Number,
    /// Secret value, masked unless revealed.
    Password,
}

impl InputKind {
    /// Whether this kind masks its value.
    pub fn is_password(self) -> bool {
        self == InputKind::Password
    }
}

/// Per-instance state of a mounted text field.
///
/// Owned by the host view as a gpui entity and handed to [`TextField`] on
/// every render. The identifier is resolved once here, never in a render
/// path. The visibility flag starts hidden and resets with the instance.
pub struct TextFieldState {
    id: FieldId,
    buffer: TextBuffer,
    revealed: bool,
}

impl TextFieldState {
    /// Create state for a field, resolving its identifier. A non-empty
    /// explicit identifier wins; otherwise one is generated.
    pub fn new(explicit_id: Option<impl Into<SharedString>>) -> Self {
        Self {
            id: FieldId::resolve(explicit_id, "input"),
            buffer: TextBuffer::new(),
            revealed: false,
        }
    }

    /// Create state with an initial value.
    pub fn with_value(explicit_id: Option<impl Into<SharedString>>, value: impl Into<String>) -> Self {
        let mut state = Self::new(explicit_id);
        state.buffer = TextBuffer::with_text(value);
        state
    }

    /// The resolved identifier. Stable for this instance's lifetime.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// The value buffer.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable access to the value buffer, for host key handlers.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Whether the password is currently revealed.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Flip password visibility. Never touches the buffer.
    pub fn toggle_visibility(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Accessible name of the visibility toggle in the current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.revealed {
            "Hide password"
        } else {
            "Show password"
        }
    }

    /// Accessibility annotation of the visibility toggle.
    pub fn toggle_accessible(&self) -> AccessibleField {
        AccessibleField::new(Role::Button).name(self.toggle_label())
    }
}

/// Whether the visibility toggle renders at all.
pub fn toggle_eligible(kind: InputKind, show_password_toggle: bool) -> bool {
    kind.is_password() && show_password_toggle
}

/// The kind the field renders as, given toggle eligibility and state.
pub fn effective_kind(kind: InputKind, show_password_toggle: bool, revealed: bool) -> InputKind {
    if toggle_eligible(kind, show_password_toggle) && revealed {
        InputKind::Text
    } else {
        kind
    }
}

/// Mask a value for hidden-password display, one bullet per character.
pub fn masked(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}

/// What occupies the right inset of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RightSlot {
    /// Nothing; no inset is reserved.
    Empty,
    /// A caller-supplied decorative icon.
    Icon(SharedString),
    /// The password visibility toggle. Always wins over a supplied icon.
    Toggle,
}

/// Resolve the right inset. The toggle suppresses the icon entirely.
pub fn resolve_right_slot(
    kind: InputKind,
    show_password_toggle: bool,
    right_icon: Option<SharedString>,
) -> RightSlot {
    if toggle_eligible(kind, show_password_toggle) {
        RightSlot::Toggle
    } else {
        match right_icon {
            Some(icon) => RightSlot::Icon(icon),
            None => RightSlot::Empty,
        }
    }
}

/// A single-line text field with label, helper/error text and icon slots.
#[derive(IntoElement)]
pub struct TextField {
    state: Entity<TextFieldState>,
    label: Option<SharedString>,
    placeholder: Option<SharedString>,
    error: Option<SharedString>,
    helper_text: Option<SharedString>,
    kind: InputKind,
    size: ControlSize,
    variant: FieldVariant,
    left_icon: Option<SharedString>,
    right_icon: Option<SharedString>,
    show_password_toggle: bool,
    disabled: bool,
    colors: ThemeColors,
}

impl TextField {
    /// Create a field rendering the given state.
    pub fn new(state: &Entity<TextFieldState>) -> Self {
        Self {
            state: state.clone(),
            label: None,
            placeholder: None,
            error: None,
            helper_text: None,
            kind: InputKind::default(),
            size: ControlSize::default(),
            variant: FieldVariant::default(),
            left_icon: None,
            right_icon: None,
            show_password_toggle: false,
            disabled: false,
            colors: ThemeColors::light(),
        }
    }

    /// Set the caption rendered above the field.
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder shown while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the validation message. Suppresses helper text when non-empty.
    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the neutral helper text rendered below the field.
    pub fn helper_text(mut self, helper: impl Into<SharedString>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    /// Set the kind of value the field accepts.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the field size.
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a decorative icon in the left inset.
    pub fn left_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    /// Set a decorative icon in the right inset. Suppressed whenever the
    /// password toggle renders.
    pub fn right_icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    /// Render a show/hide toggle for password fields.
    pub fn show_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    /// Disable the field.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render with the given palette instead of the default light one.
    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Accessibility annotation of the field in its current state.
    pub fn accessible(&self, cx: &gpui::App) -> AccessibleField {
        let id = self.state.read(cx).id().clone();
        let mut a11y = AccessibleField::new(Role::Textbox)
            .disabled(self.disabled)
            .describe(
                &id,
                self.error.as_deref().map(|v| &**v),
                self.helper_text.as_deref().map(|v| &**v),
            );
        if let Some(label) = &self.label {
            a11y = a11y.name(label.clone()).labelled_by(id.label_id());
        }
        a11y
    }
}

impl RenderOnce for TextField {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let (id, value, revealed) = {
            let state = self.state.read(cx);
            (
                state.id().clone(),
                state.buffer().text().to_string(),
                state.revealed(),
            )
        };

        let has_error = self.has_error();
        let style = FieldStyle::resolve(
            self.variant,
            self.size,
            self.disabled,
            has_error,
            &self.colors,
        );
        let colors = self.colors.clone();
        let shown_kind = effective_kind(self.kind, self.show_password_toggle, revealed);
        let right_slot = resolve_right_slot(self.kind, self.show_password_toggle, self.right_icon);

        let is_empty = value.is_empty();
        let display: SharedString = if is_empty {
            self.placeholder.unwrap_or_default()
        } else if shown_kind.is_password() {
            masked(&value).into()
        } else {
            value.into()
        };
        let value_color = if is_empty {
            colors.text_muted
        } else {
            style.text
        };

        let mut field = div()
            .id(id.to_shared())
            .h(px(style.height))
            .w_full()
            .px(px(style.padding_x))
            .flex()
            .items_center()
            .gap(px(8.0))
            .bg(style.background)
            .border_1()
            .border_color(style.border)
            .rounded(px(style.radius))
            .text_size(px(style.text_size))
            .opacity(style.opacity);

        if style.interactive {
            let hover_border = style.border_hover;
            field = field
                .cursor_text()
                .hover(move |s| s.border_color(hover_border));
        }

        if let Some(icon) = self.left_icon {
            field = field.child(div().text_color(colors.text_muted).child(icon));
        }

        field = field.child(
            div()
                .flex_1()
                .text_color(value_color)
                .child(display),
        );

        match right_slot {
            RightSlot::Toggle => {
                let glyph = if revealed { CONCEAL_GLYPH } else { REVEAL_GLYPH };
                let toggle_id: SharedString = format!("{}-toggle", id.as_str()).into();
                // Not focusable: the toggle is a supplementary affordance,
                // not a form stop.
                let mut toggle = div()
                    .id(toggle_id)
                    .w(px(self.size.inset()))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(colors.text_muted)
                    .child(SharedString::from(glyph));

                if style.interactive {
                    let text_hover = colors.text_primary;
                    let state = self.state.clone();
                    toggle = toggle
                        .cursor_pointer()
                        .hover(move |s| s.text_color(text_hover))
                        .on_click(move |_, _, cx| {
                            state.update(cx, |state, cx| {
                                state.toggle_visibility();
                                cx.notify();
                            });
                        });
                }

                field = field.child(toggle);
            }
            RightSlot::Icon(icon) => {
                field = field.child(div().text_color(colors.text_muted).child(icon));
            }
            RightSlot::Empty => {}
        }

        let mut root = div().w_full().flex().flex_col().gap(px(6.0));

        if let Some(label) = self.label {
            root = root.child(
                Label::new(id.label_id(), label)
                    .for_field(id.clone())
                    .colors(colors.clone()),
            );
        }

        root = root.child(field);

        if has_error {
            root = root.child(
                div()
                    .id(id.error_id())
                    .text_size(px(12.0))
                    .text_color(colors.error_text)
                    .child(self.error.unwrap_or_default()),
            );
        } else if let Some(helper) = self.helper_text.filter(|h| !h.is_empty()) {
            root = root.child(
                div()
                    .id(id.helper_id())
                    .text_size(px(12.0))
                    .text_color(colors.text_muted)
                    .child(helper),
            );
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_resolves_id_once() {
        let state = TextFieldState::new(None::<&str>);
        assert!(state.id().as_str().starts_with("input-"));
        let first = state.id().clone();
        assert_eq!(&first, state.id());

        let explicit = TextFieldState::new(Some("email"));
        assert_eq!(explicit.id().as_str(), "email");
    }

    #[test]
    fn visibility_starts_hidden() {
        let state = TextFieldState::new(None::<&str>);
        assert!(!state.revealed());
        assert_eq!(state.toggle_label(), "Show password");
    }

    #[test]
    fn toggle_round_trip_preserves_value() {
        let mut state = TextFieldState::new(None::<&str>);
        for c in "secret123".chars() {
            state.buffer_mut().insert_char(c);
        }
        assert_eq!(
            effective_kind(InputKind::Password, true, state.revealed()),
            InputKind::Password
        );

        state.toggle_visibility();
        assert_eq!(state.buffer().text(), "secret123");
        assert_eq!(
            effective_kind(InputKind::Password, true, state.revealed()),
            InputKind::Text
        );
        assert_eq!(state.toggle_label(), "Hide password");

        state.toggle_visibility();
        assert_eq!(state.buffer().text(), "secret123");
        assert_eq!(
            effective_kind(InputKind::Password, true, state.revealed()),
            InputKind::Password
        );
    }

    #[test]
    fn toggle_requires_password_kind_and_opt_in() {
        assert!(toggle_eligible(InputKind::Password, true));
        assert!(!toggle_eligible(InputKind::Password, false));
        assert!(!toggle_eligible(InputKind::Text, true));
    }

    #[test]
    fn reveal_does_not_leak_into_other_kinds() {
        assert_eq!(effective_kind(InputKind::Text, true, true), InputKind::Text);
        assert_eq!(
            effective_kind(InputKind::Email, false, true),
            InputKind::Email
        );
        assert_eq!(
            effective_kind(InputKind::Password, false, true),
            InputKind::Password
        );
    }

    #[test]
    fn toggle_suppresses_right_icon() {
        let slot = resolve_right_slot(InputKind::Password, true, Some("\u{2713}".into()));
        assert_eq!(slot, RightSlot::Toggle);

        let slot = resolve_right_slot(InputKind::Password, false, Some("\u{2713}".into()));
        assert_eq!(slot, RightSlot::Icon("\u{2713}".into()));

        let slot = resolve_right_slot(InputKind::Text, true, None);
        assert_eq!(slot, RightSlot::Empty);
    }

    #[test]
    fn masking_is_per_character() {
        assert_eq!(masked("abc"), "\u{2022}\u{2022}\u{2022}");
        assert_eq!(masked(""), "");
        assert_eq!(masked("héllo").chars().count(), 5);
    }

    #[test]
    fn toggle_annotation_tracks_state() {
        let mut state = TextFieldState::new(None::<&str>);
        assert_eq!(
            state.toggle_accessible().name.as_deref().map(|v| &**v),
            Some("Show password")
        );
        state.toggle_visibility();
        assert_eq!(
            state.toggle_accessible().name.as_deref().map(|v| &**v),
            Some("Hide password")
        );
    }
}
