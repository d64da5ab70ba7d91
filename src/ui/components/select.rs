//! Choice field.
//!
//! Renders the closed control of a select: current choice, decorative
//! chevron, label and helper/error text. Option popups are the host's
//! concern; the resolved, ordered entry list is exposed through
//! [`Select::entries`].

use gpui::{
    div, px, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
};

use crate::ui::accessibility::{AccessibleField, Role};
use crate::ui::components::label::Label;
use crate::ui::components::style::{ControlSize, FieldStyle, FieldVariant};
use crate::ui::components::FieldId;
use crate::ui::theme::ThemeColors;

/// Decorative direction indicator. Never intercepts pointer events.
const CHEVRON_GLYPH: &str = "\u{2304}";

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: SharedString,
    /// Displayed text.
    pub label: SharedString,
    /// Whether this choice can be selected.
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A resolved entry of the choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEntry {
    pub value: SharedString,
    pub label: SharedString,
    pub disabled: bool,
    /// True for the leading placeholder entry.
    pub is_placeholder: bool,
}

/// A choice field with label, helper/error text and a placeholder option.
#[derive(IntoElement)]
pub struct Select {
    id: FieldId,
    options: Vec<SelectOption>,
    value: Option<SharedString>,
    placeholder: Option<SharedString>,
    label: Option<SharedString>,
    error: Option<SharedString>,
    helper_text: Option<SharedString>,
    size: ControlSize,
    disabled: bool,
    colors: ThemeColors,
}

impl Select {
    /// Create a select over the given options, in insertion order. The
    /// identifier should be resolved once at view construction and passed
    /// in on every render.
    pub fn new(id: FieldId, options: Vec<SelectOption>) -> Self {
        Self {
            id,
            options,
            value: None,
            placeholder: None,
            label: None,
            error: None,
            helper_text: None,
            size: ControlSize::default(),
            disabled: false,
            colors: ThemeColors::light(),
        }
    }

    /// Set the currently selected value.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder. Renders as a leading disabled entry with an
    /// empty value, so it cannot be re-selected once a choice is made.
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the caption rendered above the field.
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
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

    /// Set the field size.
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Disable the whole field.
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

    /// The resolved choice list: the placeholder first (disabled, empty
    /// value), then every option in insertion order. Duplicate values are
    /// passed through unvalidated.
    pub fn entries(&self) -> Vec<SelectEntry> {
        let mut entries = Vec::with_capacity(self.options.len() + 1);
        if let Some(placeholder) = &self.placeholder {
            entries.push(SelectEntry {
                value: SharedString::default(),
                label: placeholder.clone(),
                disabled: true,
                is_placeholder: true,
            });
        }
        for option in &self.options {
            entries.push(SelectEntry {
                value: option.value.clone(),
                label: option.label.clone(),
                disabled: option.disabled,
                is_placeholder: false,
            });
        }
        entries
    }

    /// Whether the given value can currently be selected.
    pub fn is_selectable(&self, value: &str) -> bool {
        !self.disabled
            && self
                .options
                .iter()
                .any(|o| o.value.as_ref() == value && !o.disabled)
    }

    /// The displayed text: selected option's label, else placeholder.
    fn display_label(&self) -> Option<SharedString> {
        if let Some(value) = &self.value {
            if let Some(option) = self.options.iter().find(|o| &o.value == value) {
                return Some(option.label.clone());
            }
        }
        self.placeholder.clone()
    }

    /// Accessibility annotation of the field.
    pub fn accessible(&self) -> AccessibleField {
        let mut a11y = AccessibleField::new(Role::Combobox)
            .disabled(self.disabled)
            .describe(
                &self.id,
                self.error.as_deref().map(|v| &**v),
                self.helper_text.as_deref().map(|v| &**v),
            );
        if let Some(label) = &self.label {
            a11y = a11y.name(label.clone()).labelled_by(self.id.label_id());
        }
        a11y
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let has_error = self.has_error();
        let style = FieldStyle::resolve(
            FieldVariant::Outline,
            self.size,
            self.disabled,
            has_error,
            &self.colors,
        );
        let colors = self.colors.clone();

        let has_value = self.value.is_some();
        let display = self.display_label().unwrap_or_default();
        let value_color = if has_value {
            style.text
        } else {
            colors.text_muted
        };

        let id = self.id.clone();

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
                .cursor_pointer()
                .hover(move |s| s.border_color(hover_border));
        }

        field = field
            .child(div().flex_1().text_color(value_color).child(display))
            // The chevron is plain content, so pointer events land on the
            // field beneath it.
            .child(
                div()
                    .text_color(colors.text_muted)
                    .child(SharedString::from(CHEVRON_GLYPH)),
            );

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
