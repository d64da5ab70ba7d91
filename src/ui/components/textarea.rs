//! Multi-line text field.

use gpui::{
    div, px, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
};

use crate::ui::accessibility::{AccessibleField, Role};
use crate::ui::components::label::Label;
use crate::ui::components::style::{ControlSize, FieldStyle, FieldVariant};
use crate::ui::components::FieldId;
use crate::ui::theme::ThemeColors;

/// Height of one text row in pixels.
const LINE_HEIGHT: f32 = 20.0;

/// Resize affordance of a textarea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resize {
    /// Fixed size.
    None,
    /// Resizable vertically.
    #[default]
    Vertical,
    /// Resizable horizontally.
    Horizontal,
    /// Resizable in both directions.
    Both,
}

impl Resize {
    /// Corner glyph hinting at the resize direction, if any.
    pub fn affordance(self) -> Option<&'static str> {
        match self {
            Resize::None => None,
            Resize::Vertical => Some("\u{2195}"),
            Resize::Horizontal => Some("\u{2194}"),
            Resize::Both => Some("\u{2921}"),
        }
    }
}

/// A multi-line text field with label and helper/error text.
#[derive(IntoElement)]
pub struct TextArea {
    id: FieldId,
    value: SharedString,
    placeholder: Option<SharedString>,
    label: Option<SharedString>,
    error: Option<SharedString>,
    helper_text: Option<SharedString>,
    size: ControlSize,
    variant: FieldVariant,
    resize: Resize,
    rows: u32,
    disabled: bool,
    colors: ThemeColors,
}

impl TextArea {
    /// Create a textarea. The identifier should be resolved once at view
    /// construction and passed in on every render.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: SharedString::default(),
            placeholder: None,
            label: None,
            error: None,
            helper_text: None,
            size: ControlSize::default(),
            variant: FieldVariant::default(),
            resize: Resize::default(),
            rows: 4,
            disabled: false,
            colors: ThemeColors::light(),
        }
    }

    /// Set the current value. Line breaks are preserved verbatim.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder shown while the value is empty.
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

    /// Set the visual variant.
    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the resize affordance.
    pub fn resize(mut self, resize: Resize) -> Self {
        self.resize = resize;
        self
    }

    /// Set the number of visible text rows.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
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

    /// Accessibility annotation of the field.
    pub fn accessible(&self) -> AccessibleField {
        let mut a11y = AccessibleField::new(Role::Textbox)
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

impl RenderOnce for TextArea {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let has_error = self.has_error();
        let style = FieldStyle::resolve(
            self.variant,
            self.size,
            self.disabled,
            has_error,
            &self.colors,
        );
        let colors = self.colors.clone();
        let id = self.id;

        let min_height = self.rows as f32 * LINE_HEIGHT + 16.0;
        let is_empty = self.value.is_empty();
        let display = if is_empty {
            self.placeholder.unwrap_or_default()
        } else {
            self.value
        };
        let value_color = if is_empty {
            colors.text_muted
        } else {
            style.text
        };

        let mut field = div()
            .id(id.to_shared())
            .min_h(px(min_height))
            .w_full()
            .p(px(style.padding_x * 0.75))
            .flex()
            .flex_col()
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

        field = field.child(div().flex_1().text_color(value_color).child(display));

        // Decorative resize affordance in the bottom-right corner
        if let Some(glyph) = self.resize.affordance() {
            field = field.child(
                div()
                    .flex()
                    .justify_end()
                    .text_size(px(10.0))
                    .text_color(colors.text_muted)
                    .child(SharedString::from(glyph)),
            );
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

    fn area() -> TextArea {
        TextArea::new(FieldId::resolve(Some("bio"), "textarea"))
    }

    #[test]
    fn textarea_builder() {
        let area = area()
            .value("Content")
            .label("Bio")
            .rows(6)
            .resize(Resize::Both)
            .size(ControlSize::Lg);

        assert_eq!(area.value.as_ref(), "Content");
        assert_eq!(area.rows, 6);
        assert_eq!(area.resize, Resize::Both);
        assert_eq!(area.size, ControlSize::Lg);
    }

    #[test]
    fn default_resize_is_vertical() {
        assert_eq!(area().resize, Resize::Vertical);
    }

    #[test]
    fn resize_affordances() {
        assert_eq!(Resize::None.affordance(), None);
        assert!(Resize::Vertical.affordance().is_some());
        assert!(Resize::Horizontal.affordance().is_some());
        assert!(Resize::Both.affordance().is_some());
    }

    #[test]
    fn line_breaks_kept_verbatim() {
        let area = area().value("one\ntwo\nthree");
        assert_eq!(area.value.as_ref(), "one\ntwo\nthree");
    }

    #[test]
    fn error_annotation_wins_over_helper() {
        let area = area().error("Too long").helper_text("Tell us about yourself");
        let a11y = area.accessible();
        assert!(a11y.invalid);
        assert_eq!(a11y.described_by.as_deref().map(|v| &**v), Some("bio-error"));
    }

    #[test]
    fn labelled_annotation() {
        let area = area().label("Bio");
        let a11y = area.accessible();
        assert_eq!(a11y.name.as_deref().map(|v| &**v), Some("Bio"));
        assert_eq!(a11y.labelled_by.as_deref().map(|v| &**v), Some("bio-label"));
    }
}
