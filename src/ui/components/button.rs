//! Button component.
//!
//! Provides styled button variants for different use cases.

use gpui::{
    div, px, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled,
};

use crate::ui::accessibility::{AccessibleField, Role};
use crate::ui::components::style::{ButtonStyle, ControlSize};
use crate::ui::theme::ThemeColors;

/// Type alias for button click handlers.
type ClickHandler = Box<dyn Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static>;

/// Button variant styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Bordered, transparent button.
    Outline,
}

/// A styled button component.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ControlSize,
    disabled: bool,
    full_width: bool,
    colors: ThemeColors,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button with the given label.
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ControlSize::default(),
            disabled: false,
            full_width: false,
            colors: ThemeColors::light(),
            on_click: None,
        }
    }

    /// Set the button variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size.
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Disable the button.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Make the button full width.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Render with the given palette instead of the default light one.
    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the click handler. A disabled button never invokes it.
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Accessibility annotation for this button.
    pub fn accessible(&self) -> AccessibleField {
        AccessibleField::new(Role::Button)
            .name(self.label.clone())
            .disabled(self.disabled)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let style = ButtonStyle::resolve(self.variant, self.size, self.disabled, &self.colors);

        let mut element = div()
            .id(self.id)
            .h(px(style.height))
            .px(px(style.padding_x))
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(style.radius))
            .bg(style.background)
            .text_color(style.text)
            .text_size(px(style.text_size))
            .opacity(style.opacity)
            .child(self.label);

        if let Some(border) = style.border {
            element = element.border_1().border_color(border);
        }

        if self.full_width {
            element = element.w_full();
        }

        if style.interactive {
            let hover_bg = style.background_hover;
            let active_bg = style.background_active;
            element = element
                .cursor_pointer()
                .hover(move |s| s.bg(hover_bg))
                .active(move |s| s.bg(active_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_builder() {
        let button = Button::new("test", "Click me")
            .variant(ButtonVariant::Outline)
            .size(ControlSize::Lg)
            .disabled(false)
            .full_width();

        assert_eq!(button.variant, ButtonVariant::Outline);
        assert_eq!(button.size, ControlSize::Lg);
        assert!(!button.disabled);
        assert!(button.full_width);
    }

    #[test]
    fn button_defaults() {
        let button = Button::new("test", "Click me");
        assert_eq!(button.variant, ButtonVariant::Primary);
        assert_eq!(button.size, ControlSize::Md);
        assert!(!button.disabled);
    }

    #[test]
    fn disabled_button_annotation() {
        let button = Button::new("test", "Save").disabled(true);
        let a11y = button.accessible();
        assert_eq!(a11y.role, Role::Button);
        assert_eq!(a11y.name.as_deref().map(|v| &**v), Some("Save"));
        assert!(a11y.disabled);
    }
}
