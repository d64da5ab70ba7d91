//! Label component.
//!
//! Renders a caption for a form control, with optional required or
//! optional indicators.

use gpui::{
    div, px, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled,
};

use crate::ui::components::style::ControlSize;
use crate::ui::components::FieldId;
use crate::ui::theme::ThemeColors;

/// Indicator glyph appended after the caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// `*`, announced as "required".
    Required,
    /// `(optional)`, announced as "optional".
    Optional,
}

impl Indicator {
    /// The rendered glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Required => "*",
            Indicator::Optional => "(optional)",
        }
    }

    /// The accessible name of the glyph.
    pub fn accessible_name(self) -> &'static str {
        match self {
            Indicator::Required => "required",
            Indicator::Optional => "optional",
        }
    }
}

/// A caption associated with a form control.
#[derive(IntoElement)]
pub struct Label {
    id: ElementId,
    text: SharedString,
    required: bool,
    optional: bool,
    size: ControlSize,
    for_field: Option<FieldId>,
    colors: ThemeColors,
}

impl Label {
    /// Create a new label with the given caption text.
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            required: false,
            optional: false,
            size: ControlSize::default(),
            for_field: None,
            colors: ThemeColors::light(),
        }
    }

    /// Mark the labelled control as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the labelled control as optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Set the typography size.
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Associate this label with a control.
    pub fn for_field(mut self, id: FieldId) -> Self {
        self.for_field = Some(id);
        self
    }

    /// Render with the given palette instead of the default light one.
    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = colors;
        self
    }

    /// The indicator to append, if any. Required wins over optional when
    /// both flags are set.
    pub fn indicator(&self) -> Option<Indicator> {
        if self.required {
            Some(Indicator::Required)
        } else if self.optional {
            Some(Indicator::Optional)
        } else {
            None
        }
    }
}

impl RenderOnce for Label {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = self.colors.clone();
        let text_size = self.size.text_size();
        let indicator = self.indicator();

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap(px(4.0))
            .text_size(px(text_size))
            .font_weight(FontWeight::MEDIUM)
            .text_color(colors.text_primary)
            .child(self.text);

        match indicator {
            Some(Indicator::Required) => {
                element = element.child(
                    div()
                        .text_color(colors.error_text)
                        .child(SharedString::from(Indicator::Required.glyph())),
                );
            }
            Some(Indicator::Optional) => {
                element = element.child(
                    div()
                        .text_color(colors.text_muted)
                        .font_weight(FontWeight::NORMAL)
                        .child(SharedString::from(Indicator::Optional.glyph())),
                );
            }
            None => {}
        }

        element
    }
}
