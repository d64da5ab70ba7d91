//! Shared style resolution for form components.
//!
//! Every component maps its `(variant, size, disabled, error)` inputs to a
//! fixed style preset through a pure function over closed enums. The
//! application order is fixed: base, then variant, then size, then the
//! error override (which wins over the variant's border), then the
//! disabled override.

use gpui::Hsla;

use crate::ui::components::button::ButtonVariant;
use crate::ui::theme::ThemeColors;

/// Control size presets shared by every component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlSize {
    /// Small (28px control height).
    Sm,
    /// Medium (36px control height).
    #[default]
    Md,
    /// Large (44px control height).
    Lg,
}

impl ControlSize {
    /// Control height in pixels.
    pub fn height(self) -> f32 {
        match self {
            ControlSize::Sm => 28.0,
            ControlSize::Md => 36.0,
            ControlSize::Lg => 44.0,
        }
    }

    /// Horizontal padding in pixels.
    pub fn padding_x(self) -> f32 {
        match self {
            ControlSize::Sm => 12.0,
            ControlSize::Md => 16.0,
            ControlSize::Lg => 20.0,
        }
    }

    /// Text size in pixels.
    pub fn text_size(self) -> f32 {
        match self {
            ControlSize::Sm => 12.0,
            ControlSize::Md => 14.0,
            ControlSize::Lg => 16.0,
        }
    }

    /// Corner radius in pixels.
    pub fn radius(self) -> f32 {
        match self {
            ControlSize::Sm => 6.0,
            ControlSize::Md => 8.0,
            ControlSize::Lg => 8.0,
        }
    }

    /// Width reserved for an icon inset in pixels.
    pub fn inset(self) -> f32 {
        match self {
            ControlSize::Sm => 28.0,
            ControlSize::Md => 32.0,
            ControlSize::Lg => 40.0,
        }
    }
}

/// Visual variants for field components (input, textarea, select).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldVariant {
    /// Bordered field on a plain background.
    #[default]
    Outline,
    /// Borderless field on a muted background.
    Filled,
}

/// Resolved style preset for a field component.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    pub height: f32,
    pub padding_x: f32,
    pub text_size: f32,
    pub radius: f32,
    pub background: Hsla,
    pub border: Hsla,
    pub border_hover: Hsla,
    pub text: Hsla,
    pub opacity: f32,
    pub interactive: bool,
}

impl FieldStyle {
    /// Resolve the preset for a field. Pure function of its inputs.
    pub fn resolve(
        variant: FieldVariant,
        size: ControlSize,
        disabled: bool,
        has_error: bool,
        colors: &ThemeColors,
    ) -> Self {
        let (background, border, border_hover) = match variant {
            FieldVariant::Outline => (colors.surface, colors.border, colors.border_hover),
            FieldVariant::Filled => (
                colors.surface_muted,
                colors.surface_muted,
                colors.border_hover,
            ),
        };

        let mut style = Self {
            height: size.height(),
            padding_x: size.padding_x(),
            text_size: size.text_size(),
            radius: size.radius(),
            background,
            border,
            border_hover,
            text: colors.text_primary,
            opacity: 1.0,
            interactive: true,
        };

        // Error border wins over the variant's border
        if has_error {
            style.border = colors.error;
            style.border_hover = colors.error;
        }

        // Disabled wins over everything
        if disabled {
            style.opacity = 0.5;
            style.background = colors.surface_muted;
            style.interactive = false;
        }

        style
    }
}

/// Resolved style preset for the button component.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    pub height: f32,
    pub padding_x: f32,
    pub text_size: f32,
    pub radius: f32,
    pub background: Hsla,
    pub background_hover: Hsla,
    pub background_active: Hsla,
    pub border: Option<Hsla>,
    pub text: Hsla,
    pub opacity: f32,
    pub interactive: bool,
}

impl ButtonStyle {
    /// Resolve the preset for a button. Pure function of its inputs.
    pub fn resolve(
        variant: ButtonVariant,
        size: ControlSize,
        disabled: bool,
        colors: &ThemeColors,
    ) -> Self {
        let (background, background_hover, background_active, border, text) = match variant {
            ButtonVariant::Primary => (
                colors.accent,
                colors.accent_hover,
                colors.accent_active,
                None,
                colors.surface,
            ),
            ButtonVariant::Secondary => (
                colors.text_secondary,
                colors.text_primary,
                colors.text_primary,
                None,
                colors.surface,
            ),
            ButtonVariant::Outline => (
                Hsla::transparent_black(),
                colors.accent_soft,
                colors.accent_soft,
                Some(colors.accent),
                colors.accent,
            ),
        };

        let mut style = Self {
            height: size.height(),
            padding_x: size.padding_x(),
            text_size: size.text_size(),
            radius: size.radius(),
            background,
            background_hover,
            background_active,
            border,
            text,
            opacity: 1.0,
            interactive: true,
        };

        if disabled {
            style.opacity = 0.5;
            style.interactive = false;
        }

        style
    }
}
