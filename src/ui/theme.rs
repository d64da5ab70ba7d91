//! Theme definitions for coreframe

use gpui::{rgb, Hsla};

/// Color palette shared by every component
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_muted: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,

    // Borders
    pub border: Hsla,
    pub border_hover: Hsla,
    pub border_focused: Hsla,

    // Accents
    pub accent: Hsla,
    pub accent_hover: Hsla,
    pub accent_active: Hsla,
    pub accent_soft: Hsla,

    // Status colors
    pub success: Hsla,
    pub warning: Hsla,
    pub error: Hsla,
    pub error_text: Hsla,
}

impl ThemeColors {
    /// Light theme colors
    pub fn light() -> Self {
        Self {
            // Backgrounds
            background: rgb(0xfafafa).into(),
            surface: rgb(0xffffff).into(),
            surface_muted: rgb(0xf5f5f5).into(),

            // Text
            text_primary: rgb(0x171717).into(),
            text_secondary: rgb(0x525252).into(),
            text_muted: rgb(0x737373).into(),

            // Borders
            border: rgb(0xd4d4d4).into(),
            border_hover: rgb(0xa3a3a3).into(),
            border_focused: rgb(0x2563eb).into(),

            // Accents
            accent: rgb(0x2563eb).into(),
            accent_hover: rgb(0x1d4ed8).into(),
            accent_active: rgb(0x1e40af).into(),
            accent_soft: rgb(0xeff6ff).into(),

            // Status
            success: rgb(0x16a34a).into(),
            warning: rgb(0xd97706).into(),
            error: rgb(0xef4444).into(),
            error_text: rgb(0xdc2626).into(),
        }
    }

    /// Dark theme colors
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            background: rgb(0x171717).into(),
            surface: rgb(0x242424).into(),
            surface_muted: rgb(0x2e2e2e).into(),

            // Text
            text_primary: rgb(0xfafafa).into(),
            text_secondary: rgb(0xa3a3a3).into(),
            text_muted: rgb(0x737373).into(),

            // Borders
            border: rgb(0x3a3a3a).into(),
            border_hover: rgb(0x525252).into(),
            border_focused: rgb(0x3b82f6).into(),

            // Accents
            accent: rgb(0x3b82f6).into(),
            accent_hover: rgb(0x60a5fa).into(),
            accent_active: rgb(0x2563eb).into(),
            accent_soft: rgb(0x1e293b).into(),

            // Status
            success: rgb(0x4ade80).into(),
            warning: rgb(0xfbbf24).into(),
            error: rgb(0xf87171).into(),
            error_text: rgb(0xfca5a5).into(),
        }
    }
}

/// Theme mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Application theme
#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Create light theme
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Create dark theme
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Toggle between light and dark
    pub fn toggle(&mut self) {
        match self.mode {
            ThemeMode::Light => *self = Self::dark(),
            ThemeMode::Dark => *self = Self::light(),
        }
    }
}
