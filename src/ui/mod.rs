//! UI components and views
//!
//! This module contains the gpui-based component library and the gallery
//! that demonstrates it:
//! - `theme`: Color palettes and theme switching
//! - `components`: The form component set
//! - `accessibility`: Annotations for assistive technology
//! - `views`: The demo gallery window

pub mod accessibility;
pub mod components;
pub mod theme;
pub mod views;

pub use accessibility::{AccessibleField, Role};
pub use components::{
    Button, ButtonVariant, ControlSize, FieldId, FieldVariant, InputKind, Label, Resize, Select,
    SelectOption, TextArea, TextBuffer, TextField, TextFieldState,
};
pub use theme::{Theme, ThemeColors, ThemeMode};
pub use views::Gallery;
