//! Reusable UI components.
//!
//! This module contains the presentational form components. Components
//! are stateless where possible, with styling resolved through the
//! shared presets in [`style`] and driven by the theme system. The only
//! instance-scoped state is [`TextFieldState`]: the text field's value,
//! resolved identifier, and password visibility.

pub mod button;
pub mod id;
pub mod input;
pub mod label;
pub mod select;
pub mod style;
pub mod text_buffer;
pub mod textarea;

pub use button::{Button, ButtonVariant};
pub use id::FieldId;
pub use input::{InputKind, TextField, TextFieldState};
pub use label::{Indicator, Label};
pub use select::{Select, SelectEntry, SelectOption};
pub use style::{ButtonStyle, ControlSize, FieldStyle, FieldVariant};
pub use text_buffer::{KeyOutcome, TextBuffer};
pub use textarea::{Resize, TextArea};
