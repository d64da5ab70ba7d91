//! Accessibility annotations for components.
//!
//! gpui has no retained accessibility tree, so components describe
//! themselves through [`AccessibleField`] values that a hosting
//! application can hand to platform assistive technology. The derivation
//! rules mirror the ARIA wiring of the equivalent web controls: a field
//! is invalid exactly when it carries an error, and its description
//! reference points at the error element, else the helper element, else
//! nothing.

use gpui::SharedString;

use crate::ui::components::FieldId;

/// Semantic roles used by the component set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A button that can be activated.
    Button,
    /// A single-line or multi-line text field.
    Textbox,
    /// A choice field with a popup option list.
    Combobox,
    /// One entry in a choice field.
    Option,
    /// An error message tied to a field.
    Alert,
    /// Neutral helper text tied to a field.
    Status,
    /// Purely decorative content, hidden from assistive technology.
    Presentation,
}

impl Role {
    /// Returns the ARIA role name.
    pub fn aria_name(&self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Textbox => "textbox",
            Role::Combobox => "combobox",
            Role::Option => "option",
            Role::Alert => "alert",
            Role::Status => "status",
            Role::Presentation => "presentation",
        }
    }
}

/// Accessibility annotation derived from a form control's properties.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleField {
    /// Semantic role of the control.
    pub role: Role,
    /// Accessible name (what screen readers announce).
    pub name: Option<SharedString>,
    /// Identifier of the label element naming this control.
    pub labelled_by: Option<SharedString>,
    /// Identifier of the element describing this control.
    pub described_by: Option<SharedString>,
    /// Whether the control's current value is invalid.
    pub invalid: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the control is required.
    pub required: bool,
}

impl AccessibleField {
    /// Creates an annotation with the given role.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: None,
            labelled_by: None,
            described_by: None,
            invalid: false,
            disabled: false,
            required: false,
        }
    }

    /// Sets the accessible name.
    pub fn name(mut self, name: impl Into<SharedString>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the labelling element reference.
    pub fn labelled_by(mut self, id: impl Into<SharedString>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    /// Sets disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets required state.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Wires the invalid flag and description reference from the field's
    /// error and helper text. The error element wins the description slot
    /// whenever both are present.
    pub fn describe(mut self, id: &FieldId, error: Option<&str>, helper: Option<&str>) -> Self {
        self.invalid = error.is_some_and(|e| !e.is_empty());
        self.described_by = description_for(id, error, helper);
        self
    }
}

/// Resolve the description reference for a field.
///
/// Points at the error element if an error is present, else at the helper
/// element if helper text is present, else nothing.
pub fn description_for(
    id: &FieldId,
    error: Option<&str>,
    helper: Option<&str>,
) -> Option<SharedString> {
    match (error, helper) {
        (Some(e), _) if !e.is_empty() => Some(id.error_id()),
        (_, Some(h)) if !h.is_empty() => Some(id.helper_id()),
        _ => None,
    }
}
