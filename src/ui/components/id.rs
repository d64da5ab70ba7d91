//! Field identifier resolution.
//!
//! Labels and descriptive text reference their control through a string
//! identifier. Callers may supply their own; otherwise a random one is
//! generated. Resolution happens once, at view or state construction —
//! resolving inside a render path would mint a fresh identifier on every
//! frame and silently break label/description cross-references.

use gpui::SharedString;
use uuid::Uuid;

/// Number of random hex characters appended to generated identifiers.
const SUFFIX_LEN: usize = 9;

/// A stable identifier wiring a label and descriptive text to a control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(SharedString);

impl FieldId {
    /// Resolve an identifier for a control.
    ///
    /// A non-empty explicit identifier is returned unchanged, so callers
    /// can keep identifiers stable across externally driven re-renders.
    /// Otherwise a `<prefix>-<random>` identifier is generated. The random
    /// suffix is collision resistant among concurrently constructed
    /// instances, not cryptographically strong.
    pub fn resolve(explicit: Option<impl Into<SharedString>>, prefix: &str) -> Self {
        match explicit.map(Into::into) {
            Some(id) if !id.is_empty() => Self(id),
            _ => {
                let suffix: String = Uuid::new_v4()
                    .simple()
                    .to_string()
                    .chars()
                    .take(SUFFIX_LEN)
                    .collect();
                Self(format!("{prefix}-{suffix}").into())
            }
        }
    }

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier as a `SharedString`, for use as a gpui element id.
    pub fn to_shared(&self) -> SharedString {
        self.0.clone()
    }

    /// Identifier of the label element naming this control.
    pub fn label_id(&self) -> SharedString {
        format!("{}-label", self.0).into()
    }

    /// Identifier of the error message element associated with this control.
    pub fn error_id(&self) -> SharedString {
        format!("{}-error", self.0).into()
    }

    /// Identifier of the helper text element associated with this control.
    pub fn helper_id(&self) -> SharedString {
        format!("{}-helper", self.0).into()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn explicit_id_wins_unchanged() {
        let id = FieldId::resolve(Some("email"), "input");
        assert_eq!(id.as_str(), "email");
    }

    #[test]
    fn empty_explicit_id_falls_back_to_generated() {
        let id = FieldId::resolve(Some(""), "input");
        assert!(id.as_str().starts_with("input-"));
    }

    #[test]
    fn generated_id_uses_prefix_and_suffix() {
        let id = FieldId::resolve(None::<&str>, "select");
        let suffix = id.as_str().strip_prefix("select-").unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: HashSet<_> = (0..1000)
            .map(|_| FieldId::resolve(None::<&str>, "input").to_shared())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn derived_ids_share_the_base() {
        let id = FieldId::resolve(Some("username"), "input");
        assert_eq!(id.label_id().as_ref(), "username-label");
        assert_eq!(id.error_id().as_ref(), "username-error");
        assert_eq!(id.helper_id().as_ref(), "username-helper");
    }

    #[test]
    fn id_is_stable_for_its_lifetime() {
        let id = FieldId::resolve(None::<&str>, "textarea");
        let first = id.to_shared();
        let second = id.to_shared();
        assert_eq!(first, second);
    }
}
