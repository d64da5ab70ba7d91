//! Configuration and settings management.
//!
//! This module provides gallery settings types and persistence. Settings
//! are stored in the user's config directory as JSON.

mod settings;

pub use settings::{
    AppearanceSettings, Settings, SettingsError, SizePreference, ThemePreference,
};
