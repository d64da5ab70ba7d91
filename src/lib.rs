//! coreframe - An Apple-inspired UI component library for gpui
//!
//! This crate provides presentational form components (buttons, labels,
//! text fields, textareas, selects) for gpui applications, plus the theme
//! and accessibility plumbing they share and a demo gallery application
//! exercising each component's visual variants.

pub mod app;
pub mod config;
pub mod ui;

pub use app::App;
