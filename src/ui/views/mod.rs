//! Full-window views.

mod gallery;

pub use gallery::Gallery;
