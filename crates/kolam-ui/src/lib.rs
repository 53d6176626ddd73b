//! Kolam Analyzer UI Components
//!
//! Reusable Dioxus components for the kolam analyzer desktop app.
//!
//! ## Palette
//!
//! - **Saffron (#e8a33d)**: titles, primary actions, cultural content
//! - **Neon teal (#00d4aa)**: mathematical content, upload affordances
//! - **Mystic violet (#9b7fd4)**: equations and interactive models
//! - **Ink (#0d0b0a)**: background

pub mod components;

pub use components::*;
