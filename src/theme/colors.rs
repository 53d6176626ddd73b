//! Colour constants for the kolam palette.
//!
//! Rangoli powders on a dark floor: saffron for tradition, teal for
//! mathematics, violet for interactive models.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK: &str = "#0d0b0a";
pub const INK_CARD: &str = "#17130f";
pub const INK_BORDER: &str = "#2a231b";

// === SAFFRON (Titles, Primary Actions, Culture) ===
pub const SAFFRON: &str = "#e8a33d";
pub const SAFFRON_GLOW: &str = "rgba(232, 163, 61, 0.3)";

// === NEON TEAL (Mathematics, Upload) ===
pub const NEON: &str = "#00d4aa";
pub const NEON_GLOW: &str = "rgba(0, 212, 170, 0.3)";

// === MYSTIC VIOLET (Equations, Desmos) ===
pub const MYSTIC: &str = "#9b7fd4";
pub const MYSTIC_GLOW: &str = "rgba(155, 127, 212, 0.3)";

// === NATURE (Generated Gallery) ===
pub const NATURE: &str = "#7cb87c";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f7efe3";
pub const TEXT_MUTED: &str = "rgba(247, 239, 227, 0.6)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff4d5e";
