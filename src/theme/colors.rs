//! Brand color constants.
//!
//! Dark cinematic palette with role-colored accents for the gallery
//! badges (one per iconic role).

#![allow(dead_code)]

// === BRAND (Backgrounds) ===
pub const BRAND_BLACK: &str = "#0a0a0a";
pub const BRAND_DARK: &str = "#121212";
pub const BRAND_GRAY: &str = "#1e1e1e";
pub const BRAND_LIGHT_GRAY: &str = "#2a2a2a";

// === TEXT ===
pub const BRAND_WHITE: &str = "#f5f5f5";
pub const BRAND_SILVER: &str = "#a0a0a0";

// === ACCENT ===
pub const BRAND_ACCENT: &str = "#3d7dff";
pub const ACCENT_GLOW: &str = "rgba(61, 125, 255, 0.3)";

// === ROLE ACCENTS (gallery type badges) ===
pub const MATRIX_GREEN: &str = "#00ff41";
pub const JOHN_WICK_GOLD: &str = "#d4af37";
pub const NEO_RED: &str = "#dc3545";

// === CARD (the GVIPC gold gradient) ===
pub const CARD_GOLD_LIGHT: &str = "#fde047";
pub const CARD_GOLD: &str = "#eab308";
pub const CARD_AMBER: &str = "#d97706";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";
