//! Visual theme for the Keanuverse portal.

mod colors;
mod styles;

#[allow(unused_imports)]
pub use colors::*;
pub use styles::GLOBAL_STYLES;
