//! Page components for the Keanuverse portal.

mod biography;
mod career;
mod fan_zone;
mod gvipc;
mod home;
mod journal;
mod philanthropy;

pub use biography::Biography;
pub use career::Career;
pub use fan_zone::FanZone;
pub use gvipc::{GvipcApply, GvipcCard, GvipcChallenge};
pub use home::Home;
pub use journal::Journal;
pub use philanthropy::Philanthropy;
