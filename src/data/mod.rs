//! Seed content for the portal.
//!
//! Everything here is immutable for the run of the app: the gallery seed,
//! the page copy, and the journal posts. There is no persistence layer to
//! load any of it from.

mod biography;
mod career;
mod philanthropy;
mod posts;
mod stories;
mod submissions;

pub use biography::{biography_sections, BiographyEvent, BiographySection, EventCategory};
pub use career::{career_milestones, CareerMilestone};
pub use philanthropy::{impact_stats, initiatives, partners, ImpactStat, Initiative};
pub use posts::journal_posts;
pub use stories::timeline_stories;
pub use submissions::fan_submissions;
