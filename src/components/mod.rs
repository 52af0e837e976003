//! UI components for the Keanuverse portal.

pub mod challenge;
pub mod gallery;
pub mod journal;
mod member_card;
mod nav_header;
mod prose;
mod timeline;

pub use member_card::{CardFace, MemberCardView};
pub use nav_header::{NavHeader, NavLocation};
pub use prose::Prose;
pub use timeline::{EventTimeline, TimelineEvent};
