//! Fan gallery components.

mod detail_modal;
mod fan_gallery;
mod form_modal;
mod submission_card;

pub use detail_modal::SubmissionDetailModal;
pub use fan_gallery::FanGallery;
pub use form_modal::SubmissionFormModal;
pub use submission_card::SubmissionCard;
