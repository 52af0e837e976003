//! Keanuverse Core Library
//!
//! Domain logic for the Keanuverse fan portal: the fan-gallery
//! filter/search engine, form validation, the GVIPC membership wizard
//! (application, challenge variants, member card), and the media-capture
//! resource lifecycle.
//!
//! ## Overview
//!
//! The portal has no backend. Every "submission" goes through the
//! [`SubmissionIntake`] seam, which the shipped [`SimulatedIntake`]
//! implements with a fixed latency and no persistence - data lives only
//! in process memory for the run of the app.
//!
//! The one genuinely shared resource is the camera/microphone stream
//! behind the video challenge. [`MediaStream`] owns its tracks with a
//! single-owner lifecycle: release happens exactly once on every exit
//! path, and the device registry refuses overlapping acquisition.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keanuverse_core::{GalleryFilter, SortBy, TypeFilter};
//!
//! let filter = GalleryFilter {
//!     kind: TypeFilter::All,
//!     query: "matrix".to_string(),
//!     sort: SortBy::Popular,
//! };
//! for entry in filter.apply(&submissions) {
//!     println!("{} by {} ({} likes)", entry.title, entry.creator.name, entry.likes);
//! }
//! ```

pub mod blog;
pub mod error;
pub mod gallery;
pub mod intake;
pub mod media;
pub mod membership;
pub mod paging;
pub mod quiz;
pub mod story;
pub mod submission;
pub mod upload;
pub mod validate;

// Re-exports
pub use blog::{BlogFilter, BlogPost, CardHeight, Category, Mood};
pub use error::{PortalError, PortalResult};
pub use gallery::{GalleryFilter, SortBy, TypeFilter};
pub use intake::{IntakeError, IntakePayload, SimulatedIntake, SubmissionIntake};
pub use media::{
    CaptureConstraints, DeviceRegistry, MediaDevices, MediaStream, Recorder, RecorderState,
    Recording, SimulatedDevices, MAX_RECORD_SECS, MIN_RECORD_SECS,
};
pub use membership::{
    ChallengeKind, MemberCard, MemberId, MembershipApplication, MembershipSession,
    FALLBACK_MEMBER_NAME, FAVORITE_MOVIES, REASON_MAX_CHARS,
};
pub use paging::{page_numbers, page_slice, total_pages, PageEntry, PAGE_SIZE, SEARCH_DEBOUNCE_MS};
pub use quiz::{trivia_questions, Quiz, QuizOutcome, QuizQuestion, PASS_THRESHOLD};
pub use story::{StoryAuthor, StoryDraft, TimelineStory};
pub use submission::{Creator, FanSubmission, SubmissionId, SubmissionType};
pub use upload::{data_url, AcceptPolicy, ArtUpload, MAX_UPLOAD_BYTES};
pub use validate::{validate_email, FieldErrors, SubmissionDraft, SubmissionFormStep};
