//! GVIPC challenge variant components.
//!
//! Each variant owns its whole state, so switching challenges unmounts
//! the old one and starts the next from scratch - including releasing any
//! live capture stream.

mod art_upload;
mod quiz_panel;
mod video_recorder;

pub use art_upload::ArtUploadPanel;
pub use quiz_panel::QuizPanel;
pub use video_recorder::VideoRecorderPanel;
