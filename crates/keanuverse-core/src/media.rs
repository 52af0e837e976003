//! Media capture lifecycle
//!
//! The video challenge acquires a camera+microphone stream, previews it,
//! and records into memory. The stream is the only genuinely shared
//! resource in the portal, so ownership is explicit:
//!
//! - [`MediaStream`] owns its tracks. `stop_tracks` is idempotent and a
//!   `Drop` guard releases on every exit path, including errors.
//! - [`DeviceRegistry`] enforces single ownership: acquiring while another
//!   stream is live fails with `CaptureBusy` instead of leaking a second
//!   live camera.
//! - [`Recorder`] is a tick-driven state machine. The 1-second clock that
//!   drives it must exit as soon as the recorder leaves `Recording`, which
//!   `tick`'s return value makes checkable.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{PortalError, PortalResult};

/// Recording auto-stops when it reaches this many seconds
pub const MAX_RECORD_SECS: u32 = 15;

/// Completion requires at least this many seconds of footage
pub const MIN_RECORD_SECS: u32 = 10;

/// What the capture request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub video: bool,
    pub audio: bool,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            video: true,
            audio: true,
        }
    }
}

/// Kind of a captured track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
}

/// One live capture track
#[derive(Debug)]
pub struct Track {
    pub kind: TrackKind,
    stopped: bool,
}

impl Track {
    fn new(kind: TrackKind) -> Self {
        Self {
            kind,
            stopped: false,
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Tracks which device slot is live.
///
/// Cloned freely; all clones share the one slot. The slot is set on
/// acquisition and cleared exactly once when the owning stream releases.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    live: Arc<Mutex<bool>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        *self.live.lock()
    }

    fn acquire(&self) -> PortalResult<()> {
        let mut live = self.live.lock();
        if *live {
            return Err(PortalError::CaptureBusy);
        }
        *live = true;
        Ok(())
    }

    fn release(&self) {
        *self.live.lock() = false;
    }
}

/// An owned camera/microphone stream.
///
/// Single-owner handle: the preview element and the recorder both borrow
/// it, but release goes through here and happens exactly once.
#[derive(Debug)]
pub struct MediaStream {
    tracks: Vec<Track>,
    registry: DeviceRegistry,
    released: bool,
}

impl MediaStream {
    fn new(constraints: CaptureConstraints, registry: DeviceRegistry) -> Self {
        let mut tracks = Vec::new();
        if constraints.video {
            tracks.push(Track::new(TrackKind::Video));
        }
        if constraints.audio {
            tracks.push(Track::new(TrackKind::Audio));
        }
        Self {
            tracks,
            registry,
            released: false,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Stop every track and free the device slot. Idempotent.
    pub fn stop_tracks(&mut self) {
        if self.released {
            return;
        }
        for track in &mut self.tracks {
            track.stop();
        }
        self.registry.release();
        self.released = true;
        tracing::debug!("capture stream released ({} tracks)", self.tracks.len());
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        self.stop_tracks();
    }
}

/// Seam over the platform's capture devices.
///
/// Acquisition suspends while the permission prompt is pending and can be
/// refused, so callers get `CaptureDenied` to surface and must pick a
/// different challenge - there is no retry flow.
#[async_trait]
pub trait MediaDevices: Send + Sync {
    async fn request_stream(&self, constraints: CaptureConstraints) -> PortalResult<MediaStream>;
}

/// The shipped capture implementation.
///
/// Captured media never leaves the process (nothing in the portal uploads
/// it), so the device layer simulates the permission prompt and produces
/// a stream whose lifecycle is fully real: the busy guard, the track
/// ownership, and the release paths behave exactly as a hardware-backed
/// implementation would.
pub struct SimulatedDevices {
    registry: DeviceRegistry,
    deny_permission: Mutex<bool>,
    prompt_delay: Duration,
}

impl SimulatedDevices {
    pub fn new() -> Self {
        Self {
            registry: DeviceRegistry::new(),
            deny_permission: Mutex::new(false),
            prompt_delay: Duration::from_millis(400),
        }
    }

    pub fn registry(&self) -> DeviceRegistry {
        self.registry.clone()
    }

    /// Make the next permission prompts resolve as refused
    pub fn set_deny_permission(&self, deny: bool) {
        *self.deny_permission.lock() = deny;
    }
}

impl Default for SimulatedDevices {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaDevices for SimulatedDevices {
    async fn request_stream(&self, constraints: CaptureConstraints) -> PortalResult<MediaStream> {
        // Permission prompt is pending here
        tokio::time::sleep(self.prompt_delay).await;

        if *self.deny_permission.lock() {
            tracing::warn!("camera/microphone permission refused");
            return Err(PortalError::CaptureDenied(
                "Permission dismissed. Please try another challenge or check your camera permissions."
                    .to_string(),
            ));
        }

        self.registry.acquire()?;
        Ok(MediaStream::new(constraints, self.registry.clone()))
    }
}

/// A finished recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recording {
    pub duration_secs: u32,
}

impl Recording {
    /// True when the footage is long enough to complete the challenge
    pub fn meets_minimum(&self) -> bool {
        self.duration_secs >= MIN_RECORD_SECS
    }
}

/// Recorder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording { elapsed: u32 },
    Finished(Recording),
}

/// Tick-driven recorder over a live stream.
///
/// The UI drives `tick` from a 1-second interval; the recorder finishes
/// itself at `MAX_RECORD_SECS`, and the clock task must stop as soon as
/// the returned state is no longer `Recording`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorder {
    state: RecorderState,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            state: RecorderState::Idle,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    /// Seconds recorded so far (or total, once finished)
    pub fn elapsed(&self) -> u32 {
        match self.state {
            RecorderState::Idle => 0,
            RecorderState::Recording { elapsed } => elapsed,
            RecorderState::Finished(rec) => rec.duration_secs,
        }
    }

    /// Begin recording; only valid from `Idle`
    pub fn start(&mut self) -> PortalResult<()> {
        match self.state {
            RecorderState::Idle => {
                self.state = RecorderState::Recording { elapsed: 0 };
                Ok(())
            }
            _ => Err(PortalError::RecorderState(
                "recorder already started".to_string(),
            )),
        }
    }

    /// Advance one second. Auto-finishes at the cap; no-op outside
    /// `Recording`, so a late clock callback cannot corrupt the state.
    pub fn tick(&mut self) -> RecorderState {
        if let RecorderState::Recording { elapsed } = self.state {
            let elapsed = elapsed + 1;
            if elapsed >= MAX_RECORD_SECS {
                self.state = RecorderState::Finished(Recording {
                    duration_secs: MAX_RECORD_SECS,
                });
            } else {
                self.state = RecorderState::Recording { elapsed };
            }
        }
        self.state
    }

    /// Stop early at the current elapsed time
    pub fn stop(&mut self) -> PortalResult<Recording> {
        match self.state {
            RecorderState::Recording { elapsed } => {
                let recording = Recording {
                    duration_secs: elapsed,
                };
                self.state = RecorderState::Finished(recording);
                Ok(recording)
            }
            _ => Err(PortalError::RecorderState("recorder is not running".to_string())),
        }
    }

    /// Discard a finished recording for a re-record
    pub fn reset(&mut self) {
        self.state = RecorderState::Idle;
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_acquire_yields_live_tracks() {
        let devices = SimulatedDevices::new();
        let stream = devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted");
        assert_eq!(stream.tracks().len(), 2);
        assert!(stream.tracks().iter().all(|t| !t.is_stopped()));
        assert!(devices.registry().is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_acquisition_refused() {
        let devices = SimulatedDevices::new();
        let _held = devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted");
        let err = devices
            .request_stream(CaptureConstraints::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::CaptureBusy));
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_frees_the_slot() {
        let devices = SimulatedDevices::new();
        let mut stream = devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted");
        stream.stop_tracks();
        assert!(stream.tracks().iter().all(Track::is_stopped));
        assert!(!devices.registry().is_live());
        // Re-acquire after release works
        devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted again");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_tracks_idempotent() {
        let devices = SimulatedDevices::new();
        let mut stream = devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted");
        stream.stop_tracks();
        stream.stop_tracks();
        assert!(!devices.registry().is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_exactly_once() {
        let devices = SimulatedDevices::new();
        {
            let _stream = devices
                .request_stream(CaptureConstraints::default())
                .await
                .expect("granted");
            assert!(devices.registry().is_live());
        }
        assert!(!devices.registry().is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_permission_leaves_slot_free() {
        let devices = SimulatedDevices::new();
        devices.set_deny_permission(true);
        let err = devices
            .request_stream(CaptureConstraints::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::CaptureDenied(_)));
        assert!(!devices.registry().is_live());

        // User re-grants later
        devices.set_deny_permission(false);
        devices
            .request_stream(CaptureConstraints::default())
            .await
            .expect("granted after re-grant");
    }

    #[test]
    fn test_recorder_auto_stops_at_cap() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        for _ in 0..MAX_RECORD_SECS - 1 {
            assert!(matches!(recorder.tick(), RecorderState::Recording { .. }));
        }
        let state = recorder.tick();
        match state {
            RecorderState::Finished(rec) => {
                assert_eq!(rec.duration_secs, MAX_RECORD_SECS);
                assert!(rec.meets_minimum());
            }
            other => panic!("expected Finished, got {:?}", other),
        }
    }

    #[test]
    fn test_stop_at_eight_seconds_below_minimum() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        for _ in 0..8 {
            recorder.tick();
        }
        let recording = recorder.stop().unwrap();
        assert_eq!(recording.duration_secs, 8);
        assert!(!recording.meets_minimum());
    }

    #[test]
    fn test_stop_at_twelve_seconds_completes() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        for _ in 0..12 {
            recorder.tick();
        }
        assert!(recorder.stop().unwrap().meets_minimum());
    }

    #[test]
    fn test_late_tick_after_finish_is_inert() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        for _ in 0..8 {
            recorder.tick();
        }
        let recording = recorder.stop().unwrap();
        // Dangling clock callback fires once more
        assert_eq!(recorder.tick(), RecorderState::Finished(recording));
    }

    #[test]
    fn test_start_twice_is_an_error() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        assert!(recorder.start().is_err());
    }

    #[test]
    fn test_stop_without_start_is_an_error() {
        let mut recorder = Recorder::new();
        assert!(recorder.stop().is_err());
    }

    #[test]
    fn test_reset_allows_rerecord() {
        let mut recorder = Recorder::new();
        recorder.start().unwrap();
        recorder.tick();
        recorder.stop().unwrap();
        recorder.reset();
        assert_eq!(recorder.state(), RecorderState::Idle);
        recorder.start().unwrap();
    }
}
