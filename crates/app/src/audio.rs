//! Audio capture and playback collaborators
//!
//! Capture and playback are platform territory; the core only ever sees an
//! encoded payload. The shell ships simulators that honor the same
//! contract: capture produces a payload or a capture error, playback
//! failure is a diagnostic for the caller to log, never control flow.

use std::time::Instant;

use crewdeck_core::AudioPayload;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("a capture is already running")]
    CaptureBusy,

    #[error("no capture in progress")]
    NotCapturing,

    #[error("playback blocked by the platform")]
    PlaybackBlocked,

    #[error("undecodable audio payload: {0}")]
    BadPayload(#[from] base64::DecodeError),
}

/// Opaque handle for one push-to-talk hold
#[derive(Debug)]
pub struct CaptureHandle {
    started: Instant,
}

pub trait AudioCapture {
    fn start(&mut self) -> Result<CaptureHandle, AudioError>;
    fn stop(&mut self, handle: CaptureHandle) -> Result<AudioPayload, AudioError>;
}

pub trait AudioPlayback {
    fn play(&mut self, payload: &AudioPayload) -> Result<(), AudioError>;
}

/// Stand-in microphone: synthesizes a short clip per hold. Permission can
/// be revoked to exercise the denial path.
#[derive(Debug)]
pub struct SimulatedMic {
    permission_granted: bool,
    capturing: bool,
}

impl SimulatedMic {
    pub fn new() -> Self {
        Self {
            permission_granted: true,
            capturing: false,
        }
    }

    pub fn deny_permission(&mut self) {
        self.permission_granted = false;
    }
}

impl Default for SimulatedMic {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCapture for SimulatedMic {
    fn start(&mut self) -> Result<CaptureHandle, AudioError> {
        if !self.permission_granted {
            tracing::warn!("microphone access denied");
            return Err(AudioError::PermissionDenied);
        }
        if self.capturing {
            return Err(AudioError::CaptureBusy);
        }

        self.capturing = true;
        tracing::debug!("capture started");
        Ok(CaptureHandle {
            started: Instant::now(),
        })
    }

    fn stop(&mut self, handle: CaptureHandle) -> Result<AudioPayload, AudioError> {
        if !self.capturing {
            return Err(AudioError::NotCapturing);
        }
        self.capturing = false;

        // Header carries the hold duration, followed by a sawtooth ramp
        // standing in for samples.
        let held_ms = handle.started.elapsed().as_millis() as u64;
        let mut bytes = Vec::with_capacity(168);
        bytes.extend_from_slice(&held_ms.to_le_bytes());
        bytes.extend((0..160u32).map(|i| (i % 251) as u8));

        tracing::debug!(held_ms, "capture stopped");
        Ok(AudioPayload::from_bytes(&bytes))
    }
}

/// Stand-in speaker: decodes the clip and reports it to the log. Can be
/// muted to exercise the blocked-autoplay path.
#[derive(Debug)]
pub struct ConsoleSpeaker {
    muted: bool,
}

impl ConsoleSpeaker {
    pub fn new() -> Self {
        Self { muted: false }
    }

    pub fn mute(&mut self) {
        self.muted = true;
    }
}

impl Default for ConsoleSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPlayback for ConsoleSpeaker {
    fn play(&mut self, payload: &AudioPayload) -> Result<(), AudioError> {
        if self.muted {
            return Err(AudioError::PlaybackBlocked);
        }

        let bytes = payload.decode()?;
        tracing::info!(mime = %payload.mime, bytes = bytes.len(), "playing intercom clip");
        Ok(())
    }
}
