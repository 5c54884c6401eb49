//! Audio context handle that sends commands to the dedicated audio thread.
//!
//! The game core only sees the `AudioContext` trait. `AudioManager` is the
//! production implementation: it never touches the device itself, it queues
//! commands for the audio thread and reads the state that thread publishes.

use crate::models::color::Pitch;
use crate::system::bus::{AudioCommand, SystemBus};
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Initialization state of the output stream and synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioStatus {
    Initializing = 0,
    Ready = 1,
    Error = 2,
}

impl AudioStatus {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => AudioStatus::Ready,
            2 => AudioStatus::Error,
            _ => AudioStatus::Initializing,
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    /// The context or synthesizer could not be brought up.
    #[error("audio init failed: {0}")]
    InitFailure(String),
    /// A single cue could not be played.
    #[error("audio playback failed: {0}")]
    PlaybackFailure(String),
}

/// Shared audio context and synthesizer used by the cue player.
pub trait AudioContext {
    /// Starts or resumes the context.
    fn start(&mut self) -> Result<(), AudioError>;

    fn is_running(&self) -> bool;

    /// Whether the synthesizer finished initializing.
    fn synth_ready(&self) -> bool;

    fn status(&self) -> AudioStatus;

    /// Plays `pitch` with a short attack/release envelope.
    fn trigger_attack_release(&mut self, pitch: Pitch, duration: Duration)
    -> Result<(), AudioError>;
}

/// Wrapper for sending commands to the audio thread.
pub struct AudioManager {
    cmd_tx: Sender<AudioCommand>,
    running: Arc<AtomicBool>,
    status: Arc<AtomicU8>,
}

impl AudioManager {
    /// Creates a new audio manager connected to the system bus.
    pub fn new(bus: &SystemBus) -> Self {
        Self {
            cmd_tx: bus.audio_cmd_tx.clone(),
            running: bus.audio_running.clone(),
            status: bus.audio_status.clone(),
        }
    }

    /// Asks the audio thread to create the stream and synthesizer.
    pub fn init(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Init);
    }

    /// Sets the master volume (0.0 to 1.0).
    pub fn set_volume(&self, volume: f32) {
        let _ = self.cmd_tx.send(AudioCommand::SetVolume { volume });
    }

    /// Releases the output device.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
    }
}

impl AudioContext for AudioManager {
    fn start(&mut self) -> Result<(), AudioError> {
        self.cmd_tx
            .send(AudioCommand::Start)
            .map_err(|e| AudioError::InitFailure(e.to_string()))
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    fn synth_ready(&self) -> bool {
        self.status() == AudioStatus::Ready
    }

    fn status(&self) -> AudioStatus {
        AudioStatus::from_u8(self.status.load(Ordering::Relaxed))
    }

    fn trigger_attack_release(
        &mut self,
        pitch: Pitch,
        duration: Duration,
    ) -> Result<(), AudioError> {
        self.cmd_tx
            .send(AudioCommand::TriggerAttackRelease {
                frequency: pitch.frequency(),
                duration_ms: duration.as_millis() as u64,
            })
            .map_err(|e| AudioError::PlaybackFailure(e.to_string()))
    }
}
