//! Shared channel infrastructure between system threads.
//!
//! The `SystemBus` provides a centralized communication hub for all threads
//! in the application, using lock-free channels for message passing.

use crate::input::events::GameAction;
use crate::shared::snapshot::RenderState;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8};

/// System-level events broadcast to the logic thread.
#[derive(Debug, Clone)]
pub enum SystemEvent {
    /// The hosting view is closing.
    Quit,
}

/// Commands sent to the dedicated audio thread.
#[derive(Debug, Clone)]
pub enum AudioCommand {
    /// Create the output stream and synthesizer.
    Init,
    /// Resume the output stream, creating it if needed.
    Start,
    /// Play a tone with an attack/release envelope.
    TriggerAttackRelease { frequency: f32, duration_ms: u64 },
    /// Change volume level.
    SetVolume { volume: f32 },
    /// Release the output device and stop the thread.
    Shutdown,
}

/// Aggregates the cross-thread communication channels.
///
/// - Input → Logic: game actions
/// - Logic → Render: state snapshots
/// - Main → Logic: system events
/// - Logic → Audio: audio commands
#[derive(Clone)]
pub struct SystemBus {
    /// Input → Logic: player actions.
    pub action_tx: Sender<GameAction>,
    pub action_rx: Receiver<GameAction>,

    /// Logic → Render: game state snapshots.
    pub render_tx: Sender<RenderState>,
    pub render_rx: Receiver<RenderState>,

    /// Main → Logic: system events.
    pub sys_tx: Sender<SystemEvent>,
    pub sys_rx: Receiver<SystemEvent>,

    /// Logic → Audio: audio commands.
    pub audio_cmd_tx: Sender<AudioCommand>,
    pub audio_cmd_rx: Receiver<AudioCommand>,

    /// Whether the output stream is running.
    /// Written by the audio thread, read by the logic thread.
    pub audio_running: Arc<AtomicBool>,

    /// `AudioStatus` discriminant.
    pub audio_status: Arc<AtomicU8>,
}

impl SystemBus {
    /// Creates a new system bus with all channels initialized.
    pub fn new() -> Self {
        let (action_tx, action_rx) = unbounded();

        // Bounded render channel: max 2 frames queued to limit latency
        let (render_tx, render_rx) = bounded(2);

        let (sys_tx, sys_rx) = unbounded();
        let (audio_cmd_tx, audio_cmd_rx) = unbounded();

        Self {
            action_tx,
            action_rx,
            render_tx,
            render_rx,
            sys_tx,
            sys_rx,
            audio_cmd_tx,
            audio_cmd_rx,
            audio_running: Arc::new(AtomicBool::new(false)),
            audio_status: Arc::new(AtomicU8::new(0)),
        }
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}
