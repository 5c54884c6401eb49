//! Dedicated audio thread that owns the output device and the synthesizer.
//!
//! `rodio` streams are not `Send`, so the stream is opened and dropped here
//! and the rest of the game talks to it through `AudioCommand`s.

use crate::logic::audio::AudioStatus;
use crate::system::bus::{AudioCommand, SystemBus};
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

/// Envelope used by the synthesizer voice (seconds / level).
const ATTACK_SECS: f32 = 0.01;
const DECAY_SECS: f32 = 0.1;
const SUSTAIN_LEVEL: f32 = 0.1;
const RELEASE_SECS: f32 = 0.1;

/// Headroom so four overlapping voices never clip.
const VOICE_GAIN: f32 = 0.25;

struct AudioWorker {
    _stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    volume: f32,
    /// Set after a failed probe so a missing device is reported once.
    device_missing: bool,
}

impl AudioWorker {
    fn new() -> Self {
        Self {
            _stream: None,
            stream_handle: None,
            volume: 1.0,
            device_missing: false,
        }
    }

    /// Opens the default device if it is not open yet.
    fn ensure_stream(&mut self, bus: &SystemBus) -> bool {
        if self.stream_handle.is_some() {
            return true;
        }

        match OutputStream::try_default() {
            Ok((stream, stream_handle)) => {
                log::info!("AUDIO: Device found, audio enabled");
                self.device_missing = false;
                self._stream = Some(stream);
                self.stream_handle = Some(stream_handle);
                bus.audio_running.store(true, Ordering::Relaxed);
                bus.audio_status.store(AudioStatus::Ready as u8, Ordering::Relaxed);
                true
            }
            Err(e) => {
                self.mark_device_missing(bus, &e);
                false
            }
        }
    }

    /// Flags the device as missing. Returns `true` when this is news.
    fn mark_device_missing(&mut self, bus: &SystemBus, reason: &dyn std::fmt::Display) -> bool {
        bus.audio_running.store(false, Ordering::Relaxed);
        bus.audio_status.store(AudioStatus::Error as u8, Ordering::Relaxed);

        if self.device_missing {
            log::debug!("AUDIO: Still no audio device ({})", reason);
            return false;
        }
        self.device_missing = true;
        log::warn!(
            "AUDIO: No audio device found ({}), running in visual-only mode",
            reason
        );
        true
    }

    /// Returns `false` when the thread should stop.
    fn handle_command(&mut self, cmd: AudioCommand, bus: &SystemBus) -> bool {
        match cmd {
            AudioCommand::Init | AudioCommand::Start => {
                self.ensure_stream(bus);
            }
            AudioCommand::TriggerAttackRelease {
                frequency,
                duration_ms,
            } => {
                self.trigger(frequency, Duration::from_millis(duration_ms));
            }
            AudioCommand::SetVolume { volume } => {
                self.volume = volume.clamp(0.0, 1.0);
            }
            AudioCommand::Shutdown => {
                self.stream_handle = None;
                self._stream = None;
                bus.audio_running.store(false, Ordering::Relaxed);
                return false;
            }
        }
        true
    }

    fn trigger(&mut self, frequency: f32, duration: Duration) {
        let Some(stream_handle) = &self.stream_handle else {
            log::debug!("AUDIO: Cue dropped, stream not running");
            return;
        };

        let sink = match Sink::try_new(stream_handle) {
            Ok(sink) => sink,
            Err(e) => {
                log::error!("AUDIO: Failed to create sink ({})", e);
                return;
            }
        };

        let voice = Envelope::new(SineWave::new(frequency), duration).amplify(VOICE_GAIN);
        sink.set_volume(self.volume);
        sink.append(voice);
        sink.detach();
    }
}

/// Attack/decay/sustain/release gain applied to an inner source.
///
/// The voice holds for `hold` (attack and decay included) and then releases.
struct Envelope<I> {
    inner: I,
    frames_elapsed: u64,
    hold_frames: u64,
    total_frames: u64,
    sample_rate: u32,
    channels: u16,
    channel_pos: u16,
}

impl<I> Envelope<I>
where
    I: Source<Item = f32>,
{
    fn new(inner: I, hold: Duration) -> Self {
        let sample_rate = inner.sample_rate();
        let channels = inner.channels().max(1);
        let hold_frames = (hold.as_secs_f32() * sample_rate as f32) as u64;
        let release_frames = (RELEASE_SECS * sample_rate as f32) as u64;
        Self {
            inner,
            frames_elapsed: 0,
            hold_frames,
            total_frames: hold_frames + release_frames,
            sample_rate,
            channels,
            channel_pos: 0,
        }
    }

    fn gain(&self) -> f32 {
        let rate = self.sample_rate as f32;
        let t = self.frames_elapsed as f32 / rate;

        if self.frames_elapsed >= self.hold_frames {
            let held_at = self.hold_frames as f32 / rate;
            let level = attack_decay_level(held_at);
            let since_release = t - held_at;
            return level * (1.0 - since_release / RELEASE_SECS).max(0.0);
        }

        attack_decay_level(t)
    }
}

/// Envelope level `t` seconds after the attack, before any release.
fn attack_decay_level(t: f32) -> f32 {
    if t < ATTACK_SECS {
        t / ATTACK_SECS
    } else if t < ATTACK_SECS + DECAY_SECS {
        let progress = (t - ATTACK_SECS) / DECAY_SECS;
        1.0 - progress * (1.0 - SUSTAIN_LEVEL)
    } else {
        SUSTAIN_LEVEL
    }
}

impl<I> Iterator for Envelope<I>
where
    I: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.frames_elapsed >= self.total_frames {
            return None;
        }
        let sample = self.inner.next()? * self.gain();

        self.channel_pos += 1;
        if self.channel_pos >= self.channels {
            self.channel_pos = 0;
            self.frames_elapsed += 1;
        }
        Some(sample)
    }
}

impl<I> Source for Envelope<I>
where
    I: Source<Item = f32>,
{
    fn current_frame_len(&self) -> Option<usize> {
        let remaining = self.total_frames.saturating_sub(self.frames_elapsed);
        Some(remaining as usize * self.channels as usize)
    }
    fn channels(&self) -> u16 {
        self.channels
    }
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f32(
            self.total_frames as f32 / self.sample_rate as f32,
        ))
    }
}

/// Starts the dedicated audio thread.
pub fn start_audio_thread(bus: SystemBus) {
    let spawned = thread::Builder::new()
        .name("Audio Thread".to_string())
        .spawn(move || {
            log::info!("AUDIO: Thread started");

            let mut worker = AudioWorker::new();

            while let Ok(cmd) = bus.audio_cmd_rx.recv() {
                if !worker.handle_command(cmd, &bus) {
                    break;
                }
            }

            log::info!("AUDIO: Thread stopped");
        });

    if let Err(e) = spawned {
        // The game stays playable without sound.
        log::error!("AUDIO: Failed to spawn audio thread ({})", e);
    }
}
