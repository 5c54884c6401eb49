//! Logic thread module for game state management and updates.
//!
//! This module contains the main game loop that runs at a fixed tick rate
//! and coordinates between input, audio, and rendering subsystems.

pub mod audio;
pub mod audio_thread;
pub mod cue;
pub mod feedback;
pub mod judge;
pub mod round;

use crate::database::DbManager;
use crate::logic::audio::AudioManager;
use crate::logic::feedback::{FeedbackController, NoHaptics};
use crate::models::settings::Settings;
use crate::state::{GameMachine, GlobalState, Transition};
use crate::system::bus::{SystemBus, SystemEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::thread;
use std::time::{Duration, Instant};

/// Target ticks per second for the logic thread.
const TPS: u64 = 200;

/// Spawns the main logic thread that drives the game.
///
/// Each tick:
/// 1. Processes input actions from the input thread
/// 2. Handles system events
/// 3. Advances the game clock by the elapsed wall-clock time
/// 4. Sends a render snapshot when something changed
pub fn start_thread(bus: SystemBus, settings: Settings) -> Option<thread::JoinHandle<()>> {
    // Start the dedicated audio thread
    audio_thread::start_audio_thread(bus.clone());

    let spawned = thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started");

            let audio = AudioManager::new(&bus);
            audio.set_volume(settings.master_volume);
            audio.init();

            let db_manager = DbManager::new(settings.leaderboard_db.clone());
            db_manager.init();

            let feedback = FeedbackController::new(audio, NoHaptics, settings.haptic_pulse_ms);
            let game = GameMachine::new(feedback, settings.mode, StdRng::from_os_rng());
            let mut state = GlobalState::new(game, Some(db_manager));

            let target_dt = Duration::from_nanos(1_000_000_000 / TPS);
            let mut last_time = Instant::now();
            let mut last_snapshot = None;

            'main: loop {
                // 1. Process input actions
                while let Ok(action) = bus.action_rx.try_recv() {
                    if state.handle_action(action) == Transition::Exit {
                        log::info!("LOGIC: Quit requested...");
                        break 'main;
                    }
                }

                // 2. Handle system events
                while let Ok(sys_evt) = bus.sys_rx.try_recv() {
                    match sys_evt {
                        SystemEvent::Quit => {
                            log::info!("LOGIC: Quit received...");
                            break 'main;
                        }
                    }
                }

                // 3. Advance the game clock
                let current_time = Instant::now();
                state.update(current_time - last_time);
                last_time = current_time;

                // 4. Send render snapshot only if it changed
                let snapshot = state.create_snapshot();
                if last_snapshot.as_ref() != Some(&snapshot)
                    && bus.render_tx.try_send(snapshot.clone()).is_ok()
                {
                    last_snapshot = Some(snapshot);
                }

                thread::sleep(target_dt);
            }

            state.shutdown();
            state.game().feedback().audio().shutdown();
            log::info!("LOGIC: Thread stopped");
        });

    match spawned {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("LOGIC: Failed to spawn logic thread: {}", e);
            None
        }
    }
}
