//! Input thread bootstrapping and high-level event routing.

pub mod events;
pub mod manager;

use crate::input::events::GameAction;
use crate::input::manager::InputManager;
use crate::system::bus::SystemBus;
use crossterm::event::{self, Event};
use std::thread;

/// Spawns the thread reading terminal key events.
///
/// The terminal must already be in raw mode so every key arrives on its own,
/// without waiting for Enter.
pub fn start_thread(bus: SystemBus, manager: InputManager) {
    let spawned = thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started");

            loop {
                let key = match event::read() {
                    Ok(Event::Key(key)) => key,
                    Ok(_) => continue,
                    Err(e) => {
                        log::error!("INPUT: Failed to read terminal event: {}", e);
                        break;
                    }
                };

                let Some(action) = manager.process_key(&key) else {
                    continue;
                };
                if let Err(e) = bus.action_tx.send(action) {
                    log::error!("INPUT: Failed to send action (Logic thread died?): {}", e);
                    break;
                }
                if action == GameAction::Quit {
                    break;
                }
            }

            // A dead terminal closes the game like the quit key.
            let _ = bus.action_tx.send(GameAction::Quit);
            log::info!("INPUT: Thread stopped");
        });

    if let Err(e) = spawned {
        log::error!("INPUT: Failed to spawn input thread: {}", e);
    }
}
