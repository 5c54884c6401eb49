//! Application entry point and thread bootstrapper.

mod database;
mod input;
mod logic;
mod models;
mod render;
mod shared;
mod state;
mod system;

use crate::input::manager::InputManager;
use crate::models::settings::Settings;
use crate::render::Screen;
use crate::system::bus::SystemBus;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("MAIN: Booting Simon Says...");

    let settings = Settings::load();
    let bus = SystemBus::new();

    // Raw mode first, so the input thread sees single key presses.
    let mut screen = Screen::new(io::BufWriter::new(io::stdout()));
    if let Err(e) = screen.init() {
        log::error!("MAIN: Terminal setup failed: {}", e);
        return;
    }

    let input_manager = InputManager::new(&settings.keybinds);
    input::start_thread(bus.clone(), input_manager);

    if let Some(logic) = logic::start_thread(bus.clone(), settings) {
        render::run(bus, logic, &mut screen);
    }

    if let Err(e) = screen.cleanup() {
        log::error!("MAIN: Failed to restore terminal: {}", e);
    }
    log::info!("MAIN: Bye");
}
