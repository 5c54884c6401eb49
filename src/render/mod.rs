//! Render loop on the main thread.

pub mod board;
pub mod screen;

pub use screen::Screen;

use crate::system::bus::{SystemBus, SystemEvent};
use crossbeam_channel::RecvTimeoutError;
use std::io::Write;
use std::thread::JoinHandle;
use std::time::Duration;

/// Redraws the board for every snapshot until the logic thread exits.
pub fn run<W: Write>(bus: SystemBus, logic: JoinHandle<()>, screen: &mut Screen<W>) {
    loop {
        match bus.render_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(first) => {
                // Skip frames we fell behind on.
                let snapshot = bus.render_rx.try_iter().last().unwrap_or(first);
                if let Err(e) = screen.draw(&snapshot) {
                    log::warn!("RENDER: Terminal closed ({})", e);
                    let _ = bus.sys_tx.send(SystemEvent::Quit);
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if logic.is_finished() {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if logic.join().is_err() {
        log::error!("RENDER: Logic thread panicked");
    }
}
