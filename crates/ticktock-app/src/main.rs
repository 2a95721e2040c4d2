// ticktock: frameless countdown widget.
// Wires the crates together: config store, asset directory, layout engine and
// the once-per-second clock tick. Commands arrive as text lines on stdin.

mod assets;
mod commands;
mod config;
mod widget;

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use chrono::Utc;
use ticktock_core::{AssetProvider, ConfigStore, Rect};
use ticktock_layout::LayoutCoordinator;

use assets::DirAssetProvider;
use commands::Input;
use config::JsonConfigStore;
use widget::Widget;

const TICK: Duration = Duration::from_secs(1);

/// Screen used for startup placement when no display geometry is available.
const FALLBACK_SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

fn spawn_input_reader() -> Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match Input::parse(&line) {
                Some(input) => {
                    if tx.send(input).is_err() {
                        break;
                    }
                }
                None => log::warn!("Unknown input: {}", line.trim()),
            }
        }
    });
    rx
}

fn run<S: ConfigStore, A: AssetProvider>(widget: &mut Widget<S, A>, input: Receiver<Input>) {
    let mut input = Some(input);
    let mut next_tick = Instant::now();

    while widget.is_running() {
        let wait = next_tick.saturating_duration_since(Instant::now());
        let received = match &input {
            Some(rx) => rx.recv_timeout(wait),
            None => {
                std::thread::sleep(wait);
                Err(RecvTimeoutError::Timeout)
            }
        };

        match received {
            Ok(Input::Command(cmd)) => {
                widget.apply(cmd);
            }
            Ok(Input::Pointer(event)) => {
                let response = widget.handle_pointer(event);
                log::debug!("pointer {:?} -> {:?}", event, response.cursor);
            }
            Err(RecvTimeoutError::Timeout) => {
                let reading = widget.tick(Utc::now());
                log::trace!("tick {:?}", reading.direction);
                println!("{}", widget.display_text());
                next_tick += TICK;
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Input closed");
                input = None;
            }
        }
    }
}

fn main() {
    env_logger::init();

    let store = JsonConfigStore::from_env();
    match store.path() {
        Some(path) => log::info!("Config: {}", path.display()),
        None => log::warn!("No config directory, layout will not persist"),
    }
    let assets = DirAssetProvider::discover();
    if !assets.has(ticktock_core::asset_keys::BACKGROUND) {
        log::info!("No background image, using a plain panel");
    }

    let mut widget = Widget::new(store, assets, FALLBACK_SCREEN, LayoutCoordinator::default());
    run(&mut widget, spawn_input_reader());
    log::info!("Exiting");
}
