// Context-menu command surface.

use ticktock_clock::COMMON_TIMEZONES;
use ticktock_core::{AssetProvider, ConfigStore, Modifiers, MouseButton, Point, PointerEvent};
use ticktock_layout::LayoutHost;

use crate::widget::Widget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleEditMode,
    ToggleTopMost,
    ResetLayout,
    SetTimezone(String),
    Exit,
}

impl Command {
    /// Parses one line of the text command channel:
    /// `edit`, `top`, `reset`, `tz <zone>`, `exit`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let cmd = match parts.next()? {
            "edit" => Command::ToggleEditMode,
            "top" => Command::ToggleTopMost,
            "reset" => Command::ResetLayout,
            "tz" => Command::SetTimezone(parts.next()?.to_string()),
            "exit" | "quit" => Command::Exit,
            _ => return None,
        };
        Some(cmd)
    }
}

/// A line of input: a menu command or a screen-space pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Command(Command),
    Pointer(PointerEvent),
}

impl Input {
    /// Pointer lines are `press X Y [shift]`, `move X Y [shift]` and
    /// `release X Y`; anything else is parsed as a [`Command`].
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let kind = parts.next()?;
        if !matches!(kind, "press" | "move" | "release") {
            return Command::parse(line).map(Input::Command);
        }
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        let position = Point::new(x, y);
        let modifiers = if parts.next() == Some("shift") {
            Modifiers::SHIFT
        } else {
            Modifiers::default()
        };
        let event = match kind {
            "press" => PointerEvent::Press {
                position,
                button: MouseButton::Left,
                modifiers,
            },
            "move" => PointerEvent::Move {
                position,
                modifiers,
            },
            _ => PointerEvent::Release {
                position,
                button: MouseButton::Left,
            },
        };
        Some(Input::Pointer(event))
    }
}

/// One entry of the timezone submenu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub name: &'static str,
    pub checked: bool,
}

impl<S: ConfigStore, A: AssetProvider> Widget<S, A> {
    /// Runs a command. Returns whether the widget keeps running.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleEditMode => {
                self.coordinator.toggle_edit_mode(&mut self.state);
                self.persist_if_dirty();
            }
            Command::ToggleTopMost => {
                let frame = self.state.frame_mut();
                frame.top_most = !frame.top_most;
                log::info!("Always on top {}", if frame.top_most { "on" } else { "off" });
                self.save();
            }
            Command::ResetLayout => {
                self.coordinator.reset_layout(&mut self.state);
                self.persist_if_dirty();
            }
            Command::SetTimezone(name) => match ticktock_clock::is_selectable(&name) {
                Some(tz) => {
                    self.timezone = tz;
                    self.config.timezone = name;
                    log::info!("Timezone set to {}", tz.name());
                    self.save();
                }
                None => log::warn!("Timezone {:?} is not selectable, keeping {}", name, self.timezone.name()),
            },
            Command::Exit => {
                self.save();
                self.running = false;
            }
        }
        self.running
    }

    /// The timezone submenu, with the active zone checked.
    pub fn timezone_menu(&self) -> Vec<TimezoneEntry> {
        COMMON_TIMEZONES
            .iter()
            .map(|&name| TimezoneEntry {
                name,
                checked: name == self.config.timezone,
            })
            .collect()
    }
}
