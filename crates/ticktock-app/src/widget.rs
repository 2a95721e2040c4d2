// The widget: one window's layout state, the clock readout and persistence.

use chrono::{DateTime, Utc};

use ticktock_clock::{Reading, Tz, DEFAULT_ZONE};
use ticktock_core::{
    asset_keys, Asset, AssetProvider, ConfigStore, Glyph, LayoutConfig, PointerEvent, Rect,
    Size,
};
use ticktock_layout::{
    initial_position, LayoutCoordinator, LayoutHost, PointerResponse, WindowLayoutState,
    FRAME_MIN_SIZE,
};

// ──────────────────────────────────────────────
// Startup
// ──────────────────────────────────────────────

/// Builds the window geometry from a loaded config.
///
/// Slots missing from the config trigger a full layout reset; a missing
/// container is refit around the saved slots.
pub fn build_state(
    config: &LayoutConfig,
    screen: Rect,
    coordinator: &mut LayoutCoordinator,
) -> WindowLayoutState {
    let size = Size::new(
        config.window_size.width.max(FRAME_MIN_SIZE.width),
        config.window_size.height.max(FRAME_MIN_SIZE.height),
    );
    let origin = initial_position(config.window_pos, size, screen);

    let mut state = match config.complete_slots() {
        Some(slots) => {
            let container = config.container.unwrap_or_default();
            let mut state = WindowLayoutState::new(Rect::from_parts(origin, size), container, slots);
            if config.container.is_none() {
                log::info!("No saved container, fitting it to the slots");
                coordinator.update_container_geometry(&mut state);
            }
            state
        }
        None => {
            log::info!("No complete slot layout saved, resetting");
            let mut state = WindowLayoutState::blank(origin, size);
            coordinator.reset_layout(&mut state);
            state
        }
    };
    state.frame_mut().top_most = config.top_most;
    state
}

fn glyph_for<A: AssetProvider>(assets: &A, key: &str, fallback: char) -> Glyph {
    if assets.has(key) {
        Glyph::Image(key.to_string())
    } else {
        Glyph::Text(fallback)
    }
}

// ──────────────────────────────────────────────
// Widget
// ──────────────────────────────────────────────

pub struct Widget<S: ConfigStore, A: AssetProvider> {
    pub(crate) state: WindowLayoutState,
    pub(crate) coordinator: LayoutCoordinator,
    pub(crate) store: S,
    assets: A,
    /// Last persisted config; carries the clock preferences.
    pub(crate) config: LayoutConfig,
    pub(crate) timezone: Tz,
    pub(crate) running: bool,
}

impl<S: ConfigStore, A: AssetProvider> Widget<S, A> {
    pub fn new(store: S, assets: A, screen: Rect, mut coordinator: LayoutCoordinator) -> Self {
        let mut config = store.load();
        let timezone = match ticktock_clock::parse_timezone(&config.timezone) {
            Some(tz) => tz,
            None => {
                log::warn!("Unknown timezone {:?}, using {}", config.timezone, DEFAULT_ZONE.name());
                config.timezone = DEFAULT_ZONE.name().to_string();
                DEFAULT_ZONE
            }
        };
        let state = build_state(&config, screen, &mut coordinator);

        let mut widget = Self {
            state,
            coordinator,
            store,
            assets,
            config,
            timezone,
            running: true,
        };
        widget.persist_if_dirty();
        widget
    }

    pub fn state(&self) -> &WindowLayoutState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The background image, if the asset directory has one. Without it the
    /// renderer paints a plain panel.
    pub fn background(&self) -> Option<&Asset> {
        self.assets.image(asset_keys::BACKGROUND)
    }

    /// Recomputes the readout and assigns a glyph to every slot: slots 0 and 1
    /// show the first value, 3 and 4 the second, 2 the separator.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Reading {
        let reading = ticktock_clock::read(&self.config.target_date, self.timezone, now);
        let mut digits = reading.first.chars().chain(reading.second.chars());

        for slot in self.state.slots_mut() {
            let glyph = if slot.is_separator() {
                glyph_for(&self.assets, asset_keys::COLON, ':')
            } else {
                match digits.next() {
                    Some(c) => glyph_for(&self.assets, &c.to_string(), c),
                    None => continue,
                }
            };
            slot.glyph = Some(glyph);
        }
        reading
    }

    /// The current slot contents as text, image glyphs shown by their key.
    pub fn display_text(&self) -> String {
        self.state
            .slots()
            .iter()
            .filter_map(|s| s.glyph.as_ref())
            .map(|g| match g {
                Glyph::Text(c) => c.to_string(),
                Glyph::Image(key) if key == asset_keys::COLON => ":".to_string(),
                Glyph::Image(key) => key.clone(),
            })
            .collect()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        let response = self.coordinator.handle_pointer(&mut self.state, event);
        self.persist_if_dirty();
        response
    }

    /// Persisted view of the current geometry plus the clock preferences.
    pub fn snapshot_config(&self) -> LayoutConfig {
        let frame = self.state.frame();
        LayoutConfig {
            window_size: frame.size(),
            window_pos: Some(frame.origin()),
            container: Some(self.state.container().rect()),
            slots: self.state.slot_rects().map(Some),
            top_most: frame.top_most,
            ..self.config.clone()
        }
    }

    pub fn save(&mut self) {
        let config = self.snapshot_config();
        self.store.save(&config);
        self.config = config;
    }

    /// Saves if the layout reported a change worth persisting.
    pub(crate) fn persist_if_dirty(&mut self) {
        if self.state.take_config_dirty() {
            self.save();
        }
    }
}
