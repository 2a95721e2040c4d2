// Layout config persistence: window geometry, slot and container rects, and
// clock preferences in one JSON file.
// Uses the platform config dir: e.g. ~/.config/ticktock/layout_config.json on Linux.
// TICKTOCK_CONFIG overrides the path.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use ticktock_core::{
    ConfigStore, LayoutConfig, Point, Rect, Size, DEFAULT_TARGET_DATE, DEFAULT_TIMEZONE,
    DEFAULT_WINDOW_SIZE, SLOT_COUNT,
};

pub const CONFIG_ENV: &str = "TICKTOCK_CONFIG";
const CONFIG_FILE: &str = "layout_config.json";

// ──────────────────────────────────────────────
// On-disk format
// ──────────────────────────────────────────────

/// The canonical file layout. Rects are `[x, y, w, h]`, slots are keyed `"0"`..`"4"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub window_size: [i32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_pos: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits_container: Option<[i32; 4]>,
    #[serde(default)]
    pub digits: BTreeMap<String, [i32; 4]>,
    pub timezone: String,
    pub target_date: String,
    #[serde(default)]
    pub top_most: bool,
}

impl From<&LayoutConfig> for ConfigFile {
    fn from(config: &LayoutConfig) -> Self {
        let digits = config
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.map(|r| (i.to_string(), rect_to_array(r))))
            .collect();
        Self {
            window_size: [config.window_size.width, config.window_size.height],
            window_pos: config.window_pos.map(|p| [p.x, p.y]),
            digits_container: config.container.map(rect_to_array),
            digits,
            timezone: config.timezone.clone(),
            target_date: config.target_date.clone(),
            top_most: config.top_most,
        }
    }
}

fn rect_to_array(r: Rect) -> [i32; 4] {
    [r.x, r.y, r.width, r.height]
}

/// Container form written by early versions.
#[derive(Deserialize)]
struct LegacyRect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RectForm {
    List([i32; 4]),
    Legacy(LegacyRect),
}

impl RectForm {
    fn into_rect(self) -> Option<Rect> {
        let r = match self {
            RectForm::List([x, y, w, h]) => Rect::new(x, y, w, h),
            RectForm::Legacy(l) => Rect::new(l.x, l.y, l.w, l.h),
        };
        (r.width >= 0 && r.height >= 0).then_some(r)
    }
}

// ──────────────────────────────────────────────
// Lenient decoding
// ──────────────────────────────────────────────

/// Decodes `key` from `obj`. Missing keys are silent; present but invalid
/// values are logged and treated as missing.
fn field<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring invalid config field {:?}: {}", key, e);
            None
        }
    }
}

fn rect_field(obj: &Map<String, Value>, key: &str) -> Option<Rect> {
    let rect = field::<RectForm>(obj, key)?.into_rect();
    if rect.is_none() {
        log::warn!("Ignoring config field {:?}: negative size", key);
    }
    rect
}

/// Builds a [`LayoutConfig`] from a parsed JSON document, field by field.
/// Anything missing or malformed takes its default.
pub fn decode(value: &Value) -> LayoutConfig {
    let Some(obj) = value.as_object() else {
        log::warn!("Config root is not an object, using defaults");
        return LayoutConfig::default();
    };

    let window_size = field::<[i32; 2]>(obj, "window_size")
        .filter(|[w, h]| *w > 0 && *h > 0)
        .map(|[w, h]| Size::new(w, h))
        .unwrap_or(DEFAULT_WINDOW_SIZE);

    let window_pos = field::<[i32; 2]>(obj, "window_pos")
        .or_else(|| field::<[i32; 2]>(obj, "window_position"))
        .map(|[x, y]| Point::new(x, y));

    let mut slots = [None; SLOT_COUNT];
    if let Some(digits) = field::<Map<String, Value>>(obj, "digits") {
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = rect_field(&digits, &i.to_string());
        }
    }

    LayoutConfig {
        window_size,
        window_pos,
        container: rect_field(obj, "digits_container"),
        slots,
        timezone: field(obj, "timezone").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        target_date: field(obj, "target_date").unwrap_or_else(|| DEFAULT_TARGET_DATE.to_string()),
        top_most: field(obj, "top_most").unwrap_or(false),
    }
}

// ──────────────────────────────────────────────
// JsonConfigStore
// ──────────────────────────────────────────────

/// `$TICKTOCK_CONFIG`, else `<config_dir>/ticktock/layout_config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("ticktock").join(CONFIG_FILE))
}

/// Config store backed by a JSON file. Without a path, loads give defaults and
/// saves are dropped with a warning.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: Option<PathBuf>,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            path: default_config_path(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn write(path: &Path, config: &LayoutConfig) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&ConfigFile::from(config))?;
        std::fs::write(path, json)
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> LayoutConfig {
        let Some(path) = &self.path else {
            return LayoutConfig::default();
        };

        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return LayoutConfig::default(),
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return LayoutConfig::default();
            }
        };

        match serde_json::from_str::<Value>(&data) {
            Ok(value) => decode(&value),
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                LayoutConfig::default()
            }
        }
    }

    fn save(&mut self, config: &LayoutConfig) {
        let Some(path) = &self.path else {
            log::warn!("Cannot determine config path");
            return;
        };
        match Self::write(path, config) {
            Ok(()) => log::info!("Saved layout to {}", path.display()),
            Err(e) => log::error!("Failed to write {}: {}", path.display(), e),
        }
    }
}

// ──────────────────────────────────────────────
// MemoryConfigStore
// ──────────────────────────────────────────────

/// In-process store; counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    pub config: LayoutConfig,
    pub saves: usize,
}

impl MemoryConfigStore {
    pub fn with(config: LayoutConfig) -> Self {
        Self { config, saves: 0 }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> LayoutConfig {
        self.config.clone()
    }

    fn save(&mut self, config: &LayoutConfig) {
        self.config = config.clone();
        self.saves += 1;
    }
}
