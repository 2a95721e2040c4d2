use std::ops::{Add, Sub};
use std::path::PathBuf;

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Pointer coordinates arrive from outside; offsets between them saturate.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative. Such sizes must never be divided by.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Axis-aligned rectangle with half-open extents: `right() = x + width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_degenerate()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True when `other` lies entirely inside this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Grow by `amount` on every side (negative shrinks, clamped at zero size).
    pub fn inflate(&self, amount: i32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            (self.width + 2 * amount).max(0),
            (self.height + 2 * amount).max(0),
        )
    }

    pub fn translate(&self, delta: Point) -> Rect {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    pub fn with_origin(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    pub fn with_size(&self, size: Size) -> Rect {
        Rect::new(self.x, self.y, size.width, size.height)
    }

    /// A `side`×`side` square centered on `point`.
    pub fn square_around(point: Point, side: i32) -> Rect {
        let half = side / 2;
        Rect::new(point.x - half, point.y - half, side, side)
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Number of digit slots in the widget: two per value plus the separator.
pub const SLOT_COUNT: usize = 5;

/// Index of the fixed separator slot.
pub const SEPARATOR_SLOT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Slot(usize),
    Container,
}

/// What a slot displays: an asset image by key, or a font glyph fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    Image(String),
    Text(char),
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift held: resize keeps the starting width/height ratio.
    pub fn aspect_locked(&self) -> bool {
        self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer input with screen-space positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    Move {
        position: Point,
        modifiers: Modifiers,
    },
    Release {
        position: Point,
        button: MouseButton,
    },
}

/// Cursor shape the rendering layer should show for the current hover/gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    ResizeDiagonal,
    ResizeHorizontal,
    ResizeVertical,
}

// ──────────────────────────────────────────────
// Trait: LayoutObserver
// ──────────────────────────────────────────────

/// Receives resize notifications from a draggable element.
/// The container uses it to snapshot and rescale its tracked slots,
/// the coordinator to refit the container around resized slots.
pub trait LayoutObserver {
    fn on_resize_begin(&mut self, _element: ElementId, _rect: Rect) {}
    fn on_resize_changed(&mut self, _element: ElementId, _rect: Rect) {}
}

/// Observer that ignores every notification.
pub struct NullObserver;

impl LayoutObserver for NullObserver {}

// ──────────────────────────────────────────────
// Trait: AssetProvider
// ──────────────────────────────────────────────

/// Asset keys looked up by the display layer.
pub mod asset_keys {
    pub const COLON: &str = "colon";
    pub const BACKGROUND: &str = "bg";
    pub const ICON: &str = "icon";
    pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Maps asset keys (`"0"`..`"9"`, `"colon"`, `"bg"`, `"icon"`) to images.
/// Any key may be absent; callers fall back to font rendering.
pub trait AssetProvider {
    fn image(&self, key: &str) -> Option<&Asset>;

    fn has(&self, key: &str) -> bool {
        self.image(key).is_some()
    }
}

// ──────────────────────────────────────────────
// Trait: ConfigStore
// ──────────────────────────────────────────────

pub const DEFAULT_WINDOW_SIZE: Size = Size::new(500, 200);
pub const DEFAULT_TARGET_DATE: &str = "2026-01-01 00:00:00";
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Persisted widget state. Geometry fields are `None` when missing or invalid
/// in the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub window_size: Size,
    pub window_pos: Option<Point>,
    pub container: Option<Rect>,
    pub slots: [Option<Rect>; SLOT_COUNT],
    pub timezone: String,
    pub target_date: String,
    pub top_most: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            window_pos: None,
            container: None,
            slots: [None; SLOT_COUNT],
            timezone: DEFAULT_TIMEZONE.to_string(),
            target_date: DEFAULT_TARGET_DATE.to_string(),
            top_most: false,
        }
    }
}

impl LayoutConfig {
    /// All five slot rects, if every one is present.
    pub fn complete_slots(&self) -> Option<[Rect; SLOT_COUNT]> {
        let mut out = [Rect::default(); SLOT_COUNT];
        for (dst, src) in out.iter_mut().zip(self.slots.iter()) {
            *dst = (*src)?;
        }
        Some(out)
    }
}

/// Get/set access to the persisted [`LayoutConfig`]. Loading never fails:
/// unreadable state yields defaults.
pub trait ConfigStore {
    fn load(&self) -> LayoutConfig;
    fn save(&mut self, config: &LayoutConfig);
}
