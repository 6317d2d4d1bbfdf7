use crate::foundation::core::{Frame, Region};

bitflags::bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Mods: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Region of a view that must be redrawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExposeEvent {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ExposeEvent {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn region(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }

    pub fn from_region(r: Region) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }

    pub fn is_empty(&self) -> bool {
        self.region().is_empty()
    }
}

/// New position and size of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConfigureEvent {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ConfigureEvent {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
    /// Raw platform keycode.
    pub keycode: u32,
    /// Unicode code point of the key, or 0 for non-character keys.
    pub key: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
    pub keycode: u32,
    pub character: char,
    /// UTF-8 encoding of `character`.
    pub string: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrossingMode {
    Normal,
    Grab,
    Ungrab,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
    pub mode: CrossingMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
    /// 1-based button number.
    pub button: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub state: Mods,
    pub direction: ScrollDirection,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClientEvent {
    pub data1: u64,
    pub data2: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerEvent {
    pub id: u64,
}

/// Stable tag for each [`Event`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Create,
    Destroy,
    Configure,
    Map,
    Unmap,
    Expose,
    Close,
    FocusIn,
    FocusOut,
    KeyPress,
    KeyRelease,
    Text,
    PointerIn,
    PointerOut,
    ButtonPress,
    ButtonRelease,
    Motion,
    Scroll,
    Client,
    Timer,
}

/// Normalized event delivered to a view's handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Create,
    Destroy,
    Configure(ConfigureEvent),
    Map,
    Unmap,
    Expose(ExposeEvent),
    Close,
    FocusIn,
    FocusOut,
    KeyPress(KeyEvent),
    KeyRelease(KeyEvent),
    Text(TextEvent),
    PointerIn(CrossingEvent),
    PointerOut(CrossingEvent),
    ButtonPress(ButtonEvent),
    ButtonRelease(ButtonEvent),
    Motion(MotionEvent),
    Scroll(ScrollEvent),
    Client(ClientEvent),
    Timer(TimerEvent),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Create => EventType::Create,
            Self::Destroy => EventType::Destroy,
            Self::Configure(_) => EventType::Configure,
            Self::Map => EventType::Map,
            Self::Unmap => EventType::Unmap,
            Self::Expose(_) => EventType::Expose,
            Self::Close => EventType::Close,
            Self::FocusIn => EventType::FocusIn,
            Self::FocusOut => EventType::FocusOut,
            Self::KeyPress(_) => EventType::KeyPress,
            Self::KeyRelease(_) => EventType::KeyRelease,
            Self::Text(_) => EventType::Text,
            Self::PointerIn(_) => EventType::PointerIn,
            Self::PointerOut(_) => EventType::PointerOut,
            Self::ButtonPress(_) => EventType::ButtonPress,
            Self::ButtonRelease(_) => EventType::ButtonRelease,
            Self::Motion(_) => EventType::Motion,
            Self::Scroll(_) => EventType::Scroll,
            Self::Client(_) => EventType::Client,
            Self::Timer(_) => EventType::Timer,
        }
    }

    /// Geometry change that must reach the backend before the next paint.
    pub fn is_configure(&self) -> bool {
        matches!(self, Self::Configure(_))
    }

    /// Redraw request, delivered inside a paint bracket.
    pub fn is_paint(&self) -> bool {
        matches!(self, Self::Expose(_))
    }

    /// Lifecycle events that are always delivered with the graphics context entered.
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Create | Self::Destroy)
    }

    pub fn as_expose(&self) -> Option<&ExposeEvent> {
        match self {
            Self::Expose(e) => Some(e),
            _ => None,
        }
    }
}
