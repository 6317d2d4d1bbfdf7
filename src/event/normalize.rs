//! Translation of raw window-system notifications into [`Event`]s.
//!
//! Raw notifications follow X11 conventions: modifier masks use the core
//! protocol bits, buttons 4-7 encode scrolling, and expose notifications carry
//! a count of further exposes still queued for the same window.

use crate::{
    event::model::{
        ButtonEvent, ClientEvent, ConfigureEvent, CrossingEvent, CrossingMode, Event,
        ExposeEvent, KeyEvent, Mods, MotionEvent, ScrollDirection, ScrollEvent, TextEvent,
        TimerEvent,
    },
    event::utf8::{decode_utf8, is_printable},
    foundation::core::Region,
};

pub const RAW_SHIFT_MASK: u32 = 1 << 0;
pub const RAW_CONTROL_MASK: u32 = 1 << 2;
pub const RAW_MOD1_MASK: u32 = 1 << 3;
pub const RAW_MOD4_MASK: u32 = 1 << 6;

/// Pointer position and modifier state shared by input notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RawPointer {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    /// Core-protocol modifier mask.
    pub state: u32,
}

/// A notification as delivered by the window system.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawEvent {
    Expose {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        /// Number of exposes still queued after this one.
        #[serde(default)]
        count: u32,
    },
    ConfigureNotify {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    MapNotify,
    UnmapNotify,
    FocusIn,
    FocusOut,
    KeyPress {
        #[serde(flatten)]
        pointer: RawPointer,
        keycode: u32,
        /// Text the input method produced for this key, as UTF-8.
        #[serde(default)]
        bytes: Vec<u8>,
    },
    KeyRelease {
        #[serde(flatten)]
        pointer: RawPointer,
        keycode: u32,
        #[serde(default)]
        bytes: Vec<u8>,
    },
    ButtonPress {
        #[serde(flatten)]
        pointer: RawPointer,
        button: u32,
    },
    ButtonRelease {
        #[serde(flatten)]
        pointer: RawPointer,
        button: u32,
    },
    MotionNotify {
        #[serde(flatten)]
        pointer: RawPointer,
    },
    EnterNotify {
        #[serde(flatten)]
        pointer: RawPointer,
        #[serde(default)]
        mode: u8,
    },
    LeaveNotify {
        #[serde(flatten)]
        pointer: RawPointer,
        #[serde(default)]
        mode: u8,
    },
    DeleteWindow,
    ClientMessage {
        data1: u64,
        data2: u64,
    },
    Timer {
        id: u64,
    },
}

pub fn mods_from_raw(state: u32) -> Mods {
    let mut mods = Mods::empty();
    mods.set(Mods::SHIFT, state & RAW_SHIFT_MASK != 0);
    mods.set(Mods::CTRL, state & RAW_CONTROL_MASK != 0);
    mods.set(Mods::ALT, state & RAW_MOD1_MASK != 0);
    mods.set(Mods::SUPER, state & RAW_MOD4_MASK != 0);
    mods
}

fn crossing_mode(mode: u8) -> CrossingMode {
    match mode {
        1 => CrossingMode::Grab,
        2 => CrossingMode::Ungrab,
        _ => CrossingMode::Normal,
    }
}

fn scroll_for_button(button: u32) -> Option<(ScrollDirection, f64, f64)> {
    match button {
        4 => Some((ScrollDirection::Up, 0.0, 1.0)),
        5 => Some((ScrollDirection::Down, 0.0, -1.0)),
        6 => Some((ScrollDirection::Left, -1.0, 0.0)),
        7 => Some((ScrollDirection::Right, 1.0, 0.0)),
        _ => None,
    }
}

/// Stateful translator from [`RawEvent`] to [`Event`].
///
/// The only state is the expose region accumulated while the window system
/// reports more exposes pending.
#[derive(Debug, Default)]
pub struct Normalizer {
    pending_expose: Option<Region>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region merged from exposes that have not been released yet.
    pub fn pending_expose(&self) -> Option<Region> {
        self.pending_expose
    }

    /// Translate one notification. May yield zero, one or two events.
    pub fn normalize(&mut self, raw: &RawEvent) -> Vec<Event> {
        match raw {
            RawEvent::Expose {
                x,
                y,
                width,
                height,
                count,
            } => {
                let region = Region::new(*x, *y, *width, *height);
                let merged = self
                    .pending_expose
                    .map_or(region, |pending| pending.union(region));
                if *count > 0 {
                    self.pending_expose = Some(merged);
                    return Vec::new();
                }
                self.pending_expose = None;
                if merged.is_empty() {
                    return Vec::new();
                }
                vec![Event::Expose(ExposeEvent::from_region(merged))]
            }
            RawEvent::ConfigureNotify {
                x,
                y,
                width,
                height,
            } => vec![Event::Configure(ConfigureEvent::new(
                *x, *y, *width, *height,
            ))],
            RawEvent::MapNotify => vec![Event::Map],
            RawEvent::UnmapNotify => vec![Event::Unmap],
            RawEvent::FocusIn => vec![Event::FocusIn],
            RawEvent::FocusOut => vec![Event::FocusOut],
            RawEvent::KeyPress {
                pointer,
                keycode,
                bytes,
            } => {
                let decoded = decode_utf8(bytes);
                let key = KeyEvent {
                    time: pointer.time,
                    x: pointer.x,
                    y: pointer.y,
                    state: mods_from_raw(pointer.state),
                    keycode: *keycode,
                    key: decoded.map_or(0, u32::from),
                };
                let mut out = vec![Event::KeyPress(key)];
                if let Some(c) = decoded.filter(|c| is_printable(*c)) {
                    out.push(Event::Text(TextEvent {
                        time: pointer.time,
                        x: pointer.x,
                        y: pointer.y,
                        state: key.state,
                        keycode: *keycode,
                        character: c,
                        string: c.to_string(),
                    }));
                }
                out
            }
            RawEvent::KeyRelease {
                pointer,
                keycode,
                bytes,
            } => vec![Event::KeyRelease(KeyEvent {
                time: pointer.time,
                x: pointer.x,
                y: pointer.y,
                state: mods_from_raw(pointer.state),
                keycode: *keycode,
                key: decode_utf8(bytes).map_or(0, u32::from),
            })],
            RawEvent::ButtonPress { pointer, button } => {
                if let Some((direction, dx, dy)) = scroll_for_button(*button) {
                    return vec![Event::Scroll(ScrollEvent {
                        time: pointer.time,
                        x: pointer.x,
                        y: pointer.y,
                        state: mods_from_raw(pointer.state),
                        direction,
                        dx,
                        dy,
                    })];
                }
                vec![Event::ButtonPress(button_event(pointer, *button))]
            }
            RawEvent::ButtonRelease { pointer, button } => {
                if scroll_for_button(*button).is_some() {
                    return Vec::new();
                }
                vec![Event::ButtonRelease(button_event(pointer, *button))]
            }
            RawEvent::MotionNotify { pointer } => vec![Event::Motion(MotionEvent {
                time: pointer.time,
                x: pointer.x,
                y: pointer.y,
                state: mods_from_raw(pointer.state),
            })],
            RawEvent::EnterNotify { pointer, mode } => {
                vec![Event::PointerIn(crossing_event(pointer, *mode))]
            }
            RawEvent::LeaveNotify { pointer, mode } => {
                vec![Event::PointerOut(crossing_event(pointer, *mode))]
            }
            RawEvent::DeleteWindow => vec![Event::Close],
            RawEvent::ClientMessage { data1, data2 } => vec![Event::Client(ClientEvent {
                data1: *data1,
                data2: *data2,
            })],
            RawEvent::Timer { id } => vec![Event::Timer(TimerEvent { id: *id })],
        }
    }
}

fn button_event(pointer: &RawPointer, button: u32) -> ButtonEvent {
    ButtonEvent {
        time: pointer.time,
        x: pointer.x,
        y: pointer.y,
        state: mods_from_raw(pointer.state),
        button,
    }
}

fn crossing_event(pointer: &RawPointer, mode: u8) -> CrossingEvent {
    CrossingEvent {
        time: pointer.time,
        x: pointer.x,
        y: pointer.y,
        state: mods_from_raw(pointer.state),
        mode: crossing_mode(mode),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/event/normalize.rs"]
mod tests;
