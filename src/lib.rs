//! Casement is a small windowing abstraction with pluggable drawing backends.
//!
//! A [`View`] owns a platform drawable, a drawing [`Backend`] chosen from a
//! static registry, and the client's [`EventHandler`]. Raw window-system
//! notifications are normalized into [`Event`]s and dispatched to the client;
//! expose events are bracketed by the backend so the client can draw into a
//! double-buffered vector context.
//!
//! # Paint cycle
//!
//! 1. **Configure**: the view records the new frame and the backend drops any
//!    cached surface extent.
//! 2. **Enter**: on expose the vector backend allocates a back and front surface
//!    sized to the frame, seeded with the current drawable contents.
//! 3. **Draw**: the client renders into the context handed out by
//!    [`View::context`] or [`EventCx::vector`].
//! 4. **Leave**: drawing is composited onto the front surface, copied to the
//!    back surface clipped to the exposed rectangle, presented to the drawable,
//!    and both surfaces are released.
//!
//! All pixel buffers are premultiplied RGBA8.
#![forbid(unsafe_code)]

mod backend;
mod event;
mod foundation;
mod render;
mod view;

/// Scripted replay of raw notifications against an in-memory view.
pub mod replay;

pub use backend::{
    Backend, BackendKind, BackendState, DrawingContext, StubBackend, VectorBackend, VectorState,
    backend, registry,
};
pub use event::model::{
    ButtonEvent, ClientEvent, ConfigureEvent, CrossingEvent, CrossingMode, Event, EventType,
    ExposeEvent, KeyEvent, Mods, MotionEvent, ScrollDirection, ScrollEvent, TextEvent, TimerEvent,
};
pub use event::normalize::{
    Normalizer, RAW_CONTROL_MASK, RAW_MOD1_MASK, RAW_MOD4_MASK, RAW_SHIFT_MASK, RawEvent,
    RawPointer, mods_from_raw,
};
pub use event::utf8::{decode_utf8, is_printable};
pub use foundation::config::{BACKEND_ENV, ViewConfig};
pub use foundation::core::{BYTES_PER_PIXEL, Extent, Frame, Region, Rgba8Premul};
pub use foundation::error::{CasementError, CasementResult};
pub use render::composite::{copy_region, over, over_in_place, unpremultiply_in_place};
pub use render::surface::{Surface, SurfacePair};
pub use view::dispatch::{EventCx, EventHandler, FnHandler, from_fn};
pub use view::drawable::{Drawable, MemoryDrawable};
pub use view::{View, ViewStage};
