//! Scripted event replay against an in-memory view.
//!
//! A [`ReplayScript`] carries a view configuration, a list of raw
//! notifications, and the paint operations the client performs on every
//! expose. Replaying it drives the real dispatcher and backend, and returns
//! the final contents of the drawable.

use std::{cell::RefCell, path::Path, rc::Rc};

use crate::{
    event::model::Event,
    event::normalize::RawEvent,
    foundation::config::ViewConfig,
    foundation::core::{Extent, Region},
    foundation::error::{CasementError, CasementResult},
    render::composite::unpremultiply_in_place,
    view::dispatch::{EventCx, EventHandler},
    view::View,
};

/// A drawing command issued by the replay client on every expose.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    /// Fill the whole frame.
    Clear { rgba: [u8; 4] },
    /// Fill a rectangle with a straight-alpha color.
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rgba: [u8; 4],
        #[serde(default)]
        opacity: Option<f32>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayScript {
    pub config: ViewConfig,
    /// Raw notifications, processed in order.
    pub events: Vec<RawEvent>,
    /// Process `events` as one event-loop iteration instead of one by one.
    pub batch: bool,
    pub paint: Vec<PaintOp>,
}

impl ReplayScript {
    pub fn from_json_str(s: &str) -> CasementResult<Self> {
        serde_json::from_str(s).map_err(|e| CasementError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> CasementResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CasementError::Other(
                anyhow::Error::new(e).context(format!("read replay script '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }
}

/// Final drawable contents, as straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: u64,
    pub paints: u64,
    /// Exposed regions in delivery order.
    pub exposed: Vec<Region>,
    /// Paint cycles that failed without taking the view down.
    pub paint_failures: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ReplayOutcome {
    pub frame: FrameRGBA,
    pub stats: ReplayStats,
}

struct ScriptClient {
    ops: Vec<PaintOp>,
    stats: Rc<RefCell<ReplayStats>>,
}

impl EventHandler for ScriptClient {
    fn on_event(&mut self, cx: &mut EventCx<'_>, event: &Event) -> CasementResult<()> {
        let mut stats = self.stats.borrow_mut();
        stats.events += 1;
        let Some(expose) = event.as_expose() else {
            return Ok(());
        };
        stats.paints += 1;
        stats.exposed.push(expose.region());

        let frame = cx.frame();
        let Some(ctx) = cx.vector() else {
            tracing::debug!("backend supplied no vector context, nothing drawn");
            return Ok(());
        };
        for op in &self.ops {
            draw_op(ctx, op, f64::from(frame.width), f64::from(frame.height));
        }
        Ok(())
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &PaintOp, frame_w: f64, frame_h: f64) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match op {
        PaintOp::Clear { rgba: [r, g, b, a] } => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(*r, *g, *b, *a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, frame_w, frame_h));
        }
        PaintOp::FillRect {
            x,
            y,
            width,
            height,
            rgba: [r, g, b, a],
            opacity,
        } => {
            let opacity = opacity.unwrap_or(1.0).clamp(0.0, 1.0);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(*r, *g, *b, *a));
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(*x, *y, x + width, y + height));
            if opacity < 1.0 {
                ctx.pop_layer();
            }
        }
    }
}

/// Replay `script` and return the drawable contents plus dispatch statistics.
///
/// Failures scoped to a single paint cycle are recorded and replay continues;
/// anything else aborts.
#[tracing::instrument(skip(script), fields(events = script.events.len()))]
pub fn run_replay(script: &ReplayScript) -> CasementResult<ReplayOutcome> {
    let stats = Rc::new(RefCell::new(ReplayStats::default()));
    let mut view = View::in_memory(&script.config)?;
    view.set_handler(Box::new(ScriptClient {
        ops: script.paint.clone(),
        stats: Rc::clone(&stats),
    }));
    view.realize()?;

    let record = |result: CasementResult<()>| -> CasementResult<()> {
        match result {
            Err(err) if err.is_paint_scoped() => {
                tracing::warn!(%err, "paint cycle failed");
                stats.borrow_mut().paint_failures.push(err.to_string());
                Ok(())
            }
            other => other,
        }
    };

    if script.batch {
        record(view.process_batch(&script.events))?;
    } else {
        for raw in &script.events {
            record(view.process_raw(raw))?;
        }
    }
    record(view.update())?;

    let (width, height) = view.drawable().size();
    let mut data = match Extent::new(width, height) {
        Ok(extent) => view.drawable().snapshot(extent)?,
        Err(_) => Vec::new(),
    };
    unpremultiply_in_place(&mut data);
    view.unrealize()?;

    let stats = stats.borrow().clone();
    tracing::debug!(
        paints = stats.paints,
        failures = stats.paint_failures.len(),
        "replay finished"
    );
    Ok(ReplayOutcome {
        frame: FrameRGBA {
            width,
            height,
            data,
        },
        stats,
    })
}

/// One-line summary for CLI output.
pub fn summarize(stats: &ReplayStats) -> String {
    format!(
        "{} events, {} paints ({} failed)",
        stats.events,
        stats.paints,
        stats.paint_failures.len()
    )
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
