//! Event dispatch for a single [`View`].
//!
//! Dispatch takes `&mut View`, so at most one event is in flight per view and a
//! handler can never re-enter its own view. Paint events are delivered between
//! `enter_context(Some(expose))` and `leave_context(Some(expose))`; leave runs
//! whenever enter succeeded, whatever the handler returns.

use crate::{
    backend::DrawingContext,
    event::{
        model::{ConfigureEvent, Event, ExposeEvent},
        normalize::RawEvent,
    },
    foundation::core::{Frame, Region},
    foundation::error::CasementResult,
    view::view::{View, ViewStage},
};

/// What a handler sees while an event is delivered.
pub struct EventCx<'a> {
    frame: Frame,
    context: Option<DrawingContext<'a>>,
}

impl<'a> EventCx<'a> {
    pub fn new(frame: Frame, context: Option<DrawingContext<'a>>) -> Self {
        Self { frame, context }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Drawing context supplied by the backend, if a bracket is open and the
    /// backend draws at all.
    pub fn context(&mut self) -> Option<&mut DrawingContext<'a>> {
        self.context.as_mut()
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn vector(&mut self) -> Option<&mut vello_cpu::RenderContext> {
        self.context.as_mut().and_then(DrawingContext::as_vector)
    }
}

/// Client side of a view.
pub trait EventHandler {
    fn on_event(&mut self, cx: &mut EventCx<'_>, event: &Event) -> CasementResult<()>;

    /// Whether `event` must be delivered with the graphics context entered.
    ///
    /// Paint events always are; this decides for everything else.
    fn needs_context(&self, event: &Event) -> bool {
        event.is_lifecycle()
    }
}

/// [`EventHandler`] built from a closure.
pub struct FnHandler<F>(F);

impl<F> EventHandler for FnHandler<F>
where
    F: FnMut(&mut EventCx<'_>, &Event) -> CasementResult<()>,
{
    fn on_event(&mut self, cx: &mut EventCx<'_>, event: &Event) -> CasementResult<()> {
        (self.0)(cx, event)
    }
}

pub fn from_fn<F>(f: F) -> FnHandler<F>
where
    F: FnMut(&mut EventCx<'_>, &Event) -> CasementResult<()>,
{
    FnHandler(f)
}

impl View {
    /// Deliver one normalized event.
    #[tracing::instrument(skip(self, event), fields(event = ?event.event_type()))]
    pub fn dispatch_event(&mut self, event: &Event) -> CasementResult<()> {
        match event {
            Event::Configure(configure) => self.dispatch_configure(configure, event),
            Event::Expose(expose) => self.dispatch_expose(expose, event),
            Event::Map => {
                self.visible = true;
                self.deliver(event)
            }
            Event::Unmap => {
                self.visible = false;
                self.deliver(event)
            }
            _ => self.deliver(event),
        }
    }

    /// Normalize one raw notification and dispatch whatever it produces.
    pub fn process_raw(&mut self, raw: &RawEvent) -> CasementResult<()> {
        for event in self.normalizer.normalize(raw) {
            self.dispatch_event(&event)?;
        }
        Ok(())
    }

    /// Process a batch of raw notifications as one event-loop iteration.
    ///
    /// Input and lifecycle notifications are dispatched in order. Configure
    /// notifications collapse to the last one and exposes merge into one
    /// region; the configure is dispatched before the expose, after the rest
    /// of the batch.
    pub fn process_batch(&mut self, batch: &[RawEvent]) -> CasementResult<()> {
        let mut configure = None;
        let mut expose: Option<Region> = None;
        let mut first_err = None;

        for raw in batch {
            match raw {
                RawEvent::ConfigureNotify {
                    x,
                    y,
                    width,
                    height,
                } => configure = Some(ConfigureEvent::new(*x, *y, *width, *height)),
                RawEvent::Expose {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => {
                    let region = Region::new(*x, *y, *width, *height);
                    expose = Some(expose.map_or(region, |pending| pending.union(region)));
                }
                other => {
                    if let Err(err) = self.process_raw(other) {
                        first_err.get_or_insert(err);
                    }
                }
            }
        }

        if let Some(configure) = configure
            && let Err(err) = self.dispatch_event(&Event::Configure(configure))
        {
            first_err.get_or_insert(err);
        }
        if let Some(region) = expose.filter(|r| !r.is_empty())
            && let Err(err) = self.dispatch_event(&Event::Expose(ExposeEvent::from_region(region)))
        {
            first_err.get_or_insert(err);
        }

        first_err.map_or(Ok(()), Err)
    }

    /// Dispatch the redisplay requested by [`View::post_redisplay_rect`], if any.
    pub fn update(&mut self) -> CasementResult<()> {
        let Some(region) = self.pending_redisplay.take() else {
            return Ok(());
        };
        let Some(region) = region.intersect(self.frame.local_region()) else {
            return Ok(());
        };
        self.dispatch_event(&Event::Expose(ExposeEvent::from_region(region)))
    }

    fn dispatch_configure(
        &mut self,
        configure: &ConfigureEvent,
        event: &Event,
    ) -> CasementResult<()> {
        if self.stage == ViewStage::Configured && self.last_configure == Some(*configure) {
            tracing::trace!("configure unchanged, skipping");
            return Ok(());
        }

        self.frame = configure.frame();
        self.last_configure = Some(*configure);
        let backend = self.backend;
        backend.configure(self)?;
        if self.stage == ViewStage::Realized {
            self.stage = ViewStage::Configured;
        }
        self.deliver(event)
    }

    fn dispatch_expose(&mut self, expose: &ExposeEvent, event: &Event) -> CasementResult<()> {
        if expose.is_empty() {
            tracing::trace!("empty expose, skipping");
            return Ok(());
        }
        if !self.is_realized() {
            tracing::debug!("expose on an unrealized view, skipping");
            return Ok(());
        }
        self.deliver_bracketed(Some(expose), event)
    }

    fn deliver(&mut self, event: &Event) -> CasementResult<()> {
        let needs_context = self
            .handler
            .as_ref()
            .is_some_and(|handler| handler.needs_context(event));
        if needs_context {
            self.deliver_bracketed(None, event)
        } else {
            self.invoke_handler(event)
        }
    }

    fn deliver_bracketed(
        &mut self,
        expose: Option<&ExposeEvent>,
        event: &Event,
    ) -> CasementResult<()> {
        let backend = self.backend;
        if let Err(err) = backend.enter_context(self, expose) {
            tracing::warn!(%err, backend = backend.name(), "enter_context failed");
            return Err(err);
        }

        let handled = self.invoke_handler(event);
        let left = backend.leave_context(self, expose);

        match (handled, left) {
            (Err(err), Err(leave_err)) => {
                tracing::warn!(err = %leave_err, "leave_context failed after handler error");
                Err(err)
            }
            (Err(err), Ok(())) => Err(err),
            (Ok(()), left) => left,
        }
    }

    fn invoke_handler(&mut self, event: &Event) -> CasementResult<()> {
        let Some(mut handler) = self.handler.take() else {
            return Ok(());
        };
        let frame = self.frame;
        let backend = self.backend;
        let result = {
            let mut cx = EventCx::new(frame, backend.context(self));
            handler.on_event(&mut cx, event)
        };
        self.handler = Some(handler);
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/dispatch.rs"]
mod tests;
