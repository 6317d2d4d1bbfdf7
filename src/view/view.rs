use crate::{
    backend::{Backend, BackendState, DrawingContext, backend},
    event::{model::ConfigureEvent, normalize::Normalizer},
    foundation::config::ViewConfig,
    foundation::core::{Frame, Region},
    foundation::error::{CasementError, CasementResult},
    view::dispatch::EventHandler,
    view::drawable::{Drawable, MemoryDrawable},
};

/// Lifecycle position of a [`View`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewStage {
    /// Constructed; no backend state yet.
    Allocated,
    /// Backend state created and `Create` delivered.
    Realized,
    /// At least one configure has been applied since realization.
    Configured,
}

/// One on-screen surface: frame geometry, backend, and the backend's private state.
pub struct View {
    pub(crate) title: String,
    pub(crate) frame: Frame,
    pub(crate) backend: &'static dyn Backend,
    pub(crate) state: BackendState,
    pub(crate) drawable: Box<dyn Drawable>,
    pub(crate) handler: Option<Box<dyn EventHandler>>,
    pub(crate) stage: ViewStage,
    pub(crate) visible: bool,
    pub(crate) last_configure: Option<ConfigureEvent>,
    pub(crate) pending_redisplay: Option<Region>,
    pub(crate) normalizer: Normalizer,
}

impl View {
    /// Build a view for `config`, choosing the backend from the registry.
    pub fn new(config: &ViewConfig, drawable: Box<dyn Drawable>) -> Self {
        let mut view = Self::with_backend(config.frame, backend(config.backend), drawable);
        view.title = config.title.clone();
        view
    }

    /// Build a view with an in-memory drawable sized to the configured frame.
    ///
    /// Fails with [`CasementError::BadParameter`] for frames too large to back.
    pub fn in_memory(config: &ViewConfig) -> CasementResult<Self> {
        let drawable = MemoryDrawable::new(
            config.frame.width,
            config.frame.height,
            config.clear_color(),
        )?;
        Ok(Self::new(config, Box::new(drawable)))
    }

    /// Build a view around an explicit backend descriptor.
    pub fn with_backend(
        frame: Frame,
        backend: &'static dyn Backend,
        drawable: Box<dyn Drawable>,
    ) -> Self {
        Self {
            title: String::new(),
            frame,
            backend,
            state: BackendState::Unallocated,
            drawable,
            handler: None,
            stage: ViewStage::Allocated,
            visible: false,
            last_configure: None,
            pending_redisplay: None,
            normalizer: Normalizer::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn backend(&self) -> &'static dyn Backend {
        self.backend
    }

    pub fn backend_state(&self) -> &BackendState {
        &self.state
    }

    pub fn backend_state_mut(&mut self) -> &mut BackendState {
        &mut self.state
    }

    pub fn drawable(&self) -> &dyn Drawable {
        self.drawable.as_ref()
    }

    pub fn drawable_mut(&mut self) -> &mut dyn Drawable {
        self.drawable.as_mut()
    }

    pub fn stage(&self) -> ViewStage {
        self.stage
    }

    pub fn is_realized(&self) -> bool {
        self.stage != ViewStage::Allocated
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Install the client handler, returning the previous one.
    pub fn set_handler(
        &mut self,
        handler: Box<dyn EventHandler>,
    ) -> Option<Box<dyn EventHandler>> {
        self.handler.replace(handler)
    }

    /// The backend's current drawing context; `None` outside a paint bracket.
    pub fn context(&mut self) -> Option<DrawingContext<'_>> {
        let backend = self.backend;
        backend.context(self)
    }

    /// Create backend state and deliver `Create`.
    pub fn realize(&mut self) -> CasementResult<()> {
        if self.is_realized() {
            return Err(CasementError::bad_parameter("view is already realized"));
        }
        let backend = self.backend;
        if let Err(err) = backend.create(self) {
            tracing::warn!(%err, backend = backend.name(), "backend create failed");
            if let Err(cleanup) = backend.destroy(self) {
                tracing::warn!(err = %cleanup, "cleanup after failed create also failed");
            }
            return Err(err);
        }
        self.stage = ViewStage::Realized;
        tracing::debug!(backend = backend.name(), title = %self.title, "view realized");
        self.dispatch_event(&crate::event::model::Event::Create)
    }

    /// Deliver `Destroy` and release backend state. No-op for unrealized views.
    pub fn unrealize(&mut self) -> CasementResult<()> {
        if !self.is_realized() {
            return Ok(());
        }
        let delivered = self.dispatch_event(&crate::event::model::Event::Destroy);
        let backend = self.backend;
        let destroyed = backend.destroy(self);
        self.state = BackendState::Unallocated;
        self.stage = ViewStage::Allocated;
        self.visible = false;
        self.last_configure = None;
        self.pending_redisplay = None;
        delivered.and(destroyed)
    }

    /// Request a redraw of the whole frame on the next [`View::update`].
    pub fn post_redisplay(&mut self) {
        self.post_redisplay_rect(self.frame.local_region());
    }

    /// Request a redraw of `rect` on the next [`View::update`].
    pub fn post_redisplay_rect(&mut self, rect: Region) {
        self.pending_redisplay = Some(
            self.pending_redisplay
                .map_or(rect, |pending| pending.union(rect)),
        );
    }

    pub fn has_pending_redisplay(&self) -> bool {
        self.pending_redisplay.is_some()
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if let Err(err) = self.unrealize() {
            tracing::warn!(%err, "view teardown failed");
        }
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("title", &self.title)
            .field("frame", &self.frame)
            .field("backend", &self.backend.name())
            .field("stage", &self.stage)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/view.rs"]
mod tests;
