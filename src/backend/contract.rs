use crate::{
    backend::vector::VectorState,
    event::model::ExposeEvent,
    foundation::error::CasementResult,
    view::View,
};

/// Drawing strategy for a view.
///
/// Implementations are stateless, process-wide descriptors shared by every
/// view of the same kind; per-view data lives in the view's [`BackendState`].
/// All operations run on the thread that owns the view, one dispatch at a
/// time.
///
/// The minimal conforming implementation is [`StubBackend`](crate::StubBackend):
/// every operation succeeds and [`Backend::context`] is always `None`.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Short identifier used in logs and the registry listing.
    fn name(&self) -> &'static str;

    /// The view's frame changed. Buffered backends drop cached surface sizes.
    fn configure(&self, view: &mut View) -> CasementResult<()>;

    /// Attach zero-initialized backend state to the view. Must not allocate surfaces.
    fn create(&self, view: &mut View) -> CasementResult<()>;

    /// Release open surfaces and backend state. Safe on partially created views.
    fn destroy(&self, view: &mut View) -> CasementResult<()>;

    /// Open a drawing context.
    ///
    /// With `expose`, allocates whatever the client draws into for this paint
    /// cycle. Without, the call is a no-op that lets non-paint events be
    /// bracketed uniformly.
    fn enter_context(&self, view: &mut View, expose: Option<&ExposeEvent>)
    -> CasementResult<()>;

    /// Close the context opened by the matching [`Backend::enter_context`].
    ///
    /// With `expose`, commits drawn content to the native drawable and
    /// releases every per-paint resource, on success and failure alike.
    fn leave_context(&self, view: &mut View, expose: Option<&ExposeEvent>)
    -> CasementResult<()>;

    /// Explicit resize hook usable outside the paint flow.
    fn resize(&self, view: &mut View) -> CasementResult<()>;

    /// The drawing context of the open paint bracket, if any.
    fn context<'v>(&self, view: &'v mut View) -> Option<DrawingContext<'v>>;
}

/// Handle through which a client issues drawing commands.
#[non_exhaustive]
pub enum DrawingContext<'a> {
    /// `vello_cpu` context bound to the front surface.
    Vector(&'a mut vello_cpu::RenderContext),
}

impl<'a> DrawingContext<'a> {
    pub fn as_vector(&mut self) -> Option<&mut vello_cpu::RenderContext> {
        match self {
            Self::Vector(ctx) => Some(&mut **ctx),
        }
    }

    pub fn into_vector(self) -> Option<&'a mut vello_cpu::RenderContext> {
        match self {
            Self::Vector(ctx) => Some(ctx),
        }
    }
}

impl std::fmt::Debug for DrawingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vector(_) => f.write_str("DrawingContext::Vector"),
        }
    }
}

/// Per-view private state, one variant per backend kind.
#[derive(Debug, Default)]
pub enum BackendState {
    /// Nothing created yet, or already destroyed.
    #[default]
    Unallocated,
    Stub,
    Vector(VectorState),
}

impl BackendState {
    pub fn is_allocated(&self) -> bool {
        !matches!(self, Self::Unallocated)
    }

    pub fn as_vector(&self) -> Option<&VectorState> {
        match self {
            Self::Vector(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_vector_mut(&mut self) -> Option<&mut VectorState> {
        match self {
            Self::Vector(state) => Some(state),
            _ => None,
        }
    }

    /// True while a paint bracket holds surfaces.
    pub fn has_open_surfaces(&self) -> bool {
        self.as_vector().is_some_and(VectorState::is_open)
    }
}
