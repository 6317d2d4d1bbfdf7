use crate::{
    backend::contract::{Backend, BackendState, DrawingContext},
    event::model::ExposeEvent,
    foundation::core::{Extent, Frame},
    foundation::error::{CasementError, CasementResult},
    render::surface::{Surface, SurfacePair},
    view::View,
};

/// Double-buffered `vello_cpu` backend.
///
/// Each expose gets a fresh surface pair: the client draws into front, and on
/// leave only the exposed rectangle of front is copied onto back, which is
/// then presented to the native drawable. Nothing survives between exposes.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorBackend;

/// Per-view state of [`VectorBackend`].
#[derive(Debug, Default)]
pub struct VectorState {
    pair: Option<SurfacePair>,
    /// Extent of the last allocation, kept for diagnostics only. Cleared by
    /// configure; every enter allocates from the current frame.
    extent: Option<Extent>,
    paints: u64,
}

impl VectorState {
    /// True while a paint bracket holds surfaces.
    pub fn is_open(&self) -> bool {
        self.pair.is_some()
    }

    pub fn back(&self) -> Option<&Surface> {
        self.pair.as_ref().map(SurfacePair::back)
    }

    pub fn front(&self) -> Option<&Surface> {
        self.pair.as_ref().map(SurfacePair::front)
    }

    /// Size of the surfaces allocated for the current or last paint.
    ///
    /// Diagnostic only: `None` after a configure until the next enter or
    /// [`Backend::resize`]. Allocation never reads it.
    pub fn cached_extent(&self) -> Option<Extent> {
        self.extent
    }

    /// Number of paint brackets committed so far.
    pub fn paint_count(&self) -> u64 {
        self.paints
    }
}

fn vector_state(view: &mut View) -> CasementResult<&mut VectorState> {
    view.backend_state_mut().as_vector_mut().ok_or_else(|| {
        CasementError::create_context_failed("vector backend state was not created")
    })
}

impl Backend for VectorBackend {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn configure(&self, view: &mut View) -> CasementResult<()> {
        if let Some(state) = view.backend_state_mut().as_vector_mut() {
            state.extent = None;
        }
        Ok(())
    }

    fn create(&self, view: &mut View) -> CasementResult<()> {
        let Frame { width, height, .. } = view.frame();
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(CasementError::backend_failed(format!(
                "frame {width}x{height} exceeds the largest vector surface"
            )));
        }
        *view.backend_state_mut() = BackendState::Vector(VectorState::default());
        Ok(())
    }

    fn destroy(&self, view: &mut View) -> CasementResult<()> {
        let state = std::mem::take(view.backend_state_mut());
        if state.has_open_surfaces() {
            tracing::warn!("destroying vector state with an open paint bracket");
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, view))]
    fn enter_context(
        &self,
        view: &mut View,
        expose: Option<&ExposeEvent>,
    ) -> CasementResult<()> {
        let Some(expose) = expose else {
            return Ok(());
        };
        if expose.is_empty() {
            return Err(CasementError::bad_parameter(
                "expose region must have a positive width and height",
            ));
        }

        let frame = view.frame();
        let state = vector_state(view)?;
        if state.is_open() {
            return Err(CasementError::context_busy(
                "enter_context called twice without leave_context",
            ));
        }

        let extent = frame.extent()?;
        match state.extent {
            Some(cached) if cached != extent => {
                tracing::debug!(?cached, ?extent, "reallocating at a new size");
            }
            None => tracing::trace!(?extent, "first allocation since configure"),
            Some(_) => {}
        }
        state.extent = Some(extent);

        let pair = SurfacePair::open(view.drawable(), extent)?;
        vector_state(view)?.pair = Some(pair);
        Ok(())
    }

    #[tracing::instrument(skip(self, view))]
    fn leave_context(
        &self,
        view: &mut View,
        expose: Option<&ExposeEvent>,
    ) -> CasementResult<()> {
        let Some(expose) = expose else {
            return Ok(());
        };
        let Some(state) = view.backend_state_mut().as_vector_mut() else {
            return Ok(());
        };
        let Some(mut pair) = state.pair.take() else {
            return Ok(());
        };
        state.paints += 1;

        let committed = pair.commit(expose.region());
        if let Err(err) = &committed {
            tracing::warn!(%err, "compositing front onto back failed");
        }
        let flushed = view
            .drawable_mut()
            .present(pair.extent(), pair.back().data());
        drop(pair);

        committed?;
        flushed
    }

    fn resize(&self, view: &mut View) -> CasementResult<()> {
        let extent = view.frame().extent().ok();
        if let Some(state) = view.backend_state_mut().as_vector_mut() {
            state.extent = extent;
        }
        Ok(())
    }

    fn context<'v>(&self, view: &'v mut View) -> Option<DrawingContext<'v>> {
        let pair = view.backend_state_mut().as_vector_mut()?.pair.as_mut()?;
        Some(DrawingContext::Vector(pair.context_mut()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backend/vector.rs"]
mod tests;
