use crate::{
    backend::contract::{Backend, BackendState, DrawingContext},
    event::model::ExposeEvent,
    foundation::error::CasementResult,
    view::View,
};

/// Backend that never draws.
///
/// Useful for views whose client renders through some other channel, and as
/// the reference for what every backend must do when nothing is drawn.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubBackend;

impl Backend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn configure(&self, _view: &mut View) -> CasementResult<()> {
        Ok(())
    }

    fn create(&self, view: &mut View) -> CasementResult<()> {
        *view.backend_state_mut() = BackendState::Stub;
        Ok(())
    }

    fn destroy(&self, view: &mut View) -> CasementResult<()> {
        *view.backend_state_mut() = BackendState::Unallocated;
        Ok(())
    }

    fn enter_context(
        &self,
        _view: &mut View,
        _expose: Option<&ExposeEvent>,
    ) -> CasementResult<()> {
        Ok(())
    }

    fn leave_context(
        &self,
        _view: &mut View,
        _expose: Option<&ExposeEvent>,
    ) -> CasementResult<()> {
        Ok(())
    }

    fn resize(&self, _view: &mut View) -> CasementResult<()> {
        Ok(())
    }

    fn context<'v>(&self, _view: &'v mut View) -> Option<DrawingContext<'v>> {
        None
    }
}
