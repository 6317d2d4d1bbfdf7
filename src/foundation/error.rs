/// Convenience result type used across casement.
pub type CasementResult<T> = Result<T, CasementError>;

/// Status taxonomy shared by backends, views and the dispatcher.
///
/// `Ok(())` plays the role of a success status; every other outcome is one of
/// these variants.
#[derive(thiserror::Error, Debug)]
pub enum CasementError {
    /// A caller passed an argument the operation cannot act on.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// Backend-private state could not be created for a view.
    #[error("backend failed: {0}")]
    BackendFailed(String),

    /// Surface or drawing-context allocation was invalid for this paint cycle.
    #[error("create context failed: {0}")]
    CreateContextFailed(String),

    /// A paint bracket is already open on this view.
    #[error("context busy: {0}")]
    ContextBusy(String),

    /// Failure reported by the window-system layer, passed through unchanged.
    #[error("window system error: {0}")]
    Window(String),

    /// Errors when serializing or deserializing configuration or scripts.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CasementError {
    /// Build a [`CasementError::BadParameter`] value.
    pub fn bad_parameter(msg: impl Into<String>) -> Self {
        Self::BadParameter(msg.into())
    }

    /// Build a [`CasementError::BackendFailed`] value.
    pub fn backend_failed(msg: impl Into<String>) -> Self {
        Self::BackendFailed(msg.into())
    }

    /// Build a [`CasementError::CreateContextFailed`] value.
    pub fn create_context_failed(msg: impl Into<String>) -> Self {
        Self::CreateContextFailed(msg.into())
    }

    /// Build a [`CasementError::ContextBusy`] value.
    pub fn context_busy(msg: impl Into<String>) -> Self {
        Self::ContextBusy(msg.into())
    }

    /// Build a [`CasementError::Window`] value.
    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    /// Build a [`CasementError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for failures scoped to a single paint cycle.
    ///
    /// The view stays usable and the next expose retries from a clean state.
    pub fn is_paint_scoped(&self) -> bool {
        matches!(self, Self::CreateContextFailed(_) | Self::ContextBusy(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
