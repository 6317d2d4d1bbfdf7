use std::path::Path;

use crate::{
    backend::BackendKind,
    foundation::core::{Frame, Rgba8Premul},
    foundation::error::{CasementError, CasementResult},
};

/// Environment variable that overrides [`ViewConfig::backend`].
pub const BACKEND_ENV: &str = "CASEMENT_BACKEND";

/// Construction parameters for a [`View`](crate::View).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub title: String,
    /// Initial frame; replaced by the first configure event.
    pub frame: Frame,
    pub backend: BackendKind,
    /// Straight-alpha RGBA used to fill a freshly created drawable.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "casement".to_string(),
            frame: Frame::sized(640, 480),
            backend: BackendKind::Vector,
            clear_rgba: None,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(s: &str) -> CasementResult<Self> {
        serde_json::from_str(s).map_err(|e| CasementError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> CasementResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CasementError::Other(anyhow::Error::new(e).context(format!(
                "read view config '{}'",
                path.display()
            )))
        })?;
        Self::from_json_str(&text)
    }

    /// Apply `CASEMENT_BACKEND` if it is set.
    pub fn with_env_overrides(self) -> CasementResult<Self> {
        let value = std::env::var(BACKEND_ENV).ok();
        self.with_backend_override(value.as_deref())
    }

    pub fn with_backend_override(mut self, value: Option<&str>) -> CasementResult<Self> {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.backend = v.parse()?;
        }
        Ok(self)
    }

    /// Premultiplied fill color for new drawables (transparent when unset).
    pub fn clear_color(&self) -> Rgba8Premul {
        self.clear_rgba
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
