use std::str::FromStr;

use crate::{
    backend::{contract::Backend, stub::StubBackend, vector::VectorBackend},
    foundation::error::CasementError,
};

/// Backends known to the registry.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Stub,
    #[default]
    Vector,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Stub, BackendKind::Vector];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stub => "stub",
            Self::Vector => "vector",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = CasementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stub" => Ok(Self::Stub),
            "vector" => Ok(Self::Vector),
            other => Err(CasementError::bad_parameter(format!(
                "unknown backend '{other}' (expected one of: stub, vector)"
            ))),
        }
    }
}

static STUB: StubBackend = StubBackend;
static VECTOR: VectorBackend = VectorBackend;

static REGISTRY: [(BackendKind, &dyn Backend); 2] =
    [(BackendKind::Stub, &STUB), (BackendKind::Vector, &VECTOR)];

/// Shared descriptor for `kind`.
pub fn backend(kind: BackendKind) -> &'static dyn Backend {
    match kind {
        BackendKind::Stub => &STUB,
        BackendKind::Vector => &VECTOR,
    }
}

/// Every registered backend, in a stable order.
pub fn registry() -> &'static [(BackendKind, &'static dyn Backend)] {
    &REGISTRY
}

#[cfg(test)]
#[path = "../../tests/unit/backend/registry.rs"]
mod tests;
