pub mod contract;
pub mod registry;
pub mod stub;
pub mod vector;

pub use contract::{Backend, BackendState, DrawingContext};
pub use registry::{BackendKind, backend, registry};
pub use stub::StubBackend;
pub use vector::{VectorBackend, VectorState};
