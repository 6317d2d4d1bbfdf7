pub mod dispatch;
pub mod drawable;
#[allow(clippy::module_inception)]
pub mod view;

pub use view::{View, ViewStage};
