pub mod model;
pub mod normalize;
pub mod utf8;
