pub mod composite;
pub mod surface;
