// Domain layer: course model and the source port the loader reads through.

pub mod model;
pub mod ports;
