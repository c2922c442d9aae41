// Domain layer: records fetched from the service and the seams the engine depends on.

pub mod model;
pub mod ports;
