// Domain layer: feed and test-case models plus the ports the pipeline is built on.

pub mod model;
pub mod ports;
