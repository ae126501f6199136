// Domain layer: the student record and the ports the core talks through.

pub mod model;
pub mod ports;
