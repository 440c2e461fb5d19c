// Domain layer: numeric model, log payload and the logger port.

pub mod model;
pub mod ports;
