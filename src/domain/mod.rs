// Domain layer: IFSC models and the service/config ports.

pub mod model;
pub mod ports;
