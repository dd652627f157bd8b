// Domain layer: content records and the provider port.

pub mod model;
pub mod ports;
