// Domain layer: value types, wire shapes and the gateway port.

pub mod model;
pub mod ports;
pub mod response;
pub mod shipment;
