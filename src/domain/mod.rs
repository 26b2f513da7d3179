// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde and the trait machinery.

pub mod model;
pub mod ports;
