// Domain layer: entity records, the clone-with-overrides protocol and ports (interfaces).

pub mod cloneable;
pub mod data;
pub mod dfd;
pub mod dpia;
pub mod labels;
pub mod model;
pub mod ports;
