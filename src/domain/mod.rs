// Domain layer: wire-level bid models. No I/O beyond serde.

pub mod model;
pub mod multi_string;
