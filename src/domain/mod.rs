// Domain layer: verdicts, report lines and the validator port.

pub mod model;
pub mod ports;
