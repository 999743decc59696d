// Domain layer: core models and ports (interfaces). Nothing here touches the
// network or the terminal.

pub mod model;
pub mod ports;
