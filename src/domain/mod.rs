// Domain layer: roster models and ports to the outside world (store, config, confirmation).

pub mod model;
pub mod ports;
