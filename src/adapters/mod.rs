// Adapters layer: concrete implementations of the domain ports (store, confirmation) and exports.

pub mod export;
pub mod memory_store;
pub mod prompt;
pub mod rest_store;
