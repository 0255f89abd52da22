pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::{StoreSettings, TomlConfig};

pub use crate::adapters::{
    memory_store::MemoryPlayerStore, prompt::StdinConfirmation, rest_store::RestPlayerStore,
};
pub use crate::core::{
    event::EventSession,
    grouping::{GroupingEngine, GroupingState},
    roster::RosterManager,
};
pub use crate::domain::model::{Group, GroupCode, NewPlayer, Player, PlayerForm, PlayerId};
pub use crate::domain::ports::{Confirmation, ConfigProvider, PlayerStore};
pub use crate::utils::error::{RosterError, Result};
