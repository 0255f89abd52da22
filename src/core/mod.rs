pub mod code;
pub mod event;
pub mod grouping;
pub mod input;
pub mod roster;

pub use crate::domain::model::{Group, GroupCode, NewPlayer, Player, PlayerForm, PlayerId};
pub use crate::domain::ports::{Confirmation, ConfigProvider, PlayerStore};
pub use crate::utils::error::Result;
