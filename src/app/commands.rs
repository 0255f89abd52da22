use crate::adapters::export::export_scorecards;
use crate::app::render::{format_groups, format_roster, groups_json};
use crate::config::Command;
use crate::core::event::EventSession;
use crate::core::{Confirmation, PlayerForm, PlayerId, PlayerStore};
use crate::utils::error::Result;
use rand::Rng;

/// 對一個活動執行單一命令，回傳要印出的文字
pub async fn run_command<S, R, C>(
    session: &mut EventSession<S, R>,
    command: &Command,
    confirmation: &C,
) -> Result<String>
where
    S: PlayerStore,
    R: Rng,
    C: Confirmation + ?Sized,
{
    match command {
        Command::List => {
            let players = session.load_roster().await?;
            Ok(format_roster(players))
        }
        Command::Add {
            name,
            handicap,
            charity,
        } => {
            let form = PlayerForm::new(name.as_str(), handicap.as_str(), charity.as_str());
            session.add_player(&form).await?;
            Ok(format!(
                "Added {}. Roster now has {} players.",
                name.trim(),
                session.players().len()
            ))
        }
        Command::Remove { id, .. } => {
            // 先載入名單，確認提示才能顯示玩家名稱
            session.load_roster().await?;
            let id = PlayerId::new(id.as_str());
            if session.delete_player(&id, confirmation).await? {
                Ok(format!(
                    "Removed player {}. Roster now has {} players.",
                    id,
                    session.players().len()
                ))
            } else {
                Ok("Cancelled.".to_string())
            }
        }
        Command::Groups { json, csv, .. } => {
            session.load_roster().await?;
            let groups = session.generate_groups()?;

            if let Some(path) = csv {
                export_scorecards(groups, path)?;
            }

            if *json {
                groups_json(groups)
            } else {
                Ok(format_groups(groups))
            }
        }
    }
}
