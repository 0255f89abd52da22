use crate::core::{Group, Player};
use crate::utils::error::Result;

fn handicap_text(player: &Player) -> String {
    player
        .handicap
        .map(|h| h.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_roster(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players yet.".to_string();
    }

    let mut lines = vec![format!("{:<8} {:<24} {:>4}  Charity", "ID", "Name", "Hcp")];
    lines.extend(players.iter().map(|player| {
        format!(
            "{:<8} {:<24} {:>4}  {}",
            player.id,
            player.name,
            handicap_text(player),
            player.charity.as_deref().unwrap_or("")
        )
    }));
    lines.push(format!("{} players", players.len()));
    lines.join("\n")
}

pub fn format_groups(groups: &[Group]) -> String {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("{} [{}]", group.label, group.code));
        for player in &group.players {
            lines.push(format!("  - {} ({})", player.name, handicap_text(player)));
        }
        if let Some(avg) = group.average_handicap() {
            lines.push(format!("  avg hcp {:.1}", avg));
        }
    }
    lines.join("\n")
}

pub fn groups_json(groups: &[Group]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}
