use crate::core::Group;
use crate::utils::error::Result;
use serde::Serialize;
use std::path::Path;

/// 記分卡 CSV 的一列：每位成員一列
#[derive(Debug, Serialize)]
struct ScorecardRow<'a> {
    group: &'a str,
    code: &'a str,
    position: usize,
    name: &'a str,
    handicap: Option<u32>,
    charity: Option<&'a str>,
}

pub fn write_scorecards<W: std::io::Write>(groups: &[Group], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for group in groups {
        for (index, player) in group.players.iter().enumerate() {
            csv_writer.serialize(ScorecardRow {
                group: &group.label,
                code: group.code.as_str(),
                position: index + 1,
                name: &player.name,
                handicap: player.handicap,
                charity: player.charity.as_deref(),
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_scorecards<P: AsRef<Path>>(groups: &[Group], path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(&path)?;
    write_scorecards(groups, file)?;
    tracing::info!(
        "Exported {} groups to {}",
        groups.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GroupCode, Player, PlayerId};
    use uuid::Uuid;

    fn group() -> Group {
        Group {
            id: Uuid::nil(),
            label: "Group 1".to_string(),
            code: "K7Q2ZX".parse::<GroupCode>().unwrap(),
            players: vec![
                Player {
                    id: PlayerId::new("1"),
                    name: "Alice".to_string(),
                    handicap: Some(12),
                    charity: None,
                    created_at: None,
                },
                Player {
                    id: PlayerId::new("3"),
                    name: "Carol".to_string(),
                    handicap: Some(5),
                    charity: Some("Red Cross".to_string()),
                    created_at: None,
                },
            ],
        }
    }

    #[test]
    fn test_write_scorecards() {
        let mut buffer = Vec::new();

        write_scorecards(&[group()], &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "group,code,position,name,handicap,charity");
        assert_eq!(lines[1], "Group 1,K7Q2ZX,1,Alice,12,");
        assert_eq!(lines[2], "Group 1,K7Q2ZX,2,Carol,5,Red Cross");
    }

    #[test]
    fn test_export_creates_parent_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cards").join("groups.csv");

        export_scorecards(&[group()], &path).unwrap();

        assert!(path.exists());
    }
}
