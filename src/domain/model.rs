use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// 由儲存端指派的玩家識別碼，內容不透明（字串或整數皆可）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PlayerId(text),
            RawId::Signed(n) => PlayerId(n.to_string()),
            RawId::Unsigned(n) => PlayerId(n.to_string()),
        })
    }
}

/// 名單中的一位參賽者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub handicap: Option<u32>,
    #[serde(default)]
    pub charity: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 送往儲存端的新玩家資料（已正規化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub handicap: Option<u32>,
    pub charity: Option<String>,
}

/// 表單原始輸入，尚未驗證
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub handicap: String,
    pub charity: String,
}

impl PlayerForm {
    pub fn new(
        name: impl Into<String>,
        handicap: impl Into<String>,
        charity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handicap: handicap.into(),
            charity: charity.into(),
        }
    }
}

/// 六碼大寫英數字的組別代碼
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupCode(pub(crate) String);

impl GroupCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// 一組四人（最後一組可少於四人）。只存在於記憶體中，不會寫回儲存端。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub label: String,
    pub code: GroupCode,
    pub players: Vec<Player>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// 有填差點的成員總和
    pub fn total_handicap(&self) -> u32 {
        self.players.iter().filter_map(|p| p.handicap).sum()
    }

    pub fn average_handicap(&self) -> Option<f64> {
        let known: Vec<u32> = self.players.iter().filter_map(|p| p.handicap).collect();
        if known.is_empty() {
            return None;
        }
        Some(known.iter().map(|&h| f64::from(h)).sum::<f64>() / known.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, name: &str, handicap: Option<u32>) -> Player {
        Player {
            id: PlayerId::new(id),
            name: name.to_string(),
            handicap,
            charity: None,
            created_at: None,
        }
    }

    #[test]
    fn test_player_id_accepts_string_and_integer() {
        let rows = serde_json::json!([
            {"id": 7, "name": "Alice", "handicap": 12, "charity": null,
             "created_at": "2024-05-01T10:00:00+00:00"},
            {"id": "9f3c", "name": "Bob", "handicap": null, "charity": "Red Cross",
             "created_at": "2024-05-01T10:01:00+00:00"}
        ]);

        let players: Vec<Player> = serde_json::from_value(rows).unwrap();

        assert_eq!(players[0].id.as_str(), "7");
        assert_eq!(players[0].handicap, Some(12));
        assert_eq!(players[1].id.as_str(), "9f3c");
        assert_eq!(players[1].charity.as_deref(), Some("Red Cross"));
        assert!(players[0].created_at < players[1].created_at);
    }

    #[test]
    fn test_new_player_serializes_absent_fields_as_null() {
        let body = serde_json::to_value(NewPlayer {
            name: "Dave".to_string(),
            handicap: None,
            charity: None,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"name": "Dave", "handicap": null, "charity": null})
        );
    }

    #[test]
    fn test_group_handicap_summary_ignores_missing_values() {
        let group = Group {
            id: Uuid::nil(),
            label: "Group 1".to_string(),
            code: GroupCode("AB12CD".to_string()),
            players: vec![
                player("1", "Alice", Some(12)),
                player("2", "Bob", None),
                player("3", "Carol", Some(5)),
            ],
        };

        assert_eq!(group.len(), 3);
        assert_eq!(group.total_handicap(), 17);
        assert_eq!(group.average_handicap(), Some(8.5));
    }
}
