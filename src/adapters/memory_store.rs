use crate::core::{NewPlayer, Player, PlayerId, PlayerStore};
use crate::utils::error::{RosterError, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// 行程內的玩家儲存端：自行指派遞增識別碼與建立時間。
/// 可切換成失敗模式，模擬遠端錯誤。
#[derive(Debug, Default)]
pub struct MemoryPlayerStore {
    rows: Mutex<Vec<Player>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    insert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RosterError::StoreError {
                status: 503,
                message: "memory store is in failure mode".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn list_players(&self) -> Result<Vec<Player>> {
        self.check_available()?;
        let rows = self.rows.lock().await;
        Ok(rows.clone())
    }

    async fn insert_player(&self, player: &NewPlayer) -> Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let seq = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        // 同一毫秒內連續新增時仍保證建立時間嚴格遞增
        let created_at = Utc::now() + Duration::microseconds(seq as i64);

        let mut rows = self.rows.lock().await;
        rows.push(Player {
            id: PlayerId::new(seq.to_string()),
            name: player.name.clone(),
            handicap: player.handicap,
            charity: player.charity.clone(),
            created_at: Some(created_at),
        });
        Ok(())
    }

    async fn delete_player(&self, id: &PlayerId) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut rows = self.rows.lock().await;
        rows.retain(|p| &p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_player(name: &str) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            handicap: None,
            charity: None,
        }
    }

    #[test]
    fn test_ids_are_assigned_in_insertion_order() {
        let store = MemoryPlayerStore::new();

        let players = tokio_test::block_on(async {
            store.insert_player(&new_player("Alice")).await.unwrap();
            store.insert_player(&new_player("Bob")).await.unwrap();
            store.list_players().await.unwrap()
        });

        assert_eq!(players[0].id.as_str(), "1");
        assert_eq!(players[1].id.as_str(), "2");
        assert!(players[0].created_at < players[1].created_at);
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let store = MemoryPlayerStore::new();

        let players = tokio_test::block_on(async {
            store.insert_player(&new_player("Alice")).await.unwrap();
            store.delete_player(&PlayerId::new("42")).await.unwrap();
            store.list_players().await.unwrap()
        });

        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_failure_mode_rejects_requests() {
        let store = MemoryPlayerStore::new();
        store.set_failing(true);

        let result = tokio_test::block_on(store.list_players());

        assert!(matches!(result, Err(RosterError::StoreError { status: 503, .. })));
    }
}
