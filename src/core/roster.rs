use crate::core::input::normalize_form;
use crate::core::{Confirmation, Player, PlayerForm, PlayerId, PlayerStore};
use crate::utils::error::Result;

/// 名單管理：持有唯一一份玩家清單，並與遠端儲存端同步。
///
/// 所有成功的異動（新增、刪除）都以完整重新載入收尾，不做本地樂觀更新。
/// 任何失敗都不會動到目前持有的名單。
pub struct RosterManager<S: PlayerStore> {
    store: S,
    players: Vec<Player>,
}

impl<S: PlayerStore> RosterManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            players: Vec::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 從儲存端重新抓取整份名單；失敗時保留原名單
    pub async fn load(&mut self) -> Result<&[Player]> {
        tracing::debug!("Loading roster from store");
        let mut players = match self.store.list_players().await {
            Ok(players) => players,
            Err(e) => {
                tracing::error!("Failed to load roster: {}", e);
                return Err(e);
            }
        };

        // 穩定排序，建立時間相同者維持儲存端順序
        players.sort_by_key(|p| p.created_at);
        self.players = players;

        tracing::debug!("Roster loaded with {} players", self.players.len());
        Ok(&self.players)
    }

    pub async fn add_player(&mut self, form: &PlayerForm) -> Result<()> {
        let record = normalize_form(form)?;

        tracing::info!("Adding player '{}'", record.name);
        if let Err(e) = self.store.insert_player(&record).await {
            tracing::error!("Failed to add player '{}': {}", record.name, e);
            return Err(e);
        }

        self.load().await?;
        Ok(())
    }

    /// 刪除前必須先取得確認；使用者拒絕時回傳 `Ok(false)`，不呼叫儲存端
    pub async fn delete_player<C>(&mut self, id: &PlayerId, confirmation: &C) -> Result<bool>
    where
        C: Confirmation + ?Sized,
    {
        let prompt = match self.find(id) {
            Some(player) => format!("Remove {} from the roster?", player.name),
            None => format!("Remove player {} from the roster?", id),
        };

        if !confirmation.confirm(&prompt) {
            tracing::info!("Deletion of player {} cancelled", id);
            return Ok(false);
        }

        tracing::info!("Deleting player {}", id);
        if let Err(e) = self.store.delete_player(id).await {
            tracing::error!("Failed to delete player {}: {}", id, e);
            return Err(e);
        }

        self.load().await?;
        Ok(true)
    }
}
