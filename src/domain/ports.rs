use crate::domain::model::{NewPlayer, Player, PlayerId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 遠端玩家紀錄儲存端：讀取全部、新增、依識別碼刪除
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// 依建立時間遞增排序回傳所有玩家
    async fn list_players(&self) -> Result<Vec<Player>>;
    async fn insert_player(&self, player: &NewPlayer) -> Result<()>;
    async fn delete_player(&self, id: &PlayerId) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_endpoint(&self) -> &str;
    fn table(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn request_timeout(&self) -> Option<Duration>;
}

/// 破壞性操作前的使用者確認
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
