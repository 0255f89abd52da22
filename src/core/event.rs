use crate::core::grouping::{GroupingEngine, GroupingState};
use crate::core::roster::RosterManager;
use crate::core::{Confirmation, Group, Player, PlayerForm, PlayerId, PlayerStore};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::Rng;

/// 單一活動的控制器：同時持有名單與分組狀態，呼叫端以參考傳遞使用。
pub struct EventSession<S: PlayerStore, R: Rng = StdRng> {
    roster: RosterManager<S>,
    grouping: GroupingEngine<R>,
}

impl<S: PlayerStore> EventSession<S, StdRng> {
    pub fn new(store: S) -> Self {
        Self::with_engine(store, GroupingEngine::from_entropy())
    }

    pub fn seeded(store: S, seed: u64) -> Self {
        Self::with_engine(store, GroupingEngine::seeded(seed))
    }
}

impl<S: PlayerStore, R: Rng> EventSession<S, R> {
    pub fn with_engine(store: S, grouping: GroupingEngine<R>) -> Self {
        Self {
            roster: RosterManager::new(store),
            grouping,
        }
    }

    pub fn roster(&self) -> &RosterManager<S> {
        &self.roster
    }

    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    pub fn groups(&self) -> &[Group] {
        self.grouping.groups()
    }

    pub fn grouping_state(&self) -> GroupingState {
        self.grouping.state()
    }

    pub async fn load_roster(&mut self) -> Result<&[Player]> {
        self.roster.load().await
    }

    pub async fn add_player(&mut self, form: &PlayerForm) -> Result<()> {
        self.roster.add_player(form).await
    }

    pub async fn delete_player<C>(&mut self, id: &PlayerId, confirmation: &C) -> Result<bool>
    where
        C: Confirmation + ?Sized,
    {
        self.roster.delete_player(id, confirmation).await
    }

    /// 以目前名單快照分組；名單之後的變動不影響已產生的分組
    pub fn generate_groups(&mut self) -> Result<&[Group]> {
        self.grouping.generate(self.roster.players())
    }

    pub fn clear_groups(&mut self) {
        self.grouping.clear();
    }
}
