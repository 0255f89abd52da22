use crate::core::code::unique_codes;
use crate::core::{Group, Player};
use crate::utils::error::{RosterError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

pub const GROUP_SIZE: usize = 4;
pub const MIN_PLAYERS: usize = 2;

/// 分組引擎目前的狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingState {
    Empty,
    Populated(usize),
}

/// 將名單快照隨機切成四人一組，並為每組配發代碼。
///
/// 洗牌與代碼使用兩個獨立注入的亂數來源，固定種子即可重現整次分組。
pub struct GroupingEngine<R: Rng = StdRng> {
    shuffle_rng: R,
    code_rng: R,
    groups: Vec<Group>,
}

impl GroupingEngine<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rngs(StdRng::from_entropy(), StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        // 兩個來源使用不同種子，避免代碼與洗牌序列相關
        Self::with_rngs(
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15),
        )
    }
}

impl<R: Rng> GroupingEngine<R> {
    pub fn with_rngs(shuffle_rng: R, code_rng: R) -> Self {
        Self {
            shuffle_rng,
            code_rng,
            groups: Vec::new(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn state(&self) -> GroupingState {
        if self.groups.is_empty() {
            GroupingState::Empty
        } else {
            GroupingState::Populated(self.groups.len())
        }
    }

    /// 由名單快照產生新分組並整批取代舊分組。
    /// 少於兩人時失敗，既有分組維持不變。
    pub fn generate(&mut self, roster: &[Player]) -> Result<&[Group]> {
        if roster.len() < MIN_PLAYERS {
            tracing::warn!(
                "Refusing to generate groups for {} player(s)",
                roster.len()
            );
            return Err(RosterError::InsufficientPlayers {
                required: MIN_PLAYERS,
                actual: roster.len(),
            });
        }

        let mut shuffled = roster.to_vec();
        shuffle(&mut shuffled, &mut self.shuffle_rng);

        let group_count = shuffled.len().div_ceil(GROUP_SIZE);
        let codes = unique_codes(&mut self.code_rng, group_count);

        let groups: Vec<Group> = shuffled
            .chunks(GROUP_SIZE)
            .zip(codes)
            .enumerate()
            .map(|(index, (members, code))| Group {
                id: Builder::from_random_bytes(self.shuffle_rng.gen()).into_uuid(),
                label: format!("Group {}", index + 1),
                code,
                players: members.to_vec(),
            })
            .collect();

        tracing::info!(
            "Generated {} groups for {} players",
            groups.len(),
            roster.len()
        );
        self.groups = groups;
        Ok(&self.groups)
    }

    pub fn clear(&mut self) {
        if !self.groups.is_empty() {
            tracing::debug!("Clearing {} groups", self.groups.len());
        }
        self.groups.clear();
    }
}

/// Fisher–Yates：由最後一個位置往前，與 [0, i] 中均勻抽出的位置交換
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
