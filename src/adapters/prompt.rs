use crate::core::Confirmation;
use inquire::error::InquireResult;
use inquire::Confirm;

/// 終端機 y/N 確認；`assume_yes` 時直接通過（對應 `--yes`）
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation {
    pub assume_yes: bool,
}

impl StdinConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        answer_or_decline(Confirm::new(prompt).with_default(false).prompt())
    }
}

/// 取消、中斷或非互動終端一律視為拒絕
fn answer_or_decline(result: InquireResult<bool>) -> bool {
    match result {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("Confirmation not given: {}", e);
            false
        }
    }
}
