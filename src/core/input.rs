use crate::core::{NewPlayer, PlayerForm};
use crate::utils::error::{RosterError, Result};

/// 將表單輸入正規化成可送出的紀錄。
///
/// - 名稱去除前後空白後不可為空
/// - 差點：空白 → 無；否則必須是十進位非負整數，含其他字元一律拒絕
/// - 慈善單位：空白 → 無
pub fn normalize_form(form: &PlayerForm) -> Result<NewPlayer> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RosterError::validation("name", "Player name is required"));
    }

    Ok(NewPlayer {
        name: name.to_string(),
        handicap: parse_handicap(&form.handicap)?,
        charity: normalize_charity(&form.charity),
    })
}

pub fn parse_handicap(text: &str) -> Result<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RosterError::validation(
            "handicap",
            format!("Handicap must be a whole number, got '{}'", text),
        ));
    }

    text.parse::<u32>().map(Some).map_err(|_| {
        RosterError::validation("handicap", format!("Handicap '{}' is out of range", text))
    })
}

pub fn normalize_charity(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
