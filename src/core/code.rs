use crate::core::GroupCode;
use crate::utils::error::RosterError;
use rand::Rng;
use std::collections::HashSet;

pub const CODE_LENGTH: usize = 6;
pub const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 抽一組六碼大寫英數字代碼
pub fn random_code<R: Rng + ?Sized>(rng: &mut R) -> GroupCode {
    let code: String = (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    GroupCode(code)
}

/// 抽出 `count` 組彼此不重複的代碼
pub fn unique_codes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<GroupCode> {
    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);

    while codes.len() < count {
        let code = random_code(rng);
        if seen.insert(code.clone()) {
            codes.push(code);
        } else {
            tracing::debug!("Group code collision on {}, drawing again", code);
        }
    }

    codes
}

/// 檢查字串是否符合代碼格式
pub fn is_valid_code(text: &str) -> bool {
    text.len() == CODE_LENGTH && text.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

impl std::str::FromStr for GroupCode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_code(s) {
            Ok(GroupCode(s.to_string()))
        } else {
            Err(RosterError::validation(
                "group code",
                format!("'{}' is not a 6-character uppercase alphanumeric code", s),
            ))
        }
    }
}
