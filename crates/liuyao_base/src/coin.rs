//! Coin tosses and line decoding.
//!
//! Each line of a hexagram is cast by tossing three coins and counting how
//! many land on the designated "special" face. Counts 0 and 3 are the "old"
//! lines that move; 1 and 2 are the "young" still lines.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::LiuyaoError;

/// Number of coins (out of three) that landed on the special face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CoinOutcome {
    Zero,
    One,
    Two,
    Three,
}

/// All 4 outcomes, indexed by count.
pub const ALL_COIN_OUTCOMES: [CoinOutcome; 4] = [
    CoinOutcome::Zero,
    CoinOutcome::One,
    CoinOutcome::Two,
    CoinOutcome::Three,
];

impl CoinOutcome {
    /// The special-face count (0..=3).
    pub const fn count(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Outcome from a special-face count.
    pub fn from_count(count: u8) -> Result<Self, LiuyaoError> {
        ALL_COIN_OUTCOMES
            .get(count as usize)
            .copied()
            .ok_or(LiuyaoError::InvalidCoinCount(count))
    }

    /// Outcome from three coin faces (`true` = special face).
    pub const fn from_faces(faces: [bool; 3]) -> Self {
        let count = faces[0] as usize + faces[1] as usize + faces[2] as usize;
        ALL_COIN_OUTCOMES[count]
    }

    /// Whether this outcome produces a moving line. Holds under every
    /// [`CoinConvention`].
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Zero | Self::Three)
    }
}

impl From<CoinOutcome> for u8 {
    fn from(coin: CoinOutcome) -> Self {
        coin.count()
    }
}

impl TryFrom<u8> for CoinOutcome {
    type Error = LiuyaoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_count(value)
    }
}

/// Which old line a count of zero denotes.
///
/// Source traditions disagree; the two conventions differ only in which
/// moving line (old yang or old yin) the counts 0 and 3 produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoinConvention {
    /// 0 → old yang, 1 → young yang, 2 → young yin, 3 → old yin.
    #[default]
    OldYangAtZero,
    /// 0 → old yin, 1 → young yang, 2 → young yin, 3 → old yang.
    OldYinAtZero,
}

/// A decoded line: polarity plus whether it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// 老陽: yang, moving.
    OldYang,
    /// 少陽: yang, still.
    YoungYang,
    /// 少陰: yin, still.
    YoungYin,
    /// 老陰: yin, moving.
    OldYin,
}

impl LineKind {
    /// Chinese name of the line kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OldYang => "老陽",
            Self::YoungYang => "少陽",
            Self::YoungYin => "少陰",
            Self::OldYin => "老陰",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::OldYang | Self::YoungYang)
    }

    pub const fn is_moving(self) -> bool {
        matches!(self, Self::OldYang | Self::OldYin)
    }

    /// The line after transformation: an old line turns into the young line
    /// of opposite polarity, a young line stays as it is.
    pub const fn changed(self) -> LineKind {
        match self {
            Self::OldYang => Self::YoungYin,
            Self::OldYin => Self::YoungYang,
            Self::YoungYang | Self::YoungYin => self,
        }
    }

    /// Polarity after transformation.
    pub const fn changed_is_yang(self) -> bool {
        self.changed().is_yang()
    }

    /// Traditional mark for a moving line: `O` for old yang, `X` for old yin.
    pub const fn moving_mark(self) -> Option<char> {
        match self {
            Self::OldYang => Some('O'),
            Self::OldYin => Some('X'),
            Self::YoungYang | Self::YoungYin => None,
        }
    }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode a coin outcome into a line under the given convention.
pub const fn decode_coin(coin: CoinOutcome, convention: CoinConvention) -> LineKind {
    match (coin, convention) {
        (CoinOutcome::Zero, CoinConvention::OldYangAtZero) => LineKind::OldYang,
        (CoinOutcome::Zero, CoinConvention::OldYinAtZero) => LineKind::OldYin,
        (CoinOutcome::One, _) => LineKind::YoungYang,
        (CoinOutcome::Two, _) => LineKind::YoungYin,
        (CoinOutcome::Three, CoinConvention::OldYangAtZero) => LineKind::OldYin,
        (CoinOutcome::Three, CoinConvention::OldYinAtZero) => LineKind::OldYang,
    }
}

/// Validate six raw counts, bottom line first.
pub fn coins_from_counts(counts: &[u8]) -> Result<[CoinOutcome; 6], LiuyaoError> {
    if counts.len() != 6 {
        return Err(LiuyaoError::WrongLineCount(counts.len()));
    }
    let mut coins = [CoinOutcome::One; 6];
    for (slot, &count) in coins.iter_mut().zip(counts) {
        *slot = CoinOutcome::from_count(count)?;
    }
    Ok(coins)
}
