//! The eight trigrams (bagua).
//!
//! A trigram is three stacked lines. Its bit pattern stores the bottom line
//! in bit 0 and the top line in bit 2, with 1 = yang. Each trigram also owns
//! an element and the six najia branches it contributes to a hexagram:
//! entries 1–3 when it sits in the inner (lower) slot, entries 4–6 when it
//! sits in the outer (upper) slot.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LiuyaoError;
use crate::ganzhi::EarthlyBranch;
use crate::wuxing::FiveElement;

/// The 8 trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// 乾 ☰ Heaven.
    Qian,
    /// 兌 ☱ Lake.
    Dui,
    /// 離 ☲ Fire.
    Li,
    /// 震 ☳ Thunder.
    Zhen,
    /// 巽 ☴ Wind.
    Xun,
    /// 坎 ☵ Water.
    Kan,
    /// 艮 ☶ Mountain.
    Gen,
    /// 坤 ☷ Earth.
    Kun,
}

/// All 8 trigrams in traditional palace order (0 = Qian, 7 = Kun).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

/// Trigrams indexed by their 3-bit pattern.
const TRIGRAMS_BY_BITS: [Trigram; 8] = [
    Trigram::Kun,  // 000
    Trigram::Zhen, // 001
    Trigram::Kan,  // 010
    Trigram::Dui,  // 011
    Trigram::Gen,  // 100
    Trigram::Li,   // 101
    Trigram::Xun,  // 110
    Trigram::Qian, // 111
];

impl Trigram {
    /// Chinese name of the trigram.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Pinyin name of the trigram.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// Image of the trigram in English.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }

    /// Image of the trigram as it appears in hexagram names (天, 澤, ...).
    pub const fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Dui => "澤",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "風",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
        }
    }

    /// Unicode trigram symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }

    /// 0-based index into ALL_TRIGRAMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Qian => 0,
            Self::Dui => 1,
            Self::Li => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Kan => 5,
            Self::Gen => 6,
            Self::Kun => 7,
        }
    }

    /// 3-bit line pattern: bit 0 = bottom line, bit 2 = top line, 1 = yang.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Qian => 0b111,
            Self::Dui => 0b011,
            Self::Li => 0b101,
            Self::Zhen => 0b001,
            Self::Xun => 0b110,
            Self::Kan => 0b010,
            Self::Gen => 0b100,
            Self::Kun => 0b000,
        }
    }

    /// Trigram for a 3-bit pattern. Bits above bit 2 are ignored.
    pub const fn from_bits(bits: u8) -> Trigram {
        TRIGRAMS_BY_BITS[(bits & 0b111) as usize]
    }

    /// Trigram from three line polarities, bottom line first (`true` = yang).
    pub const fn from_lines(lines: [bool; 3]) -> Trigram {
        match lines {
            [true, true, true] => Self::Qian,
            [true, true, false] => Self::Dui,
            [true, false, true] => Self::Li,
            [true, false, false] => Self::Zhen,
            [false, true, true] => Self::Xun,
            [false, true, false] => Self::Kan,
            [false, false, true] => Self::Gen,
            [false, false, false] => Self::Kun,
        }
    }

    /// Line polarities, bottom line first.
    pub const fn lines(self) -> [bool; 3] {
        let b = self.bits();
        [b & 0b001 != 0, b & 0b010 != 0, b & 0b100 != 0]
    }

    /// Trigram with the given line (0 = bottom) flipped.
    pub const fn toggle(self, line: u8) -> Trigram {
        Self::from_bits(self.bits() ^ (1 << (line % 3)))
    }

    /// Element of the trigram (and of the palace it anchors).
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Qian | Self::Dui => FiveElement::Metal,
            Self::Li => FiveElement::Fire,
            Self::Zhen | Self::Xun => FiveElement::Wood,
            Self::Kan => FiveElement::Water,
            Self::Gen | Self::Kun => FiveElement::Earth,
        }
    }

    /// Najia branches for lines 1–6. Lines 1–3 apply when the trigram is
    /// inner, lines 4–6 when it is outer.
    pub const fn najia_branches(self) -> [EarthlyBranch; 6] {
        use EarthlyBranch::*;
        match self {
            Self::Qian => [Zi, Yin, Chen, Wu, Shen, Xu],
            Self::Dui => [Si, Mao, Chou, Hai, You, Wei],
            Self::Li => [Mao, Chou, Hai, You, Wei, Si],
            Self::Zhen => [Zi, Yin, Chen, Wu, Shen, Xu],
            Self::Xun => [Chou, Hai, You, Wei, Si, Mao],
            Self::Kan => [Yin, Chen, Wu, Shen, Xu, Zi],
            Self::Gen => [Chen, Wu, Shen, Xu, Zi, Yin],
            Self::Kun => [Wei, Si, Mao, Chou, Hai, You],
        }
    }

    /// All 8 trigrams in palace order.
    pub const fn all() -> &'static [Trigram; 8] {
        &ALL_TRIGRAMS
    }
}

impl Display for Trigram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trigram {
    type Err = LiuyaoError;

    /// Accepts the Chinese name (traditional or simplified), the symbol,
    /// the pinyin name, or the English image, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let simplified = match s {
            "兑" => "兌",
            "离" => "離",
            other => other,
        };
        ALL_TRIGRAMS
            .iter()
            .copied()
            .find(|t| {
                t.name() == simplified
                    || s.chars().eq(std::iter::once(t.symbol()))
                    || t.pinyin().eq_ignore_ascii_case(s)
                    || t.english_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| LiuyaoError::UnknownTrigram(s.to_string()))
    }
}
