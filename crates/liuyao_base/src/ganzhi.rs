//! Heavenly stems, earthly branches, and the sexagenary day pillar.
//!
//! The engine does not derive stems and branches from a calendar date; it
//! consumes a day pillar computed upstream. What it does own is the
//! structure of the cycle: element of each branch, the parity rule that
//! limits which stem/branch pairs exist, and the two "void" (kongwang)
//! branches of each ten-day decade.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LiuyaoError;
use crate::wuxing::FiveElement;

// ---------------------------------------------------------------------------
// Heavenly stems
// ---------------------------------------------------------------------------

/// The 10 heavenly stems (tiangan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Chinese glyph of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem; stems pair up per element (Jia/Yi wood, ...).
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Jia | Self::Yi => FiveElement::Wood,
            Self::Bing | Self::Ding => FiveElement::Fire,
            Self::Wu | Self::Ji => FiveElement::Earth,
            Self::Geng | Self::Xin => FiveElement::Metal,
            Self::Ren | Self::Gui => FiveElement::Water,
        }
    }

    /// Yang stems sit at even indices.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem at 0-based index, if in range.
    pub const fn from_index(index: u8) -> Option<HeavenlyStem> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeavenlyStem {
    type Err = LiuyaoError;

    /// Accepts the glyph (`甲`) or the pinyin name, case-insensitively (`jia`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| stem.name() == s || stem.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| LiuyaoError::UnknownStem(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Earthly branches
// ---------------------------------------------------------------------------

/// The 12 earthly branches (dizhi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese glyph of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Element of the branch. The four "storehouse" branches
    /// (Chou, Chen, Wei, Xu) are all earth.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Zi | Self::Hai => FiveElement::Water,
            Self::Yin | Self::Mao => FiveElement::Wood,
            Self::Si | Self::Wu => FiveElement::Fire,
            Self::Shen | Self::You => FiveElement::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => FiveElement::Earth,
        }
    }

    /// Branch `steps` places further round the cycle (wraps at 12).
    pub const fn offset(self, steps: u8) -> EarthlyBranch {
        ALL_BRANCHES[((self.index() as u16 + steps as u16) % 12) as usize]
    }

    /// Branch at 0-based index, if in range.
    pub const fn from_index(index: u8) -> Option<EarthlyBranch> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EarthlyBranch {
    type Err = LiuyaoError;

    /// Accepts the glyph (`子`) or the pinyin name, case-insensitively (`zi`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|branch| branch.name() == s || branch.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| LiuyaoError::UnknownBranch(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

/// A validated sexagenary day: a stem and branch of the same parity.
///
/// Serialized as its two-glyph form, e.g. `"甲子"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DayPillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl DayPillar {
    /// Pair a stem and branch; fails for pairs outside the sexagenary cycle
    /// (e.g. 甲丑).
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, LiuyaoError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(LiuyaoError::MismatchedDayPillar { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Day pillar at 0-based position in the 60-day cycle (0 = 甲子).
    pub fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: ALL_STEMS[(i % 10) as usize],
            branch: ALL_BRANCHES[(i % 12) as usize],
        }
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.branch
    }

    /// 0-based position in the 60-day cycle (甲子 = 0, 癸亥 = 59).
    ///
    /// # Panics
    ///
    /// Never for a value built through [`DayPillar::new`] or parsing: stem
    /// and branch share parity, so a solution always exists.
    pub fn cycle_index(&self) -> u8 {
        let s = self.stem.index();
        let b = self.branch.index();
        // Smallest n with n ≡ s (mod 10) and n ≡ b (mod 12).
        match (0..6).map(|k| s + 10 * k).find(|n| n % 12 == b) {
            Some(n) => n,
            None => unreachable!(
                "{}{} has no position in the 60-day cycle",
                self.stem,
                self.branch
            ),
        }
    }

    /// First branch of the ten-day decade (xun) this day belongs to.
    pub fn decade_start(&self) -> EarthlyBranch {
        let start = (self.branch.index() + 12 - self.stem.index()) % 12;
        ALL_BRANCHES[start as usize]
    }

    /// The two void (kongwang) branches: the two branches of the twelve
    /// that the ten stems of the current decade never reach.
    pub fn void_branches(&self) -> [EarthlyBranch; 2] {
        let start = self.decade_start();
        [start.offset(10), start.offset(11)]
    }

    /// Whether `branch` is void on this day.
    pub fn is_void(&self, branch: EarthlyBranch) -> bool {
        self.void_branches().contains(&branch)
    }
}

impl Display for DayPillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for DayPillar {
    type Err = LiuyaoError;

    /// Accepts `甲子`, `jia-zi`, `Jia Zi` or `jia_zi`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let (stem, branch) = match parts.as_slice() {
            [stem, branch] => (stem.parse()?, branch.parse()?),
            [glyphs] => {
                let mut chars = glyphs.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(st), Some(br), None) => (
                        st.to_string().parse::<HeavenlyStem>()?,
                        br.to_string().parse::<EarthlyBranch>()?,
                    ),
                    _ => return Err(LiuyaoError::MalformedDayPillar(s.to_string())),
                }
            }
            _ => return Err(LiuyaoError::MalformedDayPillar(s.to_string())),
        };
        Self::new(stem, branch)
    }
}

impl From<DayPillar> for String {
    fn from(day: DayPillar) -> Self {
        day.to_string()
    }
}

impl TryFrom<String> for DayPillar {
    type Error = LiuyaoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
