//! Six spirits (liushen), assigned bottom-up from the day stem.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ganzhi::HeavenlyStem;

/// The six spirits in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SixSpirit {
    AzureDragon,
    VermilionBird,
    HookChen,
    SoaringSerpent,
    WhiteTiger,
    BlackTortoise,
}

/// All 6 spirits in cyclic order (0 = Azure Dragon).
pub const ALL_SPIRITS: [SixSpirit; 6] = [
    SixSpirit::AzureDragon,
    SixSpirit::VermilionBird,
    SixSpirit::HookChen,
    SixSpirit::SoaringSerpent,
    SixSpirit::WhiteTiger,
    SixSpirit::BlackTortoise,
];

impl SixSpirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龍",
            Self::VermilionBird => "朱雀",
            Self::HookChen => "勾陳",
            Self::SoaringSerpent => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::AzureDragon => "Azure Dragon",
            Self::VermilionBird => "Vermilion Bird",
            Self::HookChen => "Hook Chen",
            Self::SoaringSerpent => "Soaring Serpent",
            Self::WhiteTiger => "White Tiger",
            Self::BlackTortoise => "Black Tortoise",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::AzureDragon => 0,
            Self::VermilionBird => 1,
            Self::HookChen => 2,
            Self::SoaringSerpent => 3,
            Self::WhiteTiger => 4,
            Self::BlackTortoise => 5,
        }
    }
}

impl Display for SixSpirit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Spirit on line 1 for a day stem. Stems pair up, five rotations in all;
/// the Soaring Serpent never starts a rotation.
pub const fn first_spirit(stem: HeavenlyStem) -> SixSpirit {
    match stem {
        HeavenlyStem::Jia | HeavenlyStem::Yi => SixSpirit::AzureDragon,
        HeavenlyStem::Bing | HeavenlyStem::Ding => SixSpirit::VermilionBird,
        HeavenlyStem::Wu | HeavenlyStem::Ji => SixSpirit::HookChen,
        HeavenlyStem::Geng | HeavenlyStem::Xin => SixSpirit::WhiteTiger,
        HeavenlyStem::Ren | HeavenlyStem::Gui => SixSpirit::BlackTortoise,
    }
}

/// Spirits of lines 1–6 for a day stem.
pub const fn six_spirits(stem: HeavenlyStem) -> [SixSpirit; 6] {
    let start = first_spirit(stem).index() as usize;
    [
        ALL_SPIRITS[start % 6],
        ALL_SPIRITS[(start + 1) % 6],
        ALL_SPIRITS[(start + 2) % 6],
        ALL_SPIRITS[(start + 3) % 6],
        ALL_SPIRITS[(start + 4) % 6],
        ALL_SPIRITS[(start + 5) % 6],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    #[test]
    fn jia_starts_with_dragon() {
        assert_eq!(
            six_spirits(HeavenlyStem::Jia),
            [
                SixSpirit::AzureDragon,
                SixSpirit::VermilionBird,
                SixSpirit::HookChen,
                SixSpirit::SoaringSerpent,
                SixSpirit::WhiteTiger,
                SixSpirit::BlackTortoise,
            ]
        );
    }

    #[test]
    fn geng_rotation() {
        let s = six_spirits(HeavenlyStem::Geng);
        assert_eq!(s[0], SixSpirit::WhiteTiger);
        assert_eq!(s[1], SixSpirit::BlackTortoise);
        assert_eq!(s[2], SixSpirit::AzureDragon);
        assert_eq!(s[5], SixSpirit::SoaringSerpent);
    }

    #[test]
    fn paired_stems_share_rotation() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(six_spirits(pair[0]), six_spirits(pair[1]));
        }
    }

    #[test]
    fn rotation_covers_each_spirit_once() {
        for stem in ALL_STEMS {
            let mut seen = [false; 6];
            for s in six_spirits(stem) {
                assert!(!seen[s.index() as usize]);
                seen[s.index() as usize] = true;
            }
        }
    }
}
