//! Eight-palace (bagong) classification and world/response placement.
//!
//! Every hexagram belongs to exactly one of eight palaces. Rather than a
//! static 64-entry table, each palace's family is generated from its pure
//! hexagram by the traditional line-change sequence:
//!
//! | step | change                               | type            | world |
//! |------|--------------------------------------|-----------------|-------|
//! | 0    | pure hexagram                        | native          | 6     |
//! | 1    | flip inner line 1                    | 1st generation  | 1     |
//! | 2    | flip inner line 2                    | 2nd generation  | 2     |
//! | 3    | flip inner line 3                    | 3rd generation  | 3     |
//! | 4    | flip outer line 1 (line 4)           | 4th generation  | 4     |
//! | 5    | flip outer line 2 (line 5)           | 5th generation  | 5     |
//! | 6    | flip line 4 back                     | wandering soul  | 4     |
//! | 7    | restore the inner trigram            | returning soul  | 3     |
//!
//! The eight families partition the 64 hexagrams.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hexagram::Hexagram;
use crate::trigram::Trigram;
use crate::wuxing::FiveElement;

/// The 8 palaces, named after their anchoring trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palace {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All 8 palaces in traditional order (0 = Qian, 7 = Kun).
pub const ALL_PALACES: [Palace; 8] = [
    Palace::Qian,
    Palace::Dui,
    Palace::Li,
    Palace::Zhen,
    Palace::Xun,
    Palace::Kan,
    Palace::Gen,
    Palace::Kun,
];

impl Palace {
    /// The trigram anchoring this palace.
    pub const fn trigram(self) -> Trigram {
        match self {
            Self::Qian => Trigram::Qian,
            Self::Dui => Trigram::Dui,
            Self::Li => Trigram::Li,
            Self::Zhen => Trigram::Zhen,
            Self::Xun => Trigram::Xun,
            Self::Kan => Trigram::Kan,
            Self::Gen => Trigram::Gen,
            Self::Kun => Trigram::Kun,
        }
    }

    /// Palace anchored by a trigram.
    pub const fn from_trigram(trigram: Trigram) -> Palace {
        match trigram {
            Trigram::Qian => Self::Qian,
            Trigram::Dui => Self::Dui,
            Trigram::Li => Self::Li,
            Trigram::Zhen => Self::Zhen,
            Trigram::Xun => Self::Xun,
            Trigram::Kan => Self::Kan,
            Trigram::Gen => Self::Gen,
            Trigram::Kun => Self::Kun,
        }
    }

    /// Chinese name, e.g. `乾宮`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾宮",
            Self::Dui => "兌宮",
            Self::Li => "離宮",
            Self::Zhen => "震宮",
            Self::Xun => "巽宮",
            Self::Kan => "坎宮",
            Self::Gen => "艮宮",
            Self::Kun => "坤宮",
        }
    }

    /// English name, e.g. `Heaven`.
    pub const fn english_name(self) -> &'static str {
        self.trigram().english_name()
    }

    /// 0-based index into ALL_PALACES.
    pub const fn index(self) -> u8 {
        self.trigram().index()
    }

    /// Palace element; all six relatives of a reading are read against it.
    pub const fn element(self) -> FiveElement {
        self.trigram().element()
    }

    /// The palace's pure (native) hexagram.
    pub const fn pure_hexagram(self) -> Hexagram {
        Hexagram::pure(self.trigram())
    }

    /// All 8 palaces in order.
    pub const fn all() -> &'static [Palace; 8] {
        &ALL_PALACES
    }
}

impl Display for Palace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a hexagram within its palace family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalaceType {
    Native,
    FirstGeneration,
    SecondGeneration,
    ThirdGeneration,
    FourthGeneration,
    FifthGeneration,
    WanderingSoul,
    ReturningSoul,
}

/// All 8 palace types in family order.
pub const ALL_PALACE_TYPES: [PalaceType; 8] = [
    PalaceType::Native,
    PalaceType::FirstGeneration,
    PalaceType::SecondGeneration,
    PalaceType::ThirdGeneration,
    PalaceType::FourthGeneration,
    PalaceType::FifthGeneration,
    PalaceType::WanderingSoul,
    PalaceType::ReturningSoul,
];

impl PalaceType {
    /// Chinese label, e.g. `三世卦`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "本宮卦",
            Self::FirstGeneration => "一世卦",
            Self::SecondGeneration => "二世卦",
            Self::ThirdGeneration => "三世卦",
            Self::FourthGeneration => "四世卦",
            Self::FifthGeneration => "五世卦",
            Self::WanderingSoul => "遊魂卦",
            Self::ReturningSoul => "歸魂卦",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::FirstGeneration => "First Generation",
            Self::SecondGeneration => "Second Generation",
            Self::ThirdGeneration => "Third Generation",
            Self::FourthGeneration => "Fourth Generation",
            Self::FifthGeneration => "Fifth Generation",
            Self::WanderingSoul => "Wandering Soul",
            Self::ReturningSoul => "Returning Soul",
        }
    }

    /// Step in the family sequence (Native=0 .. ReturningSoul=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::Native => 0,
            Self::FirstGeneration => 1,
            Self::SecondGeneration => 2,
            Self::ThirdGeneration => 3,
            Self::FourthGeneration => 4,
            Self::FifthGeneration => 5,
            Self::WanderingSoul => 6,
            Self::ReturningSoul => 7,
        }
    }

    /// World (shi) line position, 1..=6.
    pub const fn world_line(self) -> u8 {
        match self {
            Self::Native => 6,
            Self::FirstGeneration => 1,
            Self::SecondGeneration => 2,
            Self::ThirdGeneration => 3,
            Self::FourthGeneration => 4,
            Self::FifthGeneration => 5,
            Self::WanderingSoul => 4,
            Self::ReturningSoul => 3,
        }
    }
}

impl Display for PalaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Response (ying) line for a world line: always three positions away.
pub const fn response_line(world_line: u8) -> u8 {
    if world_line <= 3 {
        world_line + 3
    } else {
        world_line - 3
    }
}

/// Generate the eight hexagrams of a palace family in sequence order.
pub fn palace_family(palace: Palace) -> [(Hexagram, PalaceType); 8] {
    let head = palace.trigram();
    let mut inner = head;
    let mut outer = head;
    let mut family = [(Hexagram::pure(head), PalaceType::Native); 8];

    // Steps 1-3: flip inner lines bottom-up, cumulatively.
    for (line, ty) in [
        PalaceType::FirstGeneration,
        PalaceType::SecondGeneration,
        PalaceType::ThirdGeneration,
    ]
    .into_iter()
    .enumerate()
    {
        inner = inner.toggle(line as u8);
        family[ty.index() as usize] = (Hexagram::new(inner, outer), ty);
    }

    // Steps 4-5: flip the two lower lines of the outer trigram.
    for (line, ty) in [PalaceType::FourthGeneration, PalaceType::FifthGeneration]
        .into_iter()
        .enumerate()
    {
        outer = outer.toggle(line as u8);
        family[ty.index() as usize] = (Hexagram::new(inner, outer), ty);
    }

    outer = outer.toggle(0);
    family[PalaceType::WanderingSoul.index() as usize] =
        (Hexagram::new(inner, outer), PalaceType::WanderingSoul);

    inner = head;
    family[PalaceType::ReturningSoul.index() as usize] =
        (Hexagram::new(inner, outer), PalaceType::ReturningSoul);

    family
}

/// Palace membership and world/response lines of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalacePlacement {
    pub palace: Palace,
    pub palace_type: PalaceType,
    /// World (shi) line, 1..=6.
    pub world_line: u8,
    /// Response (ying) line, 1..=6.
    pub response_line: u8,
}

impl PalacePlacement {
    fn new(palace: Palace, palace_type: PalaceType) -> Self {
        let world_line = palace_type.world_line();
        Self {
            palace,
            palace_type,
            world_line,
            response_line: response_line(world_line),
        }
    }
}

/// Find the palace a hexagram belongs to and where its world line sits.
///
/// # Panics
///
/// Panics if no palace family contains the hexagram, and in debug builds
/// if more than one does. The eight generated families partition the 64
/// hexagrams, so either case is a logic error in the generator, never a
/// property of the input.
pub fn resolve_palace(hexagram: Hexagram) -> PalacePlacement {
    if hexagram.is_pure() {
        return PalacePlacement::new(Palace::from_trigram(hexagram.upper), PalaceType::Native);
    }

    for (i, palace) in ALL_PALACES.iter().copied().enumerate() {
        if let Some(ty) = family_member(palace, hexagram) {
            debug_assert!(
                ALL_PALACES[i + 1..]
                    .iter()
                    .all(|&other| family_member(other, hexagram).is_none()),
                "hexagram {} claimed by more than one palace",
                hexagram.name()
            );
            debug!(
                hexagram = hexagram.name(),
                palace = palace.name(),
                palace_type = ty.name(),
                "palace resolved"
            );
            return PalacePlacement::new(palace, ty);
        }
    }

    unreachable!("hexagram {} missing from every palace family", hexagram.name())
}

/// Position of `hexagram` in `palace`'s family, if it belongs there.
fn family_member(palace: Palace, hexagram: Hexagram) -> Option<PalaceType> {
    palace_family(palace)
        .iter()
        .find(|(h, _)| *h == hexagram)
        .map(|&(_, ty)| ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palace_indices_match_trigrams() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
            assert_eq!(Palace::from_trigram(p.trigram()), *p);
        }
    }

    #[test]
    fn response_line_wraps() {
        assert_eq!(response_line(1), 4);
        assert_eq!(response_line(3), 6);
        assert_eq!(response_line(4), 1);
        assert_eq!(response_line(6), 3);
    }

    #[test]
    fn qian_family_sequence() {
        use Trigram::*;
        let family = palace_family(Palace::Qian);
        let expected = [
            (Qian, Qian, "乾為天"),
            (Xun, Qian, "天風姤"),
            (Gen, Qian, "天山遁"),
            (Kun, Qian, "天地否"),
            (Kun, Xun, "風地觀"),
            (Kun, Gen, "山地剝"),
            (Kun, Li, "火地晉"),
            (Qian, Li, "火天大有"),
        ];
        for ((hex, ty), (lower, upper, name)) in family.iter().zip(expected) {
            assert_eq!(hex.lower, lower, "{name}");
            assert_eq!(hex.upper, upper, "{name}");
            assert_eq!(hex.name(), name);
            assert_eq!(family[ty.index() as usize].1, *ty);
        }
    }

    #[test]
    fn kan_family_sequence() {
        let names: Vec<&str> = palace_family(Palace::Kan).iter().map(|(h, _)| h.name()).collect();
        assert_eq!(
            names,
            [
                "坎為水", "水澤節", "水雷屯", "水火既濟",
                "澤火革", "雷火豐", "地火明夷", "地水師",
            ]
        );
    }

    #[test]
    fn families_partition_all_64() {
        let mut claimed = std::collections::HashSet::new();
        for palace in ALL_PALACES {
            for (hex, _) in palace_family(palace) {
                assert!(claimed.insert(hex), "{} claimed twice", hex.name());
            }
        }
        assert_eq!(claimed.len(), 64);
        for hex in Hexagram::all() {
            assert!(claimed.contains(&hex), "{} unclaimed", hex.name());
        }
    }

    #[test]
    fn every_hexagram_has_exactly_one_palace() {
        for hex in Hexagram::all() {
            let owners: Vec<Palace> = ALL_PALACES
                .iter()
                .copied()
                .filter(|&p| family_member(p, hex).is_some())
                .collect();
            assert_eq!(owners.len(), 1, "{} owned by {owners:?}", hex.name());
            let placement = resolve_palace(hex);
            assert_eq!(placement.palace, owners[0]);
            assert_eq!(Some(placement.palace_type), family_member(owners[0], hex));
        }
    }

    #[test]
    fn tai_is_kun_third_generation() {
        let tai = Hexagram::new(Trigram::Qian, Trigram::Kun);
        let p = resolve_palace(tai);
        assert_eq!(p.palace, Palace::Kun);
        assert_eq!(p.palace_type, PalaceType::ThirdGeneration);
        assert_eq!(p.world_line, 3);
        assert_eq!(p.response_line, 6);
    }

    #[test]
    fn pure_hexagrams_are_native() {
        for palace in ALL_PALACES {
            let p = resolve_palace(palace.pure_hexagram());
            assert_eq!(p.palace, palace);
            assert_eq!(p.palace_type, PalaceType::Native);
            assert_eq!(p.world_line, 6);
            assert_eq!(p.response_line, 3);
        }
    }

    #[test]
    fn world_and_response_three_apart() {
        for hex in Hexagram::all() {
            let p = resolve_palace(hex);
            assert!((1..=6).contains(&p.world_line));
            assert_eq!(p.world_line.abs_diff(p.response_line), 3);
        }
    }
}
