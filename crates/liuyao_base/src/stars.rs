//! Auxiliary stars (shensha) keyed by the day pillar.
//!
//! Travel star and peach blossom follow the day branch's three-harmony
//! group; stem wealth (祿) and noble person (天乙貴人) follow the day stem.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ganzhi::{DayPillar, EarthlyBranch, HeavenlyStem};

/// Kinds of auxiliary star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    /// 驛馬
    TravelStar,
    /// 桃花
    PeachBlossom,
    /// 日祿
    StemWealth,
    /// 貴人
    NoblePerson,
}

/// All 4 star kinds in output order.
pub const ALL_STAR_KINDS: [StarKind; 4] = [
    StarKind::TravelStar,
    StarKind::PeachBlossom,
    StarKind::StemWealth,
    StarKind::NoblePerson,
];

impl StarKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TravelStar => "驛馬",
            Self::PeachBlossom => "桃花",
            Self::StemWealth => "日祿",
            Self::NoblePerson => "貴人",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::TravelStar => "Travel Star",
            Self::PeachBlossom => "Peach Blossom",
            Self::StemWealth => "Stem Wealth",
            Self::NoblePerson => "Noble Person",
        }
    }
}

impl Display for StarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A star that fired for the day, with its target branches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuxiliaryStar {
    pub kind: StarKind,
    pub branches: Vec<EarthlyBranch>,
}

/// Travel star: the branch clashing with the head of the day branch's
/// three-harmony group.
pub const fn travel_star(day_branch: EarthlyBranch) -> EarthlyBranch {
    use EarthlyBranch::*;
    match day_branch {
        Shen | Zi | Chen => Yin,
        Yin | Wu | Xu => Shen,
        Si | You | Chou => Hai,
        Hai | Mao | Wei => Si,
    }
}

/// Peach blossom: the "bath" branch of the day branch's three-harmony group.
pub const fn peach_blossom(day_branch: EarthlyBranch) -> EarthlyBranch {
    use EarthlyBranch::*;
    match day_branch {
        Shen | Zi | Chen => You,
        Yin | Wu | Xu => Mao,
        Si | You | Chou => Wu,
        Hai | Mao | Wei => Zi,
    }
}

/// Stem wealth (lu): the branch where the day stem is "prosperous".
pub const fn stem_wealth(day_stem: HeavenlyStem) -> EarthlyBranch {
    use EarthlyBranch::*;
    match day_stem {
        HeavenlyStem::Jia => Yin,
        HeavenlyStem::Yi => Mao,
        HeavenlyStem::Bing | HeavenlyStem::Wu => Si,
        HeavenlyStem::Ding | HeavenlyStem::Ji => Wu,
        HeavenlyStem::Geng => Shen,
        HeavenlyStem::Xin => You,
        HeavenlyStem::Ren => Hai,
        HeavenlyStem::Gui => Zi,
    }
}

/// Noble person (tianyi guiren): the day stem's two noble branches.
pub const fn noble_person(day_stem: HeavenlyStem) -> &'static [EarthlyBranch] {
    use EarthlyBranch::*;
    match day_stem {
        HeavenlyStem::Jia | HeavenlyStem::Wu | HeavenlyStem::Geng => &[Chou, Wei],
        HeavenlyStem::Yi | HeavenlyStem::Ji => &[Zi, Shen],
        HeavenlyStem::Bing | HeavenlyStem::Ding => &[Hai, You],
        HeavenlyStem::Ren | HeavenlyStem::Gui => &[Si, Mao],
        HeavenlyStem::Xin => &[Wu, Yin],
    }
}

/// Target branches of a star kind for a day.
pub fn star_branches(kind: StarKind, day: &DayPillar) -> Vec<EarthlyBranch> {
    match kind {
        StarKind::TravelStar => vec![travel_star(day.branch())],
        StarKind::PeachBlossom => vec![peach_blossom(day.branch())],
        StarKind::StemWealth => vec![stem_wealth(day.stem())],
        StarKind::NoblePerson => noble_person(day.stem()).to_vec(),
    }
}

/// Every star that fires on `day`; a star with no target branch is omitted.
pub fn auxiliary_stars(day: &DayPillar) -> Vec<AuxiliaryStar> {
    ALL_STAR_KINDS
        .iter()
        .map(|&kind| AuxiliaryStar {
            kind,
            branches: star_branches(kind, day),
        })
        .filter(|star| !star.branches.is_empty())
        .collect()
}
