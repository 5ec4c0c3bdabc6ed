//! Najia: earthly branch, element, and six-relative role per line.
//!
//! Branches come from the trigrams themselves, not the resolved palace:
//! lines 1–3 read the inner trigram's list, lines 4–6 the outer trigram's.
//! Only the relative depends on the palace, through its element.

use serde::{Deserialize, Serialize};

use crate::ganzhi::EarthlyBranch;
use crate::hexagram::Hexagram;
use crate::wuxing::{FiveElement, SixRelative, six_relative};

/// Najia attributes of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NajiaLine {
    pub branch: EarthlyBranch,
    pub element: FiveElement,
    pub relative: SixRelative,
}

impl NajiaLine {
    pub const fn new(branch: EarthlyBranch, palace_element: FiveElement) -> Self {
        let element = branch.element();
        Self {
            branch,
            element,
            relative: six_relative(palace_element, element),
        }
    }
}

/// Branches of lines 1–6 of a hexagram.
pub const fn najia_branches(hexagram: &Hexagram) -> [EarthlyBranch; 6] {
    let inner = hexagram.lower.najia_branches();
    let outer = hexagram.upper.najia_branches();
    [inner[0], inner[1], inner[2], outer[3], outer[4], outer[5]]
}

/// Full najia of a hexagram, relatives read against `palace_element`.
///
/// For a transformed hexagram pass the *base* palace element: relatives are
/// always read from the base hexagram's house.
pub const fn najia(hexagram: &Hexagram, palace_element: FiveElement) -> [NajiaLine; 6] {
    let b = najia_branches(hexagram);
    [
        NajiaLine::new(b[0], palace_element),
        NajiaLine::new(b[1], palace_element),
        NajiaLine::new(b[2], palace_element),
        NajiaLine::new(b[3], palace_element),
        NajiaLine::new(b[4], palace_element),
        NajiaLine::new(b[5], palace_element),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::EarthlyBranch::*;
    use crate::palace::{ALL_PALACES, resolve_palace};
    use crate::trigram::Trigram;
    use crate::wuxing::ALL_RELATIVES;

    #[test]
    fn pure_qian() {
        let lines = najia(&Hexagram::pure(Trigram::Qian), FiveElement::Metal);
        let branches: Vec<_> = lines.iter().map(|l| l.branch).collect();
        assert_eq!(branches, [Zi, Yin, Chen, Wu, Shen, Xu]);
        let relatives: Vec<_> = lines.iter().map(|l| l.relative).collect();
        assert_eq!(
            relatives,
            [
                SixRelative::Offspring,
                SixRelative::Wealth,
                SixRelative::Parent,
                SixRelative::Officer,
                SixRelative::Sibling,
                SixRelative::Parent,
            ]
        );
    }

    #[test]
    fn tai_takes_inner_qian_outer_kun() {
        let tai = Hexagram::new(Trigram::Qian, Trigram::Kun);
        assert_eq!(najia_branches(&tai), [Zi, Yin, Chen, Chou, Hai, You]);
        let lines = najia(&tai, resolve_palace(tai).palace.element());
        // Earth palace: 子水 wealth, 寅木 officer, 辰土 sibling.
        assert_eq!(lines[0].relative, SixRelative::Wealth);
        assert_eq!(lines[1].relative, SixRelative::Officer);
        assert_eq!(lines[2].relative, SixRelative::Sibling);
        assert_eq!(lines[5].relative, SixRelative::Offspring);
    }

    #[test]
    fn same_trigram_same_slot_same_branches() {
        let a = Hexagram::new(Trigram::Kan, Trigram::Li);
        let b = Hexagram::new(Trigram::Kan, Trigram::Gen);
        assert_eq!(najia_branches(&a)[..3], najia_branches(&b)[..3]);
        assert_ne!(najia_branches(&a)[3..], najia_branches(&b)[3..]);
    }

    #[test]
    fn every_pure_hexagram_holds_all_five_relatives() {
        for palace in ALL_PALACES {
            let lines = najia(&palace.pure_hexagram(), palace.element());
            for kind in ALL_RELATIVES {
                assert!(
                    lines.iter().any(|l| l.relative == kind),
                    "{} lacks {kind:?}",
                    palace.name()
                );
            }
        }
    }

    #[test]
    fn elements_follow_branches() {
        let lines = najia(&Hexagram::pure(Trigram::Kun), FiveElement::Earth);
        for l in lines {
            assert_eq!(l.element, l.branch.element());
        }
    }
}
