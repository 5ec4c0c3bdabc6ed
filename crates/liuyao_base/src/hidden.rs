//! Hidden spirits (fushen): relatives missing from a hexagram, borrowed from
//! its palace's pure hexagram.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ganzhi::EarthlyBranch;
use crate::najia::{NajiaLine, najia};
use crate::palace::Palace;
use crate::wuxing::{ALL_RELATIVES, FiveElement, SixRelative};

/// A relative hidden beneath a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenSpirit {
    pub relative: SixRelative,
    pub branch: EarthlyBranch,
    pub element: FiveElement,
}

impl From<NajiaLine> for HiddenSpirit {
    fn from(line: NajiaLine) -> Self {
        Self {
            relative: line.relative,
            branch: line.branch,
            element: line.element,
        }
    }
}

/// Relatives that appear on none of `lines`, in relative order.
pub fn missing_relatives(lines: &[NajiaLine; 6]) -> Vec<SixRelative> {
    ALL_RELATIVES
        .iter()
        .copied()
        .filter(|&kind| !lines.iter().any(|l| l.relative == kind))
        .collect()
}

/// Hidden spirit per position (index 0 = line 1) for a hexagram in `palace`.
///
/// `lines` is the hexagram's najia read against the palace element. Every
/// pure-hexagram line carrying a missing relative is attached at its own
/// position. A relative that occurs twice in the pure hexagram is never
/// missing from a member of its palace, so in practice each missing relative
/// lands on exactly one line.
pub fn resolve_hidden_spirits(
    lines: &[NajiaLine; 6],
    palace: Palace,
) -> [Option<HiddenSpirit>; 6] {
    let mut hidden = [None; 6];
    let missing = missing_relatives(lines);
    if missing.is_empty() {
        return hidden;
    }

    let pure = najia(&palace.pure_hexagram(), palace.element());
    for (i, line) in pure.iter().enumerate() {
        if missing.contains(&line.relative) {
            trace!(
                palace = palace.name(),
                relative = line.relative.name(),
                position = i + 1,
                branch = line.branch.name(),
                "hidden spirit"
            );
            hidden[i] = Some(HiddenSpirit::from(*line));
        }
    }
    hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::Hexagram;
    use crate::palace::{ALL_PALACES, palace_family};
    use crate::trigram::Trigram;

    fn lines_in_palace(hexagram: Hexagram, palace: Palace) -> [NajiaLine; 6] {
        najia(&hexagram, palace.element())
    }

    #[test]
    fn pure_hexagram_hides_nothing() {
        for palace in ALL_PALACES {
            let lines = lines_in_palace(palace.pure_hexagram(), palace);
            assert!(missing_relatives(&lines).is_empty());
            let hidden = resolve_hidden_spirits(&lines, palace);
            assert!(hidden.iter().all(Option::is_none));
        }
    }

    #[test]
    fn tai_hides_parent_under_line_two() {
        let tai = Hexagram::new(Trigram::Qian, Trigram::Kun);
        let lines = lines_in_palace(tai, Palace::Kun);
        assert_eq!(missing_relatives(&lines), vec![SixRelative::Parent]);

        let hidden = resolve_hidden_spirits(&lines, Palace::Kun);
        assert_eq!(
            hidden[1],
            Some(HiddenSpirit {
                relative: SixRelative::Parent,
                branch: EarthlyBranch::Si,
                element: FiveElement::Fire,
            })
        );
        assert_eq!(hidden.iter().flatten().count(), 1);
    }

    #[test]
    fn gou_hides_wealth_under_line_two() {
        let gou = Hexagram::new(Trigram::Xun, Trigram::Qian);
        let lines = lines_in_palace(gou, Palace::Qian);
        assert_eq!(missing_relatives(&lines), vec![SixRelative::Wealth]);
        let hidden = resolve_hidden_spirits(&lines, Palace::Qian);
        let h = hidden[1].unwrap();
        assert_eq!(h.branch, EarthlyBranch::Yin);
        assert_eq!(h.element, FiveElement::Wood);
    }

    #[test]
    fn each_missing_relative_lands_on_exactly_one_line() {
        // Holds across all 64 hexagrams: a relative doubled in the pure
        // hexagram is never missing from a member of that palace.
        for palace in ALL_PALACES {
            for (h, _) in palace_family(palace) {
                let lines = lines_in_palace(h, palace);
                let hidden = resolve_hidden_spirits(&lines, palace);
                let missing = missing_relatives(&lines);
                for &kind in &missing {
                    let count = hidden.iter().flatten().filter(|s| s.relative == kind).count();
                    assert_eq!(count, 1, "{} {kind:?}", h.name());
                }
                assert_eq!(hidden.iter().flatten().count(), missing.len(), "{}", h.name());
                assert!(hidden.iter().flatten().all(|s| missing.contains(&s.relative)));
            }
        }
    }
}
