//! The 64 hexagrams as ordered (lower, upper) trigram pairs.
//!
//! Identity is the ordered pair: (lower = Qian, upper = Kun) is 泰 Peace,
//! while (lower = Kun, upper = Qian) is 否 Standstill. Names and King Wen
//! sequence numbers are pure table lookups.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::trigram::{ALL_TRIGRAMS, Trigram};

/// A hexagram: inner (lower) trigram for lines 1–3, outer (upper) for 4–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    pub lower: Trigram,
    pub upper: Trigram,
}

/// King Wen number indexed by `[upper.index()][lower.index()]`, both in
/// palace order (Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun).
const KING_WEN_TABLE: [[u8; 8]; 8] = [
    [1, 10, 13, 25, 44, 6, 33, 12],  // upper Qian
    [43, 58, 49, 17, 28, 47, 31, 45], // upper Dui
    [14, 38, 30, 21, 50, 64, 56, 35], // upper Li
    [34, 54, 55, 51, 32, 40, 62, 16], // upper Zhen
    [9, 61, 37, 42, 57, 59, 53, 20],  // upper Xun
    [5, 60, 63, 3, 48, 29, 39, 8],    // upper Kan
    [26, 41, 22, 27, 18, 4, 52, 23],  // upper Gen
    [11, 19, 36, 24, 46, 7, 15, 2],   // upper Kun
];

/// Full Chinese names in King Wen order (index 0 = hexagram 1).
const HEXAGRAM_NAMES: [&str; 64] = [
    "乾為天", "坤為地", "水雷屯", "山水蒙", "水天需", "天水訟", "地水師", "水地比",
    "風天小畜", "天澤履", "地天泰", "天地否", "天火同人", "火天大有", "地山謙", "雷地豫",
    "澤雷隨", "山風蠱", "地澤臨", "風地觀", "火雷噬嗑", "山火賁", "山地剝", "地雷復",
    "天雷無妄", "山天大畜", "山雷頤", "澤風大過", "坎為水", "離為火", "澤山咸", "雷風恆",
    "天山遁", "雷天大壯", "火地晉", "地火明夷", "風火家人", "火澤睽", "水山蹇", "雷水解",
    "山澤損", "風雷益", "澤天夬", "天風姤", "澤地萃", "地風升", "澤水困", "水風井",
    "澤火革", "火風鼎", "震為雷", "艮為山", "風山漸", "雷澤歸妹", "雷火豐", "火山旅",
    "巽為風", "兌為澤", "風水渙", "水澤節", "風澤中孚", "雷山小過", "水火既濟", "火水未濟",
];

/// Short (one or two character) names in King Wen order.
const HEXAGRAM_SHORT_NAMES: [&str; 64] = [
    "乾", "坤", "屯", "蒙", "需", "訟", "師", "比", "小畜", "履", "泰", "否", "同人", "大有",
    "謙", "豫", "隨", "蠱", "臨", "觀", "噬嗑", "賁", "剝", "復", "無妄", "大畜", "頤", "大過",
    "坎", "離", "咸", "恆", "遁", "大壯", "晉", "明夷", "家人", "睽", "蹇", "解", "損", "益",
    "夬", "姤", "萃", "升", "困", "井", "革", "鼎", "震", "艮", "漸", "歸妹", "豐", "旅", "巽",
    "兌", "渙", "節", "中孚", "小過", "既濟", "未濟",
];

/// English names in King Wen order.
const HEXAGRAM_ENGLISH_NAMES: [&str; 64] = [
    "The Creative",
    "The Receptive",
    "Difficulty at the Beginning",
    "Youthful Folly",
    "Waiting",
    "Conflict",
    "The Army",
    "Holding Together",
    "Small Taming",
    "Treading",
    "Peace",
    "Standstill",
    "Fellowship",
    "Great Possession",
    "Modesty",
    "Enthusiasm",
    "Following",
    "Work on the Decayed",
    "Approach",
    "Contemplation",
    "Biting Through",
    "Grace",
    "Splitting Apart",
    "Return",
    "Innocence",
    "Great Taming",
    "Nourishment",
    "Great Exceeding",
    "The Abysmal",
    "The Clinging",
    "Influence",
    "Duration",
    "Retreat",
    "Great Power",
    "Progress",
    "Darkening of the Light",
    "The Family",
    "Opposition",
    "Obstruction",
    "Deliverance",
    "Decrease",
    "Increase",
    "Breakthrough",
    "Coming to Meet",
    "Gathering Together",
    "Pushing Upward",
    "Oppression",
    "The Well",
    "Revolution",
    "The Cauldron",
    "The Arousing",
    "Keeping Still",
    "Development",
    "The Marrying Maiden",
    "Abundance",
    "The Wanderer",
    "The Gentle",
    "The Joyous",
    "Dispersion",
    "Limitation",
    "Inner Truth",
    "Small Exceeding",
    "After Completion",
    "Before Completion",
];

impl Hexagram {
    pub const fn new(lower: Trigram, upper: Trigram) -> Self {
        Self { lower, upper }
    }

    /// The pure hexagram of a trigram: the trigram doubled.
    pub const fn pure(trigram: Trigram) -> Self {
        Self::new(trigram, trigram)
    }

    /// Assemble from six line polarities, bottom line first.
    pub const fn from_lines(lines: [bool; 6]) -> Self {
        Self {
            lower: Trigram::from_lines([lines[0], lines[1], lines[2]]),
            upper: Trigram::from_lines([lines[3], lines[4], lines[5]]),
        }
    }

    /// Six line polarities, bottom line first.
    pub const fn lines(&self) -> [bool; 6] {
        let l = self.lower.lines();
        let u = self.upper.lines();
        [l[0], l[1], l[2], u[0], u[1], u[2]]
    }

    /// Both trigrams identical (one of the eight palace heads).
    pub const fn is_pure(&self) -> bool {
        self.lower.bits() == self.upper.bits()
    }

    /// King Wen sequence number (1..=64).
    pub const fn king_wen(&self) -> u8 {
        KING_WEN_TABLE[self.upper.index() as usize][self.lower.index() as usize]
    }

    /// Full Chinese name, e.g. `地天泰`.
    pub const fn name(&self) -> &'static str {
        HEXAGRAM_NAMES[(self.king_wen() - 1) as usize]
    }

    /// Short Chinese name, e.g. `泰`.
    pub const fn short_name(&self) -> &'static str {
        HEXAGRAM_SHORT_NAMES[(self.king_wen() - 1) as usize]
    }

    /// English name, e.g. `Peace`.
    pub const fn english_name(&self) -> &'static str {
        HEXAGRAM_ENGLISH_NAMES[(self.king_wen() - 1) as usize]
    }

    /// All 64 hexagrams, upper trigram major, both in palace order.
    pub fn all() -> impl Iterator<Item = Hexagram> {
        ALL_TRIGRAMS
            .iter()
            .flat_map(|&upper| ALL_TRIGRAMS.iter().map(move |&lower| Hexagram::new(lower, upper)))
    }
}

impl Display for Hexagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn king_wen_numbers_are_a_permutation() {
        let mut seen = [false; 64];
        for h in Hexagram::all() {
            let n = h.king_wen();
            assert!((1..=64).contains(&n));
            assert!(!seen[(n - 1) as usize], "duplicate King Wen number {n}");
            seen[(n - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn order_of_trigrams_matters() {
        let tai = Hexagram::new(Trigram::Qian, Trigram::Kun);
        let pi = Hexagram::new(Trigram::Kun, Trigram::Qian);
        assert_eq!(tai.name(), "地天泰");
        assert_eq!(tai.king_wen(), 11);
        assert_eq!(pi.name(), "天地否");
        assert_eq!(pi.king_wen(), 12);
    }

    #[test]
    fn pure_hexagram_names() {
        for t in ALL_TRIGRAMS {
            let h = Hexagram::pure(t);
            assert!(h.is_pure());
            assert!(h.name().starts_with(t.name()), "{}", h.name());
            assert_eq!(h.short_name(), t.name());
        }
    }

    #[test]
    fn names_follow_upper_then_lower_image() {
        for h in Hexagram::all().filter(|h| !h.is_pure()) {
            let expected = format!("{}{}{}", h.upper.image(), h.lower.image(), h.short_name());
            assert_eq!(h.name(), expected);
        }
    }

    #[test]
    fn lines_round_trip() {
        for h in Hexagram::all() {
            assert_eq!(Hexagram::from_lines(h.lines()), h);
        }
    }

    #[test]
    fn known_hexagrams() {
        let ji_ji = Hexagram::new(Trigram::Li, Trigram::Kan);
        assert_eq!(ji_ji.king_wen(), 63);
        assert_eq!(ji_ji.english_name(), "After Completion");
        let xian = Hexagram::new(Trigram::Gen, Trigram::Dui);
        assert_eq!(xian.name(), "澤山咸");
        assert_eq!(xian.king_wen(), 31);
    }
}
