//! Five elements (wuxing) and the six relatives (liuqin) derived from them.
//!
//! The generating cycle runs Wood → Fire → Earth → Metal → Water → Wood; each
//! element overcomes the element two steps ahead of it. The six relatives of a
//! line are read from the relation between the palace element ("self") and
//! the line element.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The five elements, in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// Chinese glyph of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based position in the generating cycle (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (next in the cycle).
    pub const fn generates(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes (two steps ahead in the cycle).
    pub const fn overcomes(self) -> FiveElement {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// All 5 elements in order.
    pub const fn all() -> &'static [FiveElement; 5] {
        &ALL_ELEMENTS
    }
}

impl Display for FiveElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation of a target element as seen from a source element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Source generates target.
    Generates,
    /// Source overcomes target.
    Overcomes,
    /// Target generates source.
    GeneratedBy,
    /// Target overcomes source.
    OvercomeBy,
}

/// How `target` relates to `source` on the five-element cycle.
pub const fn element_relation(source: FiveElement, target: FiveElement) -> ElementRelation {
    // Cycle distance 0..4 from source to target.
    let dist = (target.index() + 5 - source.index()) % 5;
    match dist {
        0 => ElementRelation::Same,
        1 => ElementRelation::Generates,
        2 => ElementRelation::Overcomes,
        3 => ElementRelation::OvercomeBy,
        _ => ElementRelation::GeneratedBy,
    }
}

/// The six relatives (liuqin). Only five kinds exist; "six" counts the
/// self/sibling role twice in the traditional enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SixRelative {
    /// 兄弟: same element as the palace.
    Sibling,
    /// 子孫: generated by the palace.
    Offspring,
    /// 妻財: overcome by the palace.
    Wealth,
    /// 父母: generates the palace.
    Parent,
    /// 官鬼: overcomes the palace.
    Officer,
}

/// All 5 relative kinds.
pub const ALL_RELATIVES: [SixRelative; 5] = [
    SixRelative::Sibling,
    SixRelative::Offspring,
    SixRelative::Wealth,
    SixRelative::Parent,
    SixRelative::Officer,
];

impl SixRelative {
    /// Chinese name of the relative.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sibling => "兄弟",
            Self::Offspring => "子孫",
            Self::Wealth => "妻財",
            Self::Parent => "父母",
            Self::Officer => "官鬼",
        }
    }

    /// English name of the relative.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sibling => "Sibling",
            Self::Offspring => "Offspring",
            Self::Wealth => "Wealth",
            Self::Parent => "Parent",
            Self::Officer => "Officer",
        }
    }

    /// 0-based index into ALL_RELATIVES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sibling => 0,
            Self::Offspring => 1,
            Self::Wealth => 2,
            Self::Parent => 3,
            Self::Officer => 4,
        }
    }

    /// All 5 relative kinds in order.
    pub const fn all() -> &'static [SixRelative; 5] {
        &ALL_RELATIVES
    }
}

impl Display for SixRelative {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Six-relative role of a line element within a palace of `palace_element`.
pub const fn six_relative(palace_element: FiveElement, line_element: FiveElement) -> SixRelative {
    match element_relation(palace_element, line_element) {
        ElementRelation::Same => SixRelative::Sibling,
        ElementRelation::Generates => SixRelative::Offspring,
        ElementRelation::Overcomes => SixRelative::Wealth,
        ElementRelation::GeneratedBy => SixRelative::Parent,
        ElementRelation::OvercomeBy => SixRelative::Officer,
    }
}
