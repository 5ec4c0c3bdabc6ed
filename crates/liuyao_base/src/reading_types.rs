//! Types for casting a reading.
//!
//! Provides the casting configuration and the per-line and whole-reading
//! result types produced by [`crate::reading::cast_reading`].

use serde::{Deserialize, Serialize};

use crate::coin::{CoinConvention, CoinOutcome, LineKind};
use crate::ganzhi::{DayPillar, EarthlyBranch};
use crate::hexagram::Hexagram;
use crate::hidden::HiddenSpirit;
use crate::palace::{Palace, PalaceType};
use crate::spirits::SixSpirit;
use crate::stars::AuxiliaryStar;
use crate::wuxing::{FiveElement, SixRelative};

/// Configurable policies for casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Which old line a coin count of zero denotes. Default: old yang.
    pub coin_convention: CoinConvention,
}

impl ReadingConfig {
    pub const fn with_coin_convention(mut self, coin_convention: CoinConvention) -> Self {
        self.coin_convention = coin_convention;
        self
    }
}

/// A moving line after transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineVariant {
    pub is_yang: bool,
    pub branch: EarthlyBranch,
    pub element: FiveElement,
    /// Read against the base palace element, not the transformed palace.
    pub relative: SixRelative,
}

/// One line of a cast hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// 1 (bottom) ..= 6 (top).
    pub position: u8,
    pub coin: CoinOutcome,
    pub kind: LineKind,
    pub is_yang: bool,
    pub is_moving: bool,
    pub branch: EarthlyBranch,
    pub element: FiveElement,
    pub relative: SixRelative,
    pub spirit: SixSpirit,
    pub is_world: bool,
    pub is_response: bool,
    /// Branch is one of the day's two void branches.
    pub is_void: bool,
    /// Present iff the line moves.
    pub variant: Option<LineVariant>,
    pub hidden_spirit: Option<HiddenSpirit>,
}

/// The hexagram a reading changes into, with the palace it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformedHexagram {
    pub hexagram: Hexagram,
    pub palace: Palace,
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reading {
    pub coins: [CoinOutcome; 6],
    pub day: DayPillar,
    pub hexagram: Hexagram,
    pub palace: Palace,
    pub palace_type: PalaceType,
    pub world_line: u8,
    pub response_line: u8,
    /// Index 0 = line 1.
    pub lines: [Line; 6],
    /// `None` when no line moves.
    pub transformed: Option<TransformedHexagram>,
    pub void_branches: [EarthlyBranch; 2],
    pub stars: Vec<AuxiliaryStar>,
}

impl Reading {
    /// Line at 1-based `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside 1..=6.
    pub fn line(&self, position: u8) -> &Line {
        assert!((1..=6).contains(&position), "line position {position} out of range");
        &self.lines[(position - 1) as usize]
    }

    /// The world (shi) line.
    pub fn world(&self) -> &Line {
        self.line(self.world_line)
    }

    /// The response (ying) line.
    pub fn response(&self) -> &Line {
        self.line(self.response_line)
    }

    pub fn moving_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_moving)
    }

    pub fn has_moving_lines(&self) -> bool {
        self.transformed.is_some()
    }

    /// Lines carrying a hidden spirit.
    pub fn hidden_spirits(&self) -> impl Iterator<Item = (u8, &HiddenSpirit)> {
        self.lines
            .iter()
            .filter_map(|l| l.hidden_spirit.as_ref().map(|h| (l.position, h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let c = ReadingConfig::default();
        assert_eq!(c.coin_convention, CoinConvention::OldYangAtZero);
    }

    #[test]
    fn config_builder() {
        let c = ReadingConfig::default().with_coin_convention(CoinConvention::OldYinAtZero);
        assert_eq!(c.coin_convention, CoinConvention::OldYinAtZero);
    }

    #[test]
    fn config_fills_missing_fields_from_default() {
        let c: ReadingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, ReadingConfig::default());
        let c: ReadingConfig =
            serde_json::from_str(r#"{"coin_convention":"OldYinAtZero"}"#).unwrap();
        assert_eq!(c.coin_convention, CoinConvention::OldYinAtZero);
    }
}
