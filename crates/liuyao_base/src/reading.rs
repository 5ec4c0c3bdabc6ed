//! Casting: from six coin outcomes and a day pillar to a full reading.
//!
//! Pipeline:
//! 1. Decode each coin into a line kind under the configured convention.
//! 2. Assemble the base hexagram and resolve its palace and world line.
//! 3. Najia against the palace element, spirits from the day stem, void
//!    flags from the day's decade.
//! 4. If any line moves, flip the moving lines and read the changed
//!    hexagram's najia against the *base* palace element.
//! 5. Hidden spirits for relatives missing from the base lines.
//! 6. Auxiliary stars from the day pillar.

use tracing::{debug, trace};

use crate::coin::{CoinOutcome, LineKind, coins_from_counts, decode_coin};
use crate::error::LiuyaoResult;
use crate::ganzhi::DayPillar;
use crate::hexagram::Hexagram;
use crate::hidden::resolve_hidden_spirits;
use crate::najia::{NajiaLine, najia};
use crate::palace::resolve_palace;
use crate::reading_types::{Line, LineVariant, Reading, ReadingConfig, TransformedHexagram};
use crate::spirits::six_spirits;
use crate::stars::auxiliary_stars;

/// Decode six coin outcomes, bottom line first.
pub fn decode_lines(coins: &[CoinOutcome; 6], config: &ReadingConfig) -> [LineKind; 6] {
    coins.map(|c| decode_coin(c, config.coin_convention))
}

/// The changed hexagram, or `None` when no line moves.
pub fn transformed_hexagram(kinds: &[LineKind; 6]) -> Option<Hexagram> {
    if !kinds.iter().any(|k| k.is_moving()) {
        return None;
    }
    Some(Hexagram::from_lines(kinds.map(LineKind::changed_is_yang)))
}

/// Cast a reading.
pub fn cast_reading(coins: [CoinOutcome; 6], day: DayPillar, config: &ReadingConfig) -> Reading {
    let kinds = decode_lines(&coins, config);
    let hexagram = Hexagram::from_lines(kinds.map(LineKind::is_yang));
    let placement = resolve_palace(hexagram);
    let palace_element = placement.palace.element();

    let base = najia(&hexagram, palace_element);
    let spirits = six_spirits(day.stem());
    let void_branches = day.void_branches();

    let changed = transformed_hexagram(&kinds);
    let transformed = changed.map(|h| TransformedHexagram {
        hexagram: h,
        palace: resolve_palace(h).palace,
    });
    let changed_lines: Option<[NajiaLine; 6]> = changed.map(|h| najia(&h, palace_element));

    let hidden = resolve_hidden_spirits(&base, placement.palace);

    let lines: [Line; 6] = std::array::from_fn(|i| {
        let position = (i + 1) as u8;
        let kind = kinds[i];
        let variant = match (kind.is_moving(), changed_lines) {
            (true, Some(cl)) => Some(LineVariant {
                is_yang: kind.changed_is_yang(),
                branch: cl[i].branch,
                element: cl[i].element,
                relative: cl[i].relative,
            }),
            _ => None,
        };
        let line = Line {
            position,
            coin: coins[i],
            kind,
            is_yang: kind.is_yang(),
            is_moving: kind.is_moving(),
            branch: base[i].branch,
            element: base[i].element,
            relative: base[i].relative,
            spirit: spirits[i],
            is_world: position == placement.world_line,
            is_response: position == placement.response_line,
            is_void: void_branches.contains(&base[i].branch),
            variant,
            hidden_spirit: hidden[i],
        };
        trace!(
            position,
            kind = kind.name(),
            branch = line.branch.name(),
            relative = line.relative.name(),
            spirit = line.spirit.name(),
            "line"
        );
        line
    });

    debug!(
        day = %day,
        hexagram = hexagram.name(),
        palace = placement.palace.name(),
        palace_type = placement.palace_type.name(),
        world = placement.world_line,
        changed = transformed.map(|t| t.hexagram.name()),
        "reading cast"
    );

    Reading {
        coins,
        day,
        hexagram,
        palace: placement.palace,
        palace_type: placement.palace_type,
        world_line: placement.world_line,
        response_line: placement.response_line,
        lines,
        transformed,
        void_branches,
        stars: auxiliary_stars(&day),
    }
}

impl Reading {
    /// Cast from raw coin counts and a day pillar string such as `"甲子"` or
    /// `"jia-zi"`, with the default configuration.
    pub fn from_counts(counts: &[u8], day: &str) -> LiuyaoResult<Reading> {
        Self::from_counts_with(counts, day, &ReadingConfig::default())
    }

    /// As [`Reading::from_counts`], with an explicit configuration.
    pub fn from_counts_with(
        counts: &[u8],
        day: &str,
        config: &ReadingConfig,
    ) -> LiuyaoResult<Reading> {
        let coins = coins_from_counts(counts)?;
        let day: DayPillar = day.parse()?;
        Ok(cast_reading(coins, day, config))
    }
}
