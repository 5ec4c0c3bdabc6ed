//! Liuyao (六爻) six-line divination engine.
//!
//! This crate provides:
//! - Coin decoding and hexagram assembly from six tosses
//! - Hexagram names and King Wen numbers
//! - Eight-palace classification with world/response lines
//! - Najia branch mapping, six relatives and six spirits
//! - Moving-line transformation, hidden spirits, void branches and
//!   auxiliary stars
//!
//! Everything is a pure function over closed enums and `const` tables.
//! Validation of raw input (coin counts, day pillar strings) lives at the
//! edges and reports [`LiuyaoError`].

pub mod coin;
pub mod error;
pub mod ganzhi;
pub mod hexagram;
pub mod hidden;
pub mod najia;
pub mod palace;
pub mod reading;
pub mod reading_types;
pub mod spirits;
pub mod stars;
pub mod trigram;
pub mod wuxing;

pub use coin::{
    ALL_COIN_OUTCOMES, CoinConvention, CoinOutcome, LineKind, coins_from_counts, decode_coin,
};
pub use error::{LiuyaoError, LiuyaoResult};
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, DayPillar, EarthlyBranch, HeavenlyStem};
pub use hexagram::Hexagram;
pub use hidden::{HiddenSpirit, missing_relatives, resolve_hidden_spirits};
pub use najia::{NajiaLine, najia, najia_branches};
pub use palace::{
    ALL_PALACE_TYPES, ALL_PALACES, Palace, PalacePlacement, PalaceType, palace_family,
    resolve_palace, response_line,
};
pub use reading::{cast_reading, decode_lines, transformed_hexagram};
pub use reading_types::{Line, LineVariant, Reading, ReadingConfig, TransformedHexagram};
pub use spirits::{ALL_SPIRITS, SixSpirit, six_spirits};
pub use stars::{
    ALL_STAR_KINDS, AuxiliaryStar, StarKind, auxiliary_stars, noble_person, peach_blossom,
    stem_wealth, travel_star,
};
pub use trigram::{ALL_TRIGRAMS, Trigram};
pub use wuxing::{
    ALL_ELEMENTS, ALL_RELATIVES, ElementRelation, FiveElement, SixRelative, element_relation,
    six_relative,
};
