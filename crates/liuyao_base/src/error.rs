//! Error types for liuyao input validation.
//!
//! The engine itself is total over its closed domains; these errors only
//! arise while turning raw caller input (integers, strings) into the typed
//! inputs the engine consumes.

use thiserror::Error;

use crate::ganzhi::{EarthlyBranch, HeavenlyStem};

pub type LiuyaoResult<T> = Result<T, LiuyaoError>;

/// Errors from validating raw casting input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LiuyaoError {
    /// A coin count outside 0..=3.
    #[error("invalid coin count {0}: expected 0..=3")]
    InvalidCoinCount(u8),
    /// A cast must consist of exactly six lines.
    #[error("expected 6 coin outcomes, got {0}")]
    WrongLineCount(usize),
    /// Unrecognised heavenly stem symbol or name.
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),
    /// Unrecognised earthly branch symbol or name.
    #[error("unknown earthly branch: {0:?}")]
    UnknownBranch(String),
    /// Unrecognised trigram symbol or name.
    #[error("unknown trigram: {0:?}")]
    UnknownTrigram(String),
    /// Stem and branch of differing parity never occur together in the
    /// sexagenary cycle.
    #[error("{stem}{branch} is not a sexagenary day")]
    MismatchedDayPillar {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
    /// Input that is neither a two-glyph pillar nor `stem-branch`.
    #[error("malformed day pillar: {0:?}")]
    MalformedDayPillar(String),
}
