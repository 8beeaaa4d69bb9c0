//! Error types for symbol parsing and pillar construction.
//!
//! Alphabet violations and out-of-range luck-cycle generation requests are
//! errors. A rule that finds no match simply contributes nothing to its
//! result collection.

use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from the Four-Pillars symbol layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Value is not one of the 10 heavenly stems.
    #[error("invalid stem: {0:?}")]
    InvalidStem(String),
    /// Value is not one of the 12 earthly branches.
    #[error("invalid branch: {0:?}")]
    InvalidBranch(String),
    /// Stem and branch differ in polarity, so the pair is not in the 60-term cycle.
    #[error(
        "{s}{b} is not a sexagenary pillar (stem and branch polarity differ)",
        s = .stem.hanja(),
        b = .branch.hanja()
    )]
    MismatchedPolarity { stem: Stem, branch: Branch },
    /// Pillar text is not exactly one stem followed by one branch.
    #[error("invalid pillar: {0:?}")]
    InvalidPillar(String),
    /// Unknown locale code.
    #[error("invalid locale: {0:?} (expected \"ko\" or \"en\")")]
    InvalidLocale(String),
    /// Unknown gender value.
    #[error("invalid gender: {0:?} (expected \"male\" or \"female\")")]
    InvalidGender(String),
    /// Too many luck cycles requested.
    #[error("luck cycle count {count} exceeds the maximum of {max}")]
    LuckCycleCount { count: usize, max: usize },
    /// Luck cycle start ages do not fit in a `u32`.
    #[error("luck cycle start ages overflow from first start age {first_start_age}")]
    LuckAgeOverflow { first_start_age: u32 },
}
