//! Luck cycles (daeun): age-bounded ten-year periods, each ruled by its own
//! pillar.
//!
//! The calendar collaborator supplies the raw cycle list (pillar + start
//! age). This module turns it into contiguous `[start, end)` intervals,
//! marks the one containing the current age, and names the Ten-God force
//! of each cycle stem relative to the Day stem.

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::pillar::{Gender, Pillar};
use crate::stem::Stem;
use crate::ten_god::{TenGod, ten_god};

/// Years spanned by one luck cycle.
pub const LUCK_CYCLE_YEARS: u32 = 10;

/// Default number of cycles generated when only a start age is known.
pub const DEFAULT_LUCK_CYCLE_COUNT: usize = 10;

/// Upper bound on generated cycles (120 years).
pub const MAX_LUCK_CYCLE_COUNT: usize = 12;

/// One cycle as handed over by the calendar collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLuckCycle {
    pub pillar: Pillar,
    pub start_age: u32,
}

/// One indexed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LuckCycle {
    pub start_age: u32,
    /// Exclusive; `None` for the open-ended last cycle.
    pub end_age: Option<u32>,
    pub pillar: Pillar,
    pub stem_element: Element,
    pub branch_element: Element,
    pub governing_force: TenGod,
    pub is_current: bool,
}

impl LuckCycle {
    /// Whether `age` falls in `[start_age, end_age)`.
    pub fn contains(&self, age: u32) -> bool {
        age >= self.start_age && self.end_age.is_none_or(|end| age < end)
    }
}

/// Indexed cycles plus the position of the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LuckTimeline {
    pub cycles: Vec<LuckCycle>,
    current: Option<usize>,
}

impl LuckTimeline {
    /// Cycle containing the current age, if any.
    pub fn current(&self) -> Option<&LuckCycle> {
        self.current.map(|i| &self.cycles[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }
}

/// Build contiguous intervals from `raw` and mark the cycle holding `current_age`.
///
/// Input whose start ages are not strictly ascending is indexed as given but
/// no cycle is marked current. An empty list yields an empty timeline. A
/// `current_age` before the first start age also leaves no current cycle.
pub fn index_luck_cycles(raw: &[RawLuckCycle], day_stem: Stem, current_age: u32) -> LuckTimeline {
    let ordered = raw.windows(2).all(|w| w[0].start_age < w[1].start_age);
    if !ordered {
        tracing::warn!(
            cycles = raw.len(),
            "luck cycle start ages are not strictly ascending; no cycle marked current"
        );
    }

    let mut current = None;
    let cycles = raw
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let end_age = raw.get(i + 1).map(|next| next.start_age);
            let mut cycle = LuckCycle {
                start_age: c.start_age,
                end_age,
                pillar: c.pillar,
                stem_element: c.pillar.stem().element(),
                branch_element: c.pillar.branch().element(),
                governing_force: ten_god(day_stem, c.pillar.stem()),
                is_current: false,
            };
            if ordered && current.is_none() && cycle.contains(current_age) {
                cycle.is_current = true;
                current = Some(i);
            }
            cycle
        })
        .collect::<Vec<_>>();

    if current.is_none() && ordered && !cycles.is_empty() {
        tracing::debug!(current_age, "current age precedes the first luck cycle");
    }

    LuckTimeline { cycles, current }
}

/// Direction in which luck-cycle pillars step away from the Month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LuckDirection {
    Forward,
    Backward,
}

impl LuckDirection {
    /// Forward for a yang-year male or a yin-year female, backward otherwise.
    pub const fn for_subject(gender: Gender, year_stem: Stem) -> Self {
        match (gender, year_stem.polarity()) {
            (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Self::Forward,
            _ => Self::Backward,
        }
    }

    const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Step the cycle from the Month pillar: one term and ten years per cycle.
///
/// Fails when `count` exceeds [`MAX_LUCK_CYCLE_COUNT`] or a start age would
/// not fit in a `u32`.
pub fn generate_raw_cycles(
    month: Pillar,
    direction: LuckDirection,
    first_start_age: u32,
    count: usize,
) -> Result<Vec<RawLuckCycle>, SajuError> {
    if count > MAX_LUCK_CYCLE_COUNT {
        return Err(SajuError::LuckCycleCount {
            count,
            max: MAX_LUCK_CYCLE_COUNT,
        });
    }
    (0u32..)
        .zip(1i32..)
        .take(count)
        .map(|(i, steps)| {
            let start_age = LUCK_CYCLE_YEARS
                .checked_mul(i)
                .and_then(|offset| first_start_age.checked_add(offset))
                .ok_or(SajuError::LuckAgeOverflow { first_start_age })?;
            Ok(RawLuckCycle {
                pillar: month.offset(direction.step() * steps),
                start_age,
            })
        })
        .collect()
}
