//! Pillars (stem + branch pairs) and the four-pillar set of one subject.
//!
//! Only pairs of equal polarity occur in the 60-term sexagenary cycle, so
//! [`Pillar::new`] rejects the other 60 combinations. The Hour pillar is
//! optional: when the birth time is unknown it is absent from every tally
//! and every positional rule, never replaced by a default.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::SajuError;
use crate::locale::Locale;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_LEN: u8 = 60;

/// Pillar positions of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [Position; 4] = [
    Position::Year,
    Position::Month,
    Position::Day,
    Position::Hour,
];

impl Position {
    /// Localized position name ("Year", "년").
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("년", "Year"),
            Self::Month => locale.pick("월", "Month"),
            Self::Day => locale.pick("일", "Day"),
            Self::Hour => locale.pick("시", "Hour"),
        }
    }

    /// Life domain traditionally read from the position.
    pub const fn domain(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("조상", "Ancestry"),
            Self::Month => locale.pick("사회", "Society"),
            Self::Day => locale.pick("자아", "Self"),
            Self::Hour => locale.pick("자녀", "Descendants"),
        }
    }

    /// "Year Stem" / "년간".
    pub const fn stem_label(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("년간", "Year Stem"),
            Self::Month => locale.pick("월간", "Month Stem"),
            Self::Day => locale.pick("일간", "Day Stem"),
            Self::Hour => locale.pick("시간", "Hour Stem"),
        }
    }

    /// "Year Branch" / "년지".
    pub const fn branch_label(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("년지", "Year Branch"),
            Self::Month => locale.pick("월지", "Month Branch"),
            Self::Day => locale.pick("일지", "Day Branch"),
            Self::Hour => locale.pick("시지", "Hour Branch"),
        }
    }
}

/// One stem/branch pair from the sexagenary cycle.
///
/// Fields are private: every pillar is built through [`Pillar::new`],
/// [`Pillar::checked`] or [`Pillar::from_sexagenary`], so the pair always
/// shares a polarity and has a sexagenary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Build a pillar, rejecting stem/branch pairs of different polarity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, SajuError> {
        Self::checked(stem, branch).ok_or(SajuError::MismatchedPolarity { stem, branch })
    }

    /// Const form of [`Pillar::new`]; `None` on a polarity mismatch.
    pub const fn checked(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Pillar at position `index % 60` of the cycle (0 = 甲子).
    pub const fn from_sexagenary(index: u8) -> Self {
        let i = index % SEXAGENARY_LEN;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// 0-based position in the 60-term cycle (甲子=0 .. 癸亥=59).
    pub const fn sexagenary_index(self) -> u8 {
        // Solves n ≡ stem (mod 10), n ≡ branch (mod 12).
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(SEXAGENARY_LEN as i32) as u8
    }

    /// Pillar `steps` terms away in the cycle (negative steps go backward).
    pub const fn offset(self, steps: i32) -> Self {
        let i = (self.sexagenary_index() as i32 + steps).rem_euclid(SEXAGENARY_LEN as i32);
        Self::from_sexagenary(i as u8)
    }

    /// Whether either the stem or the branch belongs to `element`.
    pub const fn has_element(self, element: Element) -> bool {
        self.stem.element().index() == element.index()
            || self.branch.element().index() == element.index()
    }

    /// Localized two-syllable reading ("갑자", "Gap-Ja").
    pub fn label(self, locale: Locale) -> String {
        match locale {
            Locale::Ko => format!("{}{}", self.stem.hangul(), self.branch.hangul()),
            Locale::En => format!("{}-{}", self.stem.romanized(), self.branch.romanized()),
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Pillar {
    type Err = SajuError;

    /// Parses two symbols, e.g. "甲子" or "갑자".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.char_indices();
        let split = match (chars.next(), chars.next(), chars.next()) {
            (Some(_), Some((i, _)), None) => i,
            _ => return Err(SajuError::InvalidPillar(s.to_string())),
        };
        let stem: Stem = t[..split].parse()?;
        let branch: Branch = t[split..].parse()?;
        Self::new(stem, branch)
    }
}

/// Subject gender, as supplied by the calendar collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Localized name.
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Male => locale.pick("남성", "Male"),
            Self::Female => locale.pick("여성", "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Ok(Self::Male),
            "female" | "f" | "여" | "여성" => Ok(Self::Female),
            _ => Err(SajuError::InvalidGender(s.to_string())),
        }
    }
}

/// The Year, Month, Day and optional Hour pillars of one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarSet {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` when the birth time is unknown.
    pub hour: Option<Pillar>,
}

impl PillarSet {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Whether the Hour pillar is present.
    pub const fn time_known(&self) -> bool {
        self.hour.is_some()
    }

    /// Pillar at a position; only the Hour can be absent.
    pub const fn get(&self, position: Position) -> Option<Pillar> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => Some(self.day),
            Position::Hour => self.hour,
        }
    }

    /// Present `(position, pillar)` pairs in Year, Month, Day, Hour order.
    pub fn present(&self) -> impl Iterator<Item = (Position, Pillar)> + '_ {
        ALL_POSITIONS
            .iter()
            .filter_map(move |&pos| self.get(pos).map(|p| (pos, p)))
    }

    /// Number of present stems plus branches (8 or 6).
    pub fn symbol_count(&self) -> usize {
        self.present().count() * 2
    }
}
