//! The 10 heavenly stems (cheongan).
//!
//! Stems cycle 甲 → 癸. Each pair of consecutive stems shares an element,
//! the first of the pair yang and the second yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::locale::Locale;

/// The 10 heavenly stems starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `index % 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Classical character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Revised romanization of the hangul reading.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Localized reading: hangul for Korean, romanization for English.
    pub const fn label(self, locale: Locale) -> &'static str {
        locale.pick(self.hangul(), self.romanized())
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Yang for 甲丙戊庚壬, yin for 乙丁己辛癸.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem `steps` positions away in the cycle (negative steps go backward).
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(10) as u8)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

impl FromStr for Stem {
    type Err = SajuError;

    /// Accepts hanja (甲), hangul (갑) or romanization (gap), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| {
                t == stem.hanja() || t == stem.hangul() || t.eq_ignore_ascii_case(stem.romanized())
            })
            .ok_or_else(|| SajuError::InvalidStem(s.to_string()))
    }
}
