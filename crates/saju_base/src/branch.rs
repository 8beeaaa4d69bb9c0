//! The 12 earthly branches (jiji).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::locale::Locale;

/// The 12 earthly branches starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `index % 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Classical character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Revised romanization of the hangul reading.
    pub const fn romanized(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Localized reading: hangul for Korean, romanization for English.
    pub const fn label(self, locale: Locale) -> &'static str {
        locale.pick(self.hangul(), self.romanized())
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self, locale: Locale) -> &'static str {
        match self {
            Self::Ja => locale.pick("쥐", "Rat"),
            Self::Chuk => locale.pick("소", "Ox"),
            Self::In => locale.pick("호랑이", "Tiger"),
            Self::Myo => locale.pick("토끼", "Rabbit"),
            Self::Jin => locale.pick("용", "Dragon"),
            Self::Sa => locale.pick("뱀", "Snake"),
            Self::O => locale.pick("말", "Horse"),
            Self::Mi => locale.pick("양", "Goat"),
            Self::Sin => locale.pick("원숭이", "Monkey"),
            Self::Yu => locale.pick("닭", "Rooster"),
            Self::Sul => locale.pick("개", "Dog"),
            Self::Hae => locale.pick("돼지", "Pig"),
        }
    }

    /// Element of the branch. 辰戌丑未 are the four earth branches.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Yang for even-indexed branches (子寅辰午申戌), yin otherwise.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Branch `steps` positions away in the cycle (negative steps go backward).
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(12) as u8)
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

impl FromStr for Branch {
    type Err = SajuError;

    /// Accepts hanja (子), hangul (자) or romanization (ja), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|branch| {
                t == branch.hanja()
                    || t == branch.hangul()
                    || t.eq_ignore_ascii_case(branch.romanized())
            })
            .ok_or_else(|| SajuError::InvalidBranch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn element_membership_counts() {
        // wood 2, fire 2, earth 4, metal 2, water 2
        let expected = [2, 2, 4, 2, 2];
        for (e, n) in ALL_ELEMENTS.iter().zip(expected) {
            let count = ALL_BRANCHES.iter().filter(|b| b.element() == *e).count();
            assert_eq!(count, n, "{e:?}");
        }
    }

    #[test]
    fn parse_all_spellings() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hanja().parse::<Branch>().unwrap(), b);
            assert_eq!(b.hangul().parse::<Branch>().unwrap(), b);
            assert_eq!(b.romanized().to_uppercase().parse::<Branch>().unwrap(), b);
        }
    }

    #[test]
    fn parse_rejects_out_of_alphabet() {
        assert_eq!(
            "甲".parse::<Branch>(),
            Err(SajuError::InvalidBranch("甲".to_string()))
        );
        assert!("Dragon".parse::<Branch>().is_err());
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Branch::Hae.offset(1), Branch::Ja);
        assert_eq!(Branch::Ja.offset(-1), Branch::Hae);
    }
}
