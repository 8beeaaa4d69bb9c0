//! Ten Gods (sipseong): the relation of any stem to the Day stem.
//!
//! The Day stem (day master) is the reference point of a chart. Another stem
//! is classified by how its element relates to the day master's element
//! (same, generated by it, controlled by it, controlling it, generating it)
//! and whether the two share polarity. The luck-cycle indexer uses the same
//! table to name the force governing each cycle.

use serde::Serialize;

use crate::locale::Locale;
use crate::stem::Stem;

/// The 10 Ten-God relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TenGod {
    /// Same element, same polarity (비견).
    Companion,
    /// Same element, opposite polarity (겁재).
    RobWealth,
    /// Generated by the day master, same polarity (식신).
    EatingGod,
    /// Generated by the day master, opposite polarity (상관).
    HurtingOfficer,
    /// Controlled by the day master, same polarity (편재).
    IndirectWealth,
    /// Controlled by the day master, opposite polarity (정재).
    DirectWealth,
    /// Controls the day master, same polarity (편관).
    SevenKillings,
    /// Controls the day master, opposite polarity (정관).
    DirectOfficer,
    /// Generates the day master, same polarity (편인).
    IndirectResource,
    /// Generates the day master, opposite polarity (정인).
    DirectResource,
}

/// All 10 Ten Gods in traditional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

use TenGod::{
    Companion as CO, DirectOfficer as DO, DirectResource as DR, DirectWealth as DW,
    EatingGod as EG, HurtingOfficer as HO, IndirectResource as IR, IndirectWealth as IW,
    RobWealth as RW, SevenKillings as SK,
};

/// Rows: day stem 甲..癸. Columns: other stem 甲..癸.
#[rustfmt::skip]
const TEN_GOD_TABLE: [[TenGod; 10]; 10] = [
    //甲  乙  丙  丁  戊  己  庚  辛  壬  癸
    [CO, RW, EG, HO, IW, DW, SK, DO, IR, DR], // 甲
    [RW, CO, HO, EG, DW, IW, DO, SK, DR, IR], // 乙
    [IR, DR, CO, RW, EG, HO, IW, DW, SK, DO], // 丙
    [DR, IR, RW, CO, HO, EG, DW, IW, DO, SK], // 丁
    [SK, DO, IR, DR, CO, RW, EG, HO, IW, DW], // 戊
    [DO, SK, DR, IR, RW, CO, HO, EG, DW, IW], // 己
    [IW, DW, SK, DO, IR, DR, CO, RW, EG, HO], // 庚
    [DW, IW, DO, SK, DR, IR, RW, CO, HO, EG], // 辛
    [EG, HO, IW, DW, SK, DO, IR, DR, CO, RW], // 壬
    [HO, EG, DW, IW, DO, SK, DR, IR, RW, CO], // 癸
];

/// Ten-God of `other` seen from the day master `day`.
pub const fn ten_god(day: Stem, other: Stem) -> TenGod {
    TEN_GOD_TABLE[day.index() as usize][other.index() as usize]
}

impl TenGod {
    /// Classical name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// Localized label.
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Companion => locale.pick("비견", "Companion"),
            Self::RobWealth => locale.pick("겁재", "Rob Wealth"),
            Self::EatingGod => locale.pick("식신", "Eating God"),
            Self::HurtingOfficer => locale.pick("상관", "Hurting Officer"),
            Self::IndirectWealth => locale.pick("편재", "Indirect Wealth"),
            Self::DirectWealth => locale.pick("정재", "Direct Wealth"),
            Self::SevenKillings => locale.pick("편관", "Seven Killings"),
            Self::DirectOfficer => locale.pick("정관", "Direct Officer"),
            Self::IndirectResource => locale.pick("편인", "Indirect Resource"),
            Self::DirectResource => locale.pick("정인", "Direct Resource"),
        }
    }

    /// Localized one-line reading.
    pub const fn description(self, locale: Locale) -> &'static str {
        match self {
            Self::Companion => locale.pick(
                "자립심과 주체성이 강해지는 시기로, 동료와 함께 힘을 모읍니다.",
                "A period of independence and self-reliance, gathering strength with peers.",
            ),
            Self::RobWealth => locale.pick(
                "경쟁과 도전이 늘어나며, 재물 관리에 주의가 필요합니다.",
                "Competition and challenge grow; money needs careful handling.",
            ),
            Self::EatingGod => locale.pick(
                "표현력과 창의력이 살아나고, 여유와 풍요가 따릅니다.",
                "Expression and creativity flourish, bringing ease and abundance.",
            ),
            Self::HurtingOfficer => locale.pick(
                "재능이 드러나지만 기존 틀과 부딪히기 쉬운 시기입니다.",
                "Talent shows itself but tends to clash with established rules.",
            ),
            Self::IndirectWealth => locale.pick(
                "활동 범위가 넓어지고 큰 재물의 흐름이 생깁니다.",
                "Activity widens and large, fluid flows of wealth appear.",
            ),
            Self::DirectWealth => locale.pick(
                "성실한 노력으로 안정적인 재물을 쌓는 시기입니다.",
                "Steady effort builds stable, reliable wealth.",
            ),
            Self::SevenKillings => locale.pick(
                "강한 압박 속에서 결단력과 추진력이 시험받습니다.",
                "Strong pressure tests decisiveness and drive.",
            ),
            Self::DirectOfficer => locale.pick(
                "명예와 직위가 오르고, 질서와 책임이 중요해집니다.",
                "Honor and position rise; order and responsibility matter.",
            ),
            Self::IndirectResource => locale.pick(
                "직관과 독특한 학문에 끌리며, 내면을 돌아보게 됩니다.",
                "Intuition and unconventional study draw you inward.",
            ),
            Self::DirectResource => locale.pick(
                "배움과 후원이 따르며, 마음이 안정되는 시기입니다.",
                "Learning and support arrive, and the mind settles.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    /// Relation of `other` to `day` in the generating/controlling cycles.
    fn derive_ten_god(day: Stem, other: Stem) -> TenGod {
        let (d, o) = (day.element(), other.element());
        let same = day.polarity() == other.polarity();
        let pick = |same_pol: TenGod, diff_pol: TenGod| if same { same_pol } else { diff_pol };
        if o == d {
            pick(TenGod::Companion, TenGod::RobWealth)
        } else if d.generates() == o {
            pick(TenGod::EatingGod, TenGod::HurtingOfficer)
        } else if d.controls() == o {
            pick(TenGod::IndirectWealth, TenGod::DirectWealth)
        } else if o.controls() == d {
            pick(TenGod::SevenKillings, TenGod::DirectOfficer)
        } else {
            debug_assert_eq!(o.generates(), d);
            pick(TenGod::IndirectResource, TenGod::DirectResource)
        }
    }

    #[test]
    fn table_matches_derivation() {
        for day in ALL_STEMS {
            for other in ALL_STEMS {
                assert_eq!(
                    ten_god(day, other),
                    derive_ten_god(day, other),
                    "day {day} other {other}"
                );
            }
        }
    }

    #[test]
    fn diagonal_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Companion);
        }
    }

    #[test]
    fn each_row_uses_every_god_once() {
        for day in ALL_STEMS {
            for god in ALL_TEN_GODS {
                let n = ALL_STEMS.iter().filter(|&&o| ten_god(day, o) == god).count();
                assert_eq!(n, 1, "day {day} god {god:?}");
            }
        }
    }

    #[test]
    fn known_pairs() {
        // 甲 day master: 庚 is the yang metal that controls it
        assert_eq!(ten_god(Stem::Gap, Stem::Gyeong), TenGod::SevenKillings);
        assert_eq!(ten_god(Stem::Gap, Stem::Sin), TenGod::DirectOfficer);
        assert_eq!(ten_god(Stem::Im, Stem::Jeong), TenGod::DirectWealth);
    }
}
