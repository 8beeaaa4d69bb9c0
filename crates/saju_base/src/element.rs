//! Five elements (ohaeng), yin/yang polarity, and the element classifier.
//!
//! Every stem and branch belongs to exactly one element. The classifier
//! tallies the present symbols of a pillar set and picks a dominant element:
//!
//! 1. highest count wins;
//! 2. ties go to the element with the higher positional priority
//!    (2 if it appears in the Day pillar, 1 if in the Month pillar, else 0);
//! 3. remaining ties go to the earlier element in generating order
//!    Wood → Fire → Earth → Metal → Water.

use serde::Serialize;

use crate::locale::Locale;
use crate::pillar::{PillarSet, Position};

/// The five elements, in generating (sangsaeng) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Classical character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Localized name.
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Wood => locale.pick("목", "Wood"),
            Self::Fire => locale.pick("화", "Fire"),
            Self::Earth => locale.pick("토", "Earth"),
            Self::Metal => locale.pick("금", "Metal"),
            Self::Water => locale.pick("수", "Water"),
        }
    }

    /// The element this one generates (Wood feeds Fire, ...).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls (Wood breaks Earth, ...).
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the n-th symbol in a cycle: even = yang, odd = yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Localized name.
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Yang => locale.pick("양", "Yang"),
            Self::Yin => locale.pick("음", "Yin"),
        }
    }
}

/// Per-element symbol counts for one pillar set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementTally {
    /// Count for one element.
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn bump(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += 1;
    }

    /// Sum over all elements: 8 with a known hour, 6 without.
    pub const fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// `(element, count)` pairs in generating order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Output of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementBalance {
    pub tally: ElementTally,
    pub dominant: Element,
}

/// Yang/yin symbol counts for one pillar set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolarityBalance {
    pub yang: u8,
    pub yin: u8,
}

/// Tally the elements of every present stem and branch and pick the dominant one.
pub fn classify(pillars: &PillarSet) -> ElementBalance {
    let mut tally = ElementTally::default();
    for (_, pillar) in pillars.present() {
        tally.bump(pillar.stem().element());
        tally.bump(pillar.branch().element());
    }

    // Strictly-greater comparison over generating order keeps the earliest
    // element on a full tie.
    let mut dominant = Element::Wood;
    let mut best = (tally.get(dominant), priority_score(pillars, dominant));
    for &element in &ALL_ELEMENTS[1..] {
        let key = (tally.get(element), priority_score(pillars, element));
        if key > best {
            best = key;
            dominant = element;
        }
    }

    tracing::debug!(?tally, ?dominant, "element balance");
    ElementBalance { tally, dominant }
}

/// Positional tie-break score: 2 for the Day pillar, 1 for the Month pillar.
fn priority_score(pillars: &PillarSet, element: Element) -> u8 {
    if pillars.get(Position::Day).is_some_and(|p| p.has_element(element)) {
        2
    } else if pillars.get(Position::Month).is_some_and(|p| p.has_element(element)) {
        1
    } else {
        0
    }
}

/// Count yang and yin symbols over the present stems and branches.
pub fn polarity_balance(pillars: &PillarSet) -> PolarityBalance {
    let mut balance = PolarityBalance::default();
    for (_, pillar) in pillars.present() {
        for polarity in [pillar.stem().polarity(), pillar.branch().polarity()] {
            match polarity {
                Polarity::Yang => balance.yang += 1,
                Polarity::Yin => balance.yin += 1,
            }
        }
    }
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;

    fn set(year: &str, month: &str, day: &str, hour: Option<&str>) -> PillarSet {
        PillarSet::new(
            year.parse().unwrap(),
            month.parse().unwrap(),
            day.parse().unwrap(),
            hour.map(|h| h.parse::<Pillar>().unwrap()),
        )
    }

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Water.controls(), Element::Fire);
    }

    #[test]
    fn tally_sums_eight_with_hour() {
        let b = classify(&set("甲子", "丙寅", "戊辰", Some("庚申")));
        assert_eq!(b.tally.total(), 8);
    }

    #[test]
    fn tally_sums_six_without_hour() {
        let b = classify(&set("甲子", "丙寅", "戊辰", None));
        assert_eq!(b.tally.total(), 6);
    }

    #[test]
    fn highest_count_wins() {
        // 甲寅 乙卯 甲子: wood x5, water x1
        let b = classify(&set("甲寅", "乙卯", "甲子", None));
        assert_eq!(b.tally.wood, 5);
        assert_eq!(b.dominant, Element::Wood);
    }

    #[test]
    fn day_priority_breaks_count_tie() {
        // 丙午 庚申 壬子: fire 2, metal 2, water 2 → Day holds water
        let b = classify(&set("丙午", "庚申", "壬子", None));
        assert_eq!(b.tally.fire, 2);
        assert_eq!(b.tally.metal, 2);
        assert_eq!(b.tally.water, 2);
        assert_eq!(b.dominant, Element::Water);
    }

    #[test]
    fn month_priority_beats_unplaced() {
        // 丙午 庚申 甲子: fire 2, metal 2, wood 1, water 1 → Month holds metal
        let b = classify(&set("丙午", "庚申", "甲子", None));
        assert_eq!(b.dominant, Element::Metal);
    }

    #[test]
    fn month_priority_among_three_way_tie() {
        // wood 1, water 1, earth 2, fire 2, metal 2; earth sits in the Month pillar
        let b = classify(&set("丙午", "戊辰", "甲子", Some("庚申")));
        assert_eq!(b.dominant, Element::Earth);
    }

    #[test]
    fn full_tie_uses_generating_order() {
        // wood 2, water 2, fire 2, metal 2; Day holds both wood and water
        let b = classify(&set("丙午", "乙亥", "甲子", Some("庚申")));
        assert_eq!(b.tally.wood, b.tally.water);
        assert_eq!(b.dominant, Element::Wood);
    }

    #[test]
    fn polarity_balance_sums() {
        let p = polarity_balance(&set("甲子", "丁卯", "戊辰", None));
        assert_eq!(p.yang + p.yin, 6);
        assert_eq!(p.yang, 4);
        assert_eq!(p.yin, 2);
    }
}
