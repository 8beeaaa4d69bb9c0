//! Rendered chart types.

use serde::Serialize;

use saju_base::{
    Branch, Element, ElementTally, Locale, LuckCycle, Pillar, PolarityBalance, Position, Relation,
    ShinsalMarker, Stem, TenGod,
};

/// An element key plus its localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementLabel {
    pub element: Element,
    pub label: &'static str,
}

impl ElementLabel {
    pub const fn new(element: Element, locale: Locale) -> Self {
        Self {
            element,
            label: element.label(locale),
        }
    }
}

/// One indexed luck cycle with its texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckCycleView {
    pub start_age: u32,
    pub end_age: Option<u32>,
    pub pillar: Pillar,
    pub pillar_label: String,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: ElementLabel,
    pub branch_element: ElementLabel,
    pub governing_force: TenGod,
    pub governing_force_label: &'static str,
    pub governing_force_description: &'static str,
    pub is_current: bool,
}

impl LuckCycleView {
    pub fn render(cycle: &LuckCycle, locale: Locale) -> Self {
        let pillar = cycle.pillar;
        Self {
            start_age: cycle.start_age,
            end_age: cycle.end_age,
            pillar,
            pillar_label: pillar.label(locale),
            stem: pillar.stem(),
            branch: pillar.branch(),
            stem_element: ElementLabel::new(cycle.stem_element, locale),
            branch_element: ElementLabel::new(cycle.branch_element, locale),
            governing_force: cycle.governing_force,
            governing_force_label: cycle.governing_force.label(locale),
            governing_force_description: cycle.governing_force.description(locale),
            is_current: cycle.is_current,
        }
    }
}

/// Ten-God of one non-Day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenGodEntry {
    pub position: Position,
    pub position_label: &'static str,
    pub stem: Stem,
    pub ten_god: TenGod,
    pub label: &'static str,
}

/// The Day stem, the reference point of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMaster {
    pub stem: Stem,
    pub stem_label: &'static str,
    pub element: ElementLabel,
    pub polarity: &'static str,
}

/// Full chart result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuChart {
    pub locale: Locale,
    pub time_known: bool,
    pub element_tally: ElementTally,
    pub dominant_element: ElementLabel,
    pub shinsal_markers: Vec<ShinsalMarker>,
    pub relations: Vec<Relation>,
    pub luck_cycles: Vec<LuckCycleView>,
    /// `None` when the current age precedes the first cycle or the cycles are malformed.
    pub current_luck_cycle: Option<LuckCycleView>,
    pub polarity: PolarityBalance,
    pub ten_gods: Vec<TenGodEntry>,
    pub day_master: DayMaster,
}
