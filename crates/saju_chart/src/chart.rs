//! Chart orchestration: runs the classifier, the two detectors and the luck
//! indexer over one request and renders their results in one locale.
//!
//! The components are independent; none reads another's output. Locale is
//! applied only after every rule has run.

use saju_base::{
    Locale, PillarSet, Position, Relation, ShinsalMarker, classify, detect_relations,
    detect_shinsal, index_luck_cycles, polarity_balance, ten_god,
};

use crate::chart_types::{DayMaster, ElementLabel, LuckCycleView, SajuChart, TenGodEntry};
use crate::error::ChartError;
use crate::input::{ChartInput, ChartRequest};

/// Non-Day positions whose stems get a Ten-God entry, in output order.
const TEN_GOD_POSITIONS: [Position; 3] = [Position::Year, Position::Month, Position::Hour];

/// Build the full chart for a typed request.
pub fn analyze(request: &ChartRequest, locale: Locale) -> SajuChart {
    let _span = tracing::debug_span!("analyze", %locale, time_known = request.pillars.time_known())
        .entered();
    let pillars = &request.pillars;

    let balance = classify(pillars);

    let shinsal_markers = detect_shinsal(pillars)
        .iter()
        .map(|hit| ShinsalMarker::render(hit, locale))
        .collect();

    let relations = detect_relations(pillars)
        .iter()
        .map(|hit| Relation::render(hit, locale))
        .collect();

    let timeline = index_luck_cycles(
        &request.raw_luck_cycles,
        pillars.day.stem(),
        request.current_age,
    );
    let luck_cycles = timeline
        .cycles
        .iter()
        .map(|c| LuckCycleView::render(c, locale))
        .collect();
    let current_luck_cycle = timeline.current().map(|c| LuckCycleView::render(c, locale));

    SajuChart {
        locale,
        time_known: pillars.time_known(),
        element_tally: balance.tally,
        dominant_element: ElementLabel::new(balance.dominant, locale),
        shinsal_markers,
        relations,
        luck_cycles,
        current_luck_cycle,
        polarity: polarity_balance(pillars),
        ten_gods: ten_gods(pillars, locale),
        day_master: day_master(pillars, locale),
    }
}

/// Resolve a wire input and build its chart.
pub fn analyze_input(input: &ChartInput, locale: Locale) -> Result<SajuChart, ChartError> {
    let request = input.resolve()?;
    Ok(analyze(&request, locale))
}

/// Ten-God of each present non-Day stem relative to the Day stem.
pub fn ten_gods(pillars: &PillarSet, locale: Locale) -> Vec<TenGodEntry> {
    let day = pillars.day.stem();
    TEN_GOD_POSITIONS
        .iter()
        .filter_map(|&position| pillars.get(position).map(|p| (position, p.stem())))
        .map(|(position, stem)| {
            let god = ten_god(day, stem);
            TenGodEntry {
                position,
                position_label: position.stem_label(locale),
                stem,
                ten_god: god,
                label: god.label(locale),
            }
        })
        .collect()
}

fn day_master(pillars: &PillarSet, locale: Locale) -> DayMaster {
    let stem = pillars.day.stem();
    DayMaster {
        stem,
        stem_label: stem.label(locale),
        element: ElementLabel::new(stem.element(), locale),
        polarity: stem.polarity().label(locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{Gender, Pillar, TenGod};

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn ten_gods_skip_day_and_unknown_hour() {
        let set = PillarSet::new(p("庚午"), p("戊寅"), p("甲子"), None);
        let gods = ten_gods(&set, Locale::En);
        let got: Vec<_> = gods.iter().map(|g| (g.position, g.ten_god)).collect();
        assert_eq!(
            got,
            vec![
                (Position::Year, TenGod::SevenKillings),
                (Position::Month, TenGod::IndirectWealth),
            ]
        );
        assert_eq!(gods[0].position_label, "Year Stem");
    }

    #[test]
    fn day_master_labels() {
        let set = PillarSet::new(p("庚午"), p("戊寅"), p("甲子"), None);
        let dm = day_master(&set, Locale::Ko);
        assert_eq!(dm.element.label, "목");
        assert_eq!(dm.polarity, "양");
    }

    #[test]
    fn empty_luck_list_has_no_current() {
        let req = ChartRequest {
            pillars: PillarSet::new(p("庚午"), p("戊寅"), p("甲子"), None),
            gender: Gender::Male,
            raw_luck_cycles: Vec::new(),
            current_age: 40,
        };
        let chart = analyze(&req, Locale::En);
        assert!(chart.luck_cycles.is_empty());
        assert!(chart.current_luck_cycle.is_none());
    }
}
