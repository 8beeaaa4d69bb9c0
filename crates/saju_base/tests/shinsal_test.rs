//! Integration tests for special-star detection over whole pillar sets.

use saju_base::shinsal::{noble_stars, void_stars};
use saju_base::{
    Locale, Pillar, PillarSet, SEXAGENARY_LEN, Shinsal, ShinsalCategory, detect_markers,
    detect_shinsal,
};

fn p(s: &str) -> Pillar {
    s.parse().unwrap()
}

fn names(set: &PillarSet) -> Vec<String> {
    detect_markers(set, Locale::En)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

#[test]
fn noble_on_year_branch() {
    // 甲 day master targets 丑/未; only the Year branch carries one
    let set = PillarSet::new(p("乙丑"), p("丙寅"), p("甲子"), None);
    let nobles: Vec<_> = detect_markers(&set, Locale::En)
        .into_iter()
        .filter(|m| m.category == ShinsalCategory::Noble)
        .collect();
    assert_eq!(nobles.len(), 1);
    assert_eq!(nobles[0].name, "Heavenly Noble (Year)");
    assert_eq!(
        nobles[0].description,
        "Blessings from ancestors and elders support you from childhood."
    );
}

#[test]
fn triad_passes_keyed_by_year_and_day() {
    let set = PillarSet::new(p("乙丑"), p("丙寅"), p("甲子"), None);
    let got = names(&set);
    // Year 丑 -> 巳酉丑 triad, art branch 丑
    assert!(got.contains(&"Art Star (Year Base)".to_string()), "{got:?}");
    // Day 子 -> 申子辰 triad, travel branch 寅
    assert!(got.contains(&"Travel Star (Day Base)".to_string()), "{got:?}");
    assert!(!got.iter().any(|n| n.starts_with("Charm Star")), "{got:?}");
}

#[test]
fn year_keyed_travel_and_day_keyed_charm() {
    // Year 子 -> 申子辰, travel 寅 in the Month; Day 午 -> 寅午戌, charm 卯 in the Hour
    let set = PillarSet::new(p("甲子"), p("丙寅"), p("丙午"), Some(p("丁卯")));
    let got = names(&set);
    assert!(got.contains(&"Travel Star (Year Base)".to_string()), "{got:?}");
    assert!(got.contains(&"Charm Star (Day Base)".to_string()), "{got:?}");

    let ko: Vec<_> = detect_markers(&set, Locale::Ko)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert!(ko.contains(&"역마살 (년지 기준)".to_string()), "{ko:?}");
    assert!(ko.contains(&"도화살 (일지 기준)".to_string()), "{ko:?}");
}

#[test]
fn same_triad_keys_emit_both_bases() {
    // 子 and 辰 share the 申子辰 triad, so each pass fires the same stars
    let set = PillarSet::new(p("甲子"), p("丙寅"), p("壬辰"), None);
    let got = names(&set);
    for name in [
        "Travel Star (Year Base)",
        "Travel Star (Day Base)",
        "Art Star (Year Base)",
        "Art Star (Day Base)",
        "Leadership",
    ] {
        assert!(got.contains(&name.to_string()), "missing {name}: {got:?}");
    }
}

#[test]
fn same_branch_at_two_positions_collapses() {
    let set = PillarSet::new(p("丙寅"), p("戊辰"), p("甲子"), Some(p("丙寅")));
    let travel = detect_shinsal(&set)
        .into_iter()
        .filter(|h| h.star == Shinsal::Travel)
        .count();
    assert_eq!(travel, 1);
}

#[test]
fn markers_are_unique_by_name_and_description() {
    for i in 0..SEXAGENARY_LEN {
        let day = Pillar::from_sexagenary(i);
        let set = PillarSet::new(day.offset(7), day.offset(31), day, Some(day.offset(-13)));
        for locale in saju_base::ALL_LOCALES {
            let markers = detect_markers(&set, locale);
            for (k, a) in markers.iter().enumerate() {
                for b in &markers[k + 1..] {
                    assert!(
                        a.name != b.name || a.description != b.description,
                        "duplicate {} for day {day}",
                        a.name
                    );
                }
            }
        }
    }
}

#[test]
fn day_position_never_void() {
    for i in 0..SEXAGENARY_LEN {
        let day = Pillar::from_sexagenary(i);
        let set = PillarSet::new(day, day, day, Some(day));
        assert!(void_stars(&set).is_empty(), "day {day}");
    }
}

#[test]
fn void_branch_in_year_is_marked() {
    for i in 0..SEXAGENARY_LEN {
        let day = Pillar::from_sexagenary(i);
        let [first, _] = saju_base::void_branches(day);
        let year = (0..SEXAGENARY_LEN)
            .map(Pillar::from_sexagenary)
            .find(|c| c.branch() == first)
            .unwrap();
        let set = PillarSet::new(year, day, day, None);
        let voids = void_stars(&set);
        assert_eq!(voids.len(), 1, "day {day} year {year}");
        assert_eq!(voids[0].position, Some(saju_base::Position::Year));
    }
}

#[test]
fn empty_noble_targets_yield_nothing() {
    let set = PillarSet::new(p("乙丑"), p("丁未"), p("甲子"), Some(p("癸丑")));
    assert!(noble_stars(&set, &[]).is_empty());
    assert_eq!(
        noble_stars(&set, saju_base::noble_targets(set.day.stem())).len(),
        3
    );
}

#[test]
fn locale_changes_text_only() {
    let set = PillarSet::new(p("甲子"), p("丙寅"), p("壬辰"), Some(p("辛亥")));
    let ko = detect_markers(&set, Locale::Ko);
    let en = detect_markers(&set, Locale::En);
    assert_eq!(ko.len(), en.len());
    for (k, e) in ko.iter().zip(&en) {
        assert_eq!(k.category, e.category);
    }
}
