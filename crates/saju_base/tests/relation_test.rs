//! Integration tests for Day-pillar relation detection.

use saju_base::{
    BranchRelation, Element, Locale, PillarPart, PillarSet, Position, Relation, RelationRule,
    StemRelation, detect_relations,
};

fn p(s: &str) -> saju_base::Pillar {
    s.parse().unwrap()
}

#[test]
fn full_chart_order_and_rules() {
    // Day 甲子 against Month 己丑, Hour 庚午, Year 乙未
    let set = PillarSet::new(p("乙未"), p("己丑"), p("甲子"), Some(p("庚午")));
    let hits = detect_relations(&set);
    let got: Vec<_> = hits.iter().map(|h| (h.rule, h.position, h.part)).collect();
    assert_eq!(
        got,
        vec![
            (
                RelationRule::Stem(StemRelation::Combination(Element::Earth)),
                Position::Month,
                PillarPart::Stem
            ),
            (
                RelationRule::Branch(BranchRelation::Combination(Element::Earth)),
                Position::Month,
                PillarPart::Branch
            ),
            (
                RelationRule::Stem(StemRelation::Clash),
                Position::Hour,
                PillarPart::Stem
            ),
            (
                RelationRule::Branch(BranchRelation::Clash),
                Position::Hour,
                PillarPart::Branch
            ),
            (
                RelationRule::Branch(BranchRelation::Harm),
                Position::Year,
                PillarPart::Branch
            ),
        ]
    );
}

#[test]
fn unknown_hour_is_skipped() {
    let set = PillarSet::new(p("乙未"), p("己丑"), p("甲子"), None);
    let hits = detect_relations(&set);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.position != Position::Hour));
}

#[test]
fn no_relation_yields_empty() {
    // 甲子 vs 甲子: identical symbols match no rule
    let set = PillarSet::new(p("甲子"), p("甲子"), p("甲子"), Some(p("甲子")));
    assert!(detect_relations(&set).is_empty());
}

#[test]
fn rendered_labels() {
    let set = PillarSet::new(p("甲子"), p("己丑"), p("甲子"), None);
    let hits = detect_relations(&set);
    let en: Vec<_> = hits.iter().map(|h| Relation::render(h, Locale::En)).collect();
    assert_eq!(en[0].rule_label, "Stem Combination (Earth)");
    assert_eq!(en[0].counterpart_pillar_label, "Month Stem (Society)");
    assert_eq!(en[1].rule_label, "Branch Combination (Earth)");
    assert_eq!(en[1].counterpart_pillar_label, "Month Branch (Society)");

    let ko = Relation::render(&hits[1], Locale::Ko);
    assert_eq!(ko.rule_label, "육합 (토)");
    assert_eq!(ko.counterpart_pillar_label, "월지 (사회)");
}
