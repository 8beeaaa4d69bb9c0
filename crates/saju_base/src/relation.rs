//! Day-pillar relations: stem combinations/clashes and branch
//! combinations/clashes/harms against every other pillar.
//!
//! Each rule table stores an unordered pair once. Lookups try both orders,
//! so callers never need to know which order a pair was written in.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::locale::Locale;
use crate::pillar::{PillarSet, Position};
use crate::stem::Stem;

/// Stem-pair rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StemRelation {
    /// Cheongan-hap, transforming into the given element.
    Combination(Element),
    /// Cheongan-chung.
    Clash,
}

/// Branch-pair rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchRelation {
    /// Yukhap, transforming into the given element.
    Combination(Element),
    /// Yukchung.
    Clash,
    /// Yukhae.
    Harm,
}

/// Either kind of rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationRule {
    Stem(StemRelation),
    Branch(BranchRelation),
}

impl RelationRule {
    /// Localized rule label, e.g. "Stem Combination (Earth)".
    pub fn label(self, locale: Locale) -> String {
        match self {
            Self::Stem(StemRelation::Combination(e)) => {
                format!("{} ({})", locale.pick("천간합", "Stem Combination"), e.label(locale))
            }
            Self::Stem(StemRelation::Clash) => locale.pick("천간충", "Stem Clash").to_string(),
            Self::Branch(BranchRelation::Combination(e)) => {
                format!("{} ({})", locale.pick("육합", "Branch Combination"), e.label(locale))
            }
            Self::Branch(BranchRelation::Clash) => locale.pick("육충", "Branch Clash").to_string(),
            Self::Branch(BranchRelation::Harm) => locale.pick("육해", "Branch Harm").to_string(),
        }
    }
}

/// Which half of the counterpart pillar a relation involves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PillarPart {
    Stem,
    Branch,
}

/// One rule firing between the Day pillar and another pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RelationHit {
    pub rule: RelationRule,
    pub position: Position,
    pub part: PillarPart,
}

impl RelationHit {
    /// "Month Branch (Society)" / "월지 (사회)".
    pub fn counterpart_label(&self, locale: Locale) -> String {
        let part = match self.part {
            PillarPart::Stem => self.position.stem_label(locale),
            PillarPart::Branch => self.position.branch_label(locale),
        };
        format!("{part} ({})", self.position.domain(locale))
    }
}

/// Rendered relation handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub rule_label: String,
    pub counterpart_pillar_label: String,
}

impl Relation {
    pub fn render(hit: &RelationHit, locale: Locale) -> Self {
        Self {
            rule_label: hit.rule.label(locale),
            counterpart_pillar_label: hit.counterpart_label(locale),
        }
    }
}

const STEM_RULES: [(Stem, Stem, StemRelation); 9] = [
    (Stem::Gap, Stem::Gi, StemRelation::Combination(Element::Earth)),
    (Stem::Eul, Stem::Gyeong, StemRelation::Combination(Element::Metal)),
    (Stem::Byeong, Stem::Sin, StemRelation::Combination(Element::Water)),
    (Stem::Jeong, Stem::Im, StemRelation::Combination(Element::Wood)),
    (Stem::Mu, Stem::Gye, StemRelation::Combination(Element::Fire)),
    (Stem::Gap, Stem::Gyeong, StemRelation::Clash),
    (Stem::Eul, Stem::Sin, StemRelation::Clash),
    (Stem::Byeong, Stem::Im, StemRelation::Clash),
    (Stem::Jeong, Stem::Gye, StemRelation::Clash),
];

const BRANCH_RULES: [(Branch, Branch, BranchRelation); 18] = [
    (Branch::Ja, Branch::Chuk, BranchRelation::Combination(Element::Earth)),
    (Branch::In, Branch::Hae, BranchRelation::Combination(Element::Wood)),
    (Branch::Myo, Branch::Sul, BranchRelation::Combination(Element::Fire)),
    (Branch::Jin, Branch::Yu, BranchRelation::Combination(Element::Metal)),
    (Branch::Sa, Branch::Sin, BranchRelation::Combination(Element::Water)),
    (Branch::O, Branch::Mi, BranchRelation::Combination(Element::Fire)),
    (Branch::Ja, Branch::O, BranchRelation::Clash),
    (Branch::Chuk, Branch::Mi, BranchRelation::Clash),
    (Branch::In, Branch::Sin, BranchRelation::Clash),
    (Branch::Myo, Branch::Yu, BranchRelation::Clash),
    (Branch::Jin, Branch::Sul, BranchRelation::Clash),
    (Branch::Sa, Branch::Hae, BranchRelation::Clash),
    (Branch::Ja, Branch::Mi, BranchRelation::Harm),
    (Branch::Chuk, Branch::O, BranchRelation::Harm),
    (Branch::In, Branch::Sa, BranchRelation::Harm),
    (Branch::Myo, Branch::Jin, BranchRelation::Harm),
    (Branch::Sin, Branch::Hae, BranchRelation::Harm),
    (Branch::Yu, Branch::Sul, BranchRelation::Harm),
];

/// Find the rule for an unordered pair in a table that stores each pair once.
fn lookup_symmetric<K: Copy + PartialEq, R: Copy>(table: &[(K, K, R)], a: K, b: K) -> Option<R> {
    table
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, rule)| rule)
}

/// Rule between two stems, in either order.
pub fn stem_relation(a: Stem, b: Stem) -> Option<StemRelation> {
    lookup_symmetric(&STEM_RULES, a, b)
}

/// Rule between two branches, in either order.
pub fn branch_relation(a: Branch, b: Branch) -> Option<BranchRelation> {
    lookup_symmetric(&BRANCH_RULES, a, b)
}

/// Counterpart order for Day-pillar checks.
const COUNTERPARTS: [Position; 3] = [Position::Month, Position::Hour, Position::Year];

/// Check the Day stem and Day branch against each other present pillar.
///
/// At most 6 hits (3 pillars x stem/branch); the checks are independent and
/// never deduplicated.
pub fn detect_relations(pillars: &PillarSet) -> Vec<RelationHit> {
    let day = pillars.day;
    let mut hits = Vec::with_capacity(6);
    for position in COUNTERPARTS {
        let Some(other) = pillars.get(position) else {
            continue;
        };
        if let Some(rule) = stem_relation(day.stem(), other.stem()) {
            hits.push(RelationHit {
                rule: RelationRule::Stem(rule),
                position,
                part: PillarPart::Stem,
            });
        }
        if let Some(rule) = branch_relation(day.branch(), other.branch()) {
            hits.push(RelationHit {
                rule: RelationRule::Branch(rule),
                position,
                part: PillarPart::Branch,
            });
        }
    }
    tracing::debug!(count = hits.len(), "relation detection");
    hits
}
