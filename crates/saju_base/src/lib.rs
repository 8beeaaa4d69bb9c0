//! Four-Pillars (Saju) symbol tables and rule evaluation.
//!
//! This crate provides:
//! - Closed enums for the 10 stems, 12 branches and 5 elements
//! - Sexagenary pillars and the four-pillar set of a subject
//! - Element classification with a documented dominant-element tie-break
//! - Special-star (shinsal) detection over four rule families
//! - Day-pillar stem/branch relations
//! - Luck-cycle indexing with Ten-God governing forces
//!
//! Every rule is a pure function over immutable inputs. Detectors return
//! locale-free hits; text comes from parallel `label(locale)` tables.

pub mod branch;
pub mod element;
pub mod error;
pub mod locale;
pub mod luck;
pub mod pillar;
pub mod relation;
pub mod shinsal;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{
    ALL_ELEMENTS, Element, ElementBalance, ElementTally, Polarity, PolarityBalance, classify,
    polarity_balance,
};
pub use error::SajuError;
pub use locale::{ALL_LOCALES, Locale};
pub use luck::{
    DEFAULT_LUCK_CYCLE_COUNT, LUCK_CYCLE_YEARS, LuckCycle, LuckDirection, LuckTimeline,
    MAX_LUCK_CYCLE_COUNT, RawLuckCycle, generate_raw_cycles, index_luck_cycles,
};
pub use pillar::{ALL_POSITIONS, Gender, Pillar, PillarSet, Position, SEXAGENARY_LEN};
pub use relation::{
    BranchRelation, PillarPart, Relation, RelationHit, RelationRule, StemRelation,
    branch_relation, detect_relations, stem_relation,
};
pub use shinsal::{
    MarkerTag, Shinsal, ShinsalCategory, ShinsalHit, ShinsalMarker, TriadBasis, detect_markers,
    detect_shinsal, noble_targets, void_branches,
};
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
