//! Special-star (shinsal) detection.
//!
//! Four independent rule families contribute markers:
//!
//! 1. Triad stars, keyed once by the Year branch and once by the Day branch.
//! 2. Fixed Day-pillar stars (Strong Energy, Leadership).
//! 3. Heavenly Noble (cheoneul gwiin) targets selected by the Day stem.
//! 4. Void branches (gongmang) selected by the Day pillar's decade.
//!
//! Rules emit locale-free [`ShinsalHit`]s. The union is deduplicated by the
//! hit itself, which determines the rendered (name, description) pair one to
//! one, so two passes that agree collapse while same-named markers with
//! different descriptions survive. First-seen order is preserved.

use std::collections::HashSet;

use serde::Serialize;

use crate::branch::Branch;
use crate::locale::Locale;
use crate::pillar::{Pillar, PillarSet, Position};
use crate::stem::Stem;

/// The named stars this module can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Shinsal {
    /// Yeokma: movement and travel.
    Travel,
    /// Dohwa: charm and popularity.
    Charm,
    /// Hwagae: art, scholarship, solitude.
    Art,
    /// Ganyeojidong: stem and branch of the Day pillar share an element.
    StrongEnergy,
    /// Goegang: 庚辰 庚戌 壬辰 壬戌 Day pillar.
    Leadership,
    /// Cheoneul gwiin.
    Noble,
    /// Gongmang.
    Void,
}

/// Rule family that produced a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShinsalCategory {
    Triad,
    DayPillar,
    Noble,
    Void,
}

impl ShinsalCategory {
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Triad => locale.pick("삼합 신살", "Triad Star"),
            Self::DayPillar => locale.pick("일주 신살", "Day Pillar Star"),
            Self::Noble => locale.pick("귀인", "Noble Star"),
            Self::Void => locale.pick("공망", "Void"),
        }
    }
}

/// Which branch keyed a triad-star pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TriadBasis {
    Year,
    Day,
}

impl TriadBasis {
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Year => locale.pick("년지 기준", "Year Base"),
            Self::Day => locale.pick("일지 기준", "Day Base"),
        }
    }
}

/// Suffix attached to a marker title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerTag {
    Basis(TriadBasis),
    Position(Position),
}

impl MarkerTag {
    pub const fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::Basis(b) => b.label(locale),
            Self::Position(p) => p.label(locale),
        }
    }
}

/// One rule firing, before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShinsalHit {
    pub star: Shinsal,
    /// Title suffix: triad keying or noble position.
    pub tag: Option<MarkerTag>,
    /// Position that selects a position-keyed description (noble, void).
    pub position: Option<Position>,
}

impl ShinsalHit {
    pub const fn category(&self) -> ShinsalCategory {
        match self.star {
            Shinsal::Travel | Shinsal::Charm | Shinsal::Art => ShinsalCategory::Triad,
            Shinsal::StrongEnergy | Shinsal::Leadership => ShinsalCategory::DayPillar,
            Shinsal::Noble => ShinsalCategory::Noble,
            Shinsal::Void => ShinsalCategory::Void,
        }
    }

    /// Localized title, e.g. "Travel Star (Year Base)".
    pub fn name(&self, locale: Locale) -> String {
        let base = star_name(self.star, locale);
        match self.tag {
            Some(tag) => format!("{base} ({})", tag.label(locale)),
            None => base.to_string(),
        }
    }

    /// Localized description.
    pub const fn description(&self, locale: Locale) -> &'static str {
        match (self.star, self.position) {
            (Shinsal::Noble, Some(pos)) => noble_description(pos, locale),
            (Shinsal::Void, Some(pos)) => void_description(pos, locale),
            (star, _) => star_description(star, locale),
        }
    }
}

/// Rendered marker handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShinsalMarker {
    pub name: String,
    pub category: ShinsalCategory,
    pub description: String,
}

impl ShinsalMarker {
    pub fn render(hit: &ShinsalHit, locale: Locale) -> Self {
        Self {
            name: hit.name(locale),
            category: hit.category(),
            description: hit.description(locale).to_string(),
        }
    }
}

const fn star_name(star: Shinsal, locale: Locale) -> &'static str {
    match star {
        Shinsal::Travel => locale.pick("역마살", "Travel Star"),
        Shinsal::Charm => locale.pick("도화살", "Charm Star"),
        Shinsal::Art => locale.pick("화개살", "Art Star"),
        Shinsal::StrongEnergy => locale.pick("간여지동", "Strong Energy"),
        Shinsal::Leadership => locale.pick("괴강살", "Leadership"),
        Shinsal::Noble => locale.pick("천을귀인", "Heavenly Noble"),
        Shinsal::Void => locale.pick("공망", "Void"),
    }
}

const fn star_description(star: Shinsal, locale: Locale) -> &'static str {
    match star {
        Shinsal::Travel => locale.pick(
            "이동과 변화가 많고, 여행·이사·해외와 인연이 깊습니다.",
            "Frequent movement and change; strong ties to travel, relocation and abroad.",
        ),
        Shinsal::Charm => locale.pick(
            "사람을 끄는 매력과 인기가 있어 대인관계가 화려합니다.",
            "Natural charm and popularity draw people in.",
        ),
        Shinsal::Art => locale.pick(
            "예술·학문·종교적 감수성이 깊고, 홀로 몰입하는 힘이 있습니다.",
            "Deep artistic, scholarly or spiritual sensibility and the power of solitary focus.",
        ),
        Shinsal::StrongEnergy => locale.pick(
            "일간과 일지가 같은 기운으로, 주관과 자존심이 매우 강합니다.",
            "Day stem and branch share one element: a firm will and strong pride.",
        ),
        Shinsal::Leadership => locale.pick(
            "강인한 기개와 통솔력으로 큰 조직을 이끄는 힘이 있습니다.",
            "Fierce spirit and command, able to lead large organizations.",
        ),
        Shinsal::Noble => locale.pick(
            "어려울 때 귀인의 도움을 받는 길한 기운입니다.",
            "An auspicious sign of help arriving in hard times.",
        ),
        Shinsal::Void => locale.pick(
            "채워지지 않는 빈자리가 있어 집착을 내려놓는 지혜가 필요합니다.",
            "An empty seat that will not fill; wisdom lies in letting go.",
        ),
    }
}

const fn noble_description(position: Position, locale: Locale) -> &'static str {
    match position {
        Position::Year => locale.pick(
            "조상과 윗사람의 음덕으로 어린 시절부터 도움을 받습니다.",
            "Blessings from ancestors and elders support you from childhood.",
        ),
        Position::Month => locale.pick(
            "사회와 직장에서 좋은 상사와 동료의 도움을 받습니다.",
            "Good superiors and colleagues help you in society and at work.",
        ),
        Position::Day => locale.pick(
            "배우자가 귀인이 되어 삶을 든든히 받쳐 줍니다.",
            "Your partner becomes the noble helper who steadies your life.",
        ),
        Position::Hour => locale.pick(
            "자녀와 말년의 복이 있어 노후가 평안합니다.",
            "Fortune through children brings a peaceful later life.",
        ),
    }
}

const fn void_description(position: Position, locale: Locale) -> &'static str {
    match position {
        Position::Year => locale.pick(
            "년주 공망: 조상이나 고향과의 인연이 옅을 수 있습니다.",
            "Void in the Year pillar: ties to ancestors or hometown may be thin.",
        ),
        Position::Month => locale.pick(
            "월주 공망: 형제나 사회적 기반이 약해 자수성가하는 경향이 있습니다.",
            "Void in the Month pillar: weak family or social footing, a self-made path.",
        ),
        Position::Day => locale.pick(
            "일주 공망: 마음 한편의 공허함을 다스릴 필요가 있습니다.",
            "Void in the Day pillar: an inner emptiness asks to be tended.",
        ),
        Position::Hour => locale.pick(
            "시주 공망: 자녀나 말년의 계획이 뜻대로 되지 않을 수 있습니다.",
            "Void in the Hour pillar: plans for children or later years may go astray.",
        ),
    }
}

// ---------------------------------------------------------------------------
// 1. Triad stars
// ---------------------------------------------------------------------------

/// One of the four three-branch harmony groups and its star branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triad {
    pub members: [Branch; 3],
    pub travel: Branch,
    pub charm: Branch,
    pub art: Branch,
}

const WATER_TRIAD: Triad = Triad {
    members: [Branch::Sin, Branch::Ja, Branch::Jin],
    travel: Branch::In,
    charm: Branch::Yu,
    art: Branch::Jin,
};

const FIRE_TRIAD: Triad = Triad {
    members: [Branch::In, Branch::O, Branch::Sul],
    travel: Branch::Sin,
    charm: Branch::Myo,
    art: Branch::Sul,
};

const METAL_TRIAD: Triad = Triad {
    members: [Branch::Sa, Branch::Yu, Branch::Chuk],
    travel: Branch::Hae,
    charm: Branch::O,
    art: Branch::Chuk,
};

const WOOD_TRIAD: Triad = Triad {
    members: [Branch::Hae, Branch::Myo, Branch::Mi],
    travel: Branch::Sa,
    charm: Branch::Ja,
    art: Branch::Mi,
};

/// Triad a branch belongs to. Every branch is in exactly one.
pub const fn triad_of(branch: Branch) -> Triad {
    match branch {
        Branch::Sin | Branch::Ja | Branch::Jin => WATER_TRIAD,
        Branch::In | Branch::O | Branch::Sul => FIRE_TRIAD,
        Branch::Sa | Branch::Yu | Branch::Chuk => METAL_TRIAD,
        Branch::Hae | Branch::Myo | Branch::Mi => WOOD_TRIAD,
    }
}

/// Triad stars for the triad of `key(pillars)`, scanned over every present branch.
pub fn triad_stars<F>(pillars: &PillarSet, basis: TriadBasis, key: F) -> Vec<ShinsalHit>
where
    F: Fn(&PillarSet) -> Branch,
{
    let triad = triad_of(key(pillars));
    let tag = Some(MarkerTag::Basis(basis));
    let mut hits = Vec::new();
    for (_, pillar) in pillars.present() {
        let star = if pillar.branch() == triad.travel {
            Shinsal::Travel
        } else if pillar.branch() == triad.charm {
            Shinsal::Charm
        } else if pillar.branch() == triad.art {
            Shinsal::Art
        } else {
            continue;
        };
        hits.push(ShinsalHit {
            star,
            tag,
            position: None,
        });
    }
    hits
}

// ---------------------------------------------------------------------------
// 2. Fixed Day-pillar stars
// ---------------------------------------------------------------------------

/// Table entry; a mixed-polarity pair fails const evaluation.
const fn p(stem: Stem, branch: Branch) -> Pillar {
    match Pillar::checked(stem, branch) {
        Some(pillar) => pillar,
        None => panic!("stem and branch polarity differ"),
    }
}

/// Day pillars whose stem and branch share an element.
pub const STRONG_ENERGY_PILLARS: [Pillar; 12] = [
    p(Stem::Gap, Branch::In),
    p(Stem::Eul, Branch::Myo),
    p(Stem::Byeong, Branch::O),
    p(Stem::Jeong, Branch::Sa),
    p(Stem::Mu, Branch::Jin),
    p(Stem::Mu, Branch::Sul),
    p(Stem::Gi, Branch::Chuk),
    p(Stem::Gi, Branch::Mi),
    p(Stem::Gyeong, Branch::Sin),
    p(Stem::Sin, Branch::Yu),
    p(Stem::Im, Branch::Ja),
    p(Stem::Gye, Branch::Hae),
];

/// Goegang Day pillars.
pub const LEADERSHIP_PILLARS: [Pillar; 4] = [
    p(Stem::Gyeong, Branch::Jin),
    p(Stem::Gyeong, Branch::Sul),
    p(Stem::Im, Branch::Jin),
    p(Stem::Im, Branch::Sul),
];

/// Strong Energy and Leadership checks on the Day pillar; both may fire.
pub fn day_pillar_stars(day: Pillar) -> Vec<ShinsalHit> {
    let mut hits = Vec::new();
    if STRONG_ENERGY_PILLARS.contains(&day) {
        hits.push(ShinsalHit {
            star: Shinsal::StrongEnergy,
            tag: None,
            position: None,
        });
    }
    if LEADERSHIP_PILLARS.contains(&day) {
        hits.push(ShinsalHit {
            star: Shinsal::Leadership,
            tag: None,
            position: None,
        });
    }
    hits
}

// ---------------------------------------------------------------------------
// 3. Heavenly Noble
// ---------------------------------------------------------------------------

/// Noble target branches for a Day stem.
pub const fn noble_targets(day_stem: Stem) -> &'static [Branch] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => &[Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => &[Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => &[Branch::Hae, Branch::Yu],
        Stem::Sin => &[Branch::In, Branch::O],
        Stem::Im | Stem::Gye => &[Branch::Myo, Branch::Sa],
    }
}

/// One Noble marker per present position whose branch is a target.
pub fn noble_stars(pillars: &PillarSet, targets: &[Branch]) -> Vec<ShinsalHit> {
    pillars
        .present()
        .filter(|(_, pillar)| targets.contains(&pillar.branch()))
        .map(|(pos, _)| ShinsalHit {
            star: Shinsal::Noble,
            tag: Some(MarkerTag::Position(pos)),
            position: Some(pos),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 4. Void branches
// ---------------------------------------------------------------------------

/// Void pair per decade of the cycle: 甲子旬, 甲戌旬, 甲申旬, 甲午旬, 甲辰旬, 甲寅旬.
const VOID_BY_DECADE: [[Branch; 2]; 6] = [
    [Branch::Sul, Branch::Hae],
    [Branch::Sin, Branch::Yu],
    [Branch::O, Branch::Mi],
    [Branch::Jin, Branch::Sa],
    [Branch::In, Branch::Myo],
    [Branch::Ja, Branch::Chuk],
];

/// The two void branches of a Day pillar.
pub const fn void_branches(day: Pillar) -> [Branch; 2] {
    VOID_BY_DECADE[(day.sexagenary_index() / 10) as usize]
}

/// One Void marker per present non-Day position holding a void branch.
pub fn void_stars(pillars: &PillarSet) -> Vec<ShinsalHit> {
    let void = void_branches(pillars.day);
    pillars
        .present()
        .filter(|&(pos, pillar)| pos != Position::Day && void.contains(&pillar.branch()))
        .map(|(pos, _)| ShinsalHit {
            star: Shinsal::Void,
            tag: None,
            position: Some(pos),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Union
// ---------------------------------------------------------------------------

/// Run all four rule families and deduplicate, keeping first-seen order.
pub fn detect_shinsal(pillars: &PillarSet) -> Vec<ShinsalHit> {
    let mut hits = triad_stars(pillars, TriadBasis::Year, |p| p.year.branch());
    hits.extend(triad_stars(pillars, TriadBasis::Day, |p| p.day.branch()));
    hits.extend(day_pillar_stars(pillars.day));
    hits.extend(noble_stars(pillars, noble_targets(pillars.day.stem())));
    hits.extend(void_stars(pillars));

    let raw = hits.len();
    let mut seen = HashSet::with_capacity(raw);
    hits.retain(|hit| seen.insert(*hit));
    tracing::debug!(raw, kept = hits.len(), "shinsal detection");
    hits
}

/// [`detect_shinsal`] rendered in one locale.
pub fn detect_markers(pillars: &PillarSet, locale: Locale) -> Vec<ShinsalMarker> {
    detect_shinsal(pillars)
        .iter()
        .map(|hit| ShinsalMarker::render(hit, locale))
        .collect()
}
