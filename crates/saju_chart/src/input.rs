//! Wire-format chart input with string symbols, and its typed resolution.
//!
//! Symbols may be written as hanja (甲), hangul (갑) or romanization (Gap).
//! Resolution walks the fields in a fixed order (Year, Month, Day, Hour,
//! gender, luck cycles) and stops at the first invalid one.

use serde::{Deserialize, Serialize};

use saju_base::{
    Branch, DEFAULT_LUCK_CYCLE_COUNT, Gender, LuckDirection, Pillar, PillarSet, RawLuckCycle,
    SajuError, Stem, generate_raw_cycles,
};

use crate::error::ChartError;

/// One pillar as two symbol strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPillar {
    pub stem: String,
    pub branch: String,
}

impl RawPillar {
    pub fn new(stem: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            branch: branch.into(),
        }
    }

    fn resolve(&self, field: &str) -> Result<Pillar, ChartError> {
        let stem: Stem = self
            .stem
            .parse()
            .map_err(|e| ChartError::field(format!("{field}.stem"), e))?;
        let branch: Branch = self
            .branch
            .parse()
            .map_err(|e| ChartError::field(format!("{field}.branch"), e))?;
        Pillar::new(stem, branch).map_err(|e| ChartError::field(field, e))
    }
}

/// The four pillars; `hour` is null or absent when the birth time is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPillars {
    pub year: RawPillar,
    pub month: RawPillar,
    pub day: RawPillar,
    #[serde(default)]
    pub hour: Option<RawPillar>,
}

/// One luck cycle as supplied by the calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLuckCycleInput {
    pub stem: String,
    pub branch: String,
    pub start_age: u32,
}

/// Chart request as it arrives over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub pillars: RawPillars,
    pub gender: String,
    #[serde(default)]
    pub raw_luck_cycles: Vec<RawLuckCycleInput>,
    pub current_age: u32,
    /// Used to generate cycles from the Month pillar when `raw_luck_cycles` is empty.
    #[serde(default)]
    pub luck_start_age: Option<u32>,
    #[serde(default)]
    pub luck_cycle_count: Option<usize>,
}

/// Typed chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub pillars: PillarSet,
    pub gender: Gender,
    pub raw_luck_cycles: Vec<RawLuckCycle>,
    pub current_age: u32,
}

impl ChartInput {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse every symbol, failing on the first invalid one.
    pub fn resolve(&self) -> Result<ChartRequest, ChartError> {
        let year = self.pillars.year.resolve("pillars.year")?;
        let month = self.pillars.month.resolve("pillars.month")?;
        let day = self.pillars.day.resolve("pillars.day")?;
        let hour = self
            .pillars
            .hour
            .as_ref()
            .map(|h| h.resolve("pillars.hour"))
            .transpose()?;
        let gender: Gender = self
            .gender
            .parse()
            .map_err(|e| ChartError::field("gender", e))?;

        let raw_luck_cycles = if !self.raw_luck_cycles.is_empty() {
            self.raw_luck_cycles
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let field = format!("rawLuckCycles[{i}]");
                    RawPillar::new(c.stem.as_str(), c.branch.as_str())
                        .resolve(&field)
                        .map(|pillar| RawLuckCycle {
                            pillar,
                            start_age: c.start_age,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else if let Some(start) = self.luck_start_age {
            let direction = LuckDirection::for_subject(gender, year.stem());
            let count = self.luck_cycle_count.unwrap_or(DEFAULT_LUCK_CYCLE_COUNT);
            tracing::debug!(?direction, start, count, "generating luck cycles from month pillar");
            generate_raw_cycles(month, direction, start, count).map_err(|e| {
                let field = match e {
                    SajuError::LuckCycleCount { .. } => "luckCycleCount",
                    _ => "luckStartAge",
                };
                ChartError::field(field, e)
            })?
        } else {
            Vec::new()
        };

        Ok(ChartRequest {
            pillars: PillarSet::new(year, month, day, hour),
            gender,
            raw_luck_cycles,
            current_age: self.current_age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::MAX_LUCK_CYCLE_COUNT;

    fn input() -> ChartInput {
        ChartInput {
            pillars: RawPillars {
                year: RawPillar::new("庚", "午"),
                month: RawPillar::new("戊", "寅"),
                day: RawPillar::new("甲", "子"),
                hour: None,
            },
            gender: "male".into(),
            raw_luck_cycles: Vec::new(),
            current_age: 30,
            luck_start_age: None,
            luck_cycle_count: None,
        }
    }

    #[test]
    fn mixed_scripts_resolve() {
        let mut i = input();
        i.pillars.month = RawPillar::new("mu", "인");
        let req = i.resolve().unwrap();
        assert_eq!(req.pillars.month, "戊寅".parse().unwrap());
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let mut i = input();
        i.pillars.month = RawPillar::new("X", "寅");
        i.pillars.day = RawPillar::new("甲", "Y");
        let err = i.resolve().unwrap_err();
        assert!(err.to_string().starts_with("pillars.month.stem"), "{err}");
        assert_eq!(
            err.symbol_error(),
            Some(&SajuError::InvalidStem("X".into()))
        );
    }

    #[test]
    fn polarity_mismatch_names_pillar() {
        let mut i = input();
        i.pillars.hour = Some(RawPillar::new("甲", "丑"));
        let err = i.resolve().unwrap_err();
        assert!(matches!(
            err.symbol_error(),
            Some(SajuError::MismatchedPolarity { .. })
        ));
        assert!(err.to_string().starts_with("pillars.hour:"), "{err}");
    }

    #[test]
    fn invalid_gender() {
        let mut i = input();
        i.gender = "other".into();
        assert!(matches!(
            i.resolve().unwrap_err().symbol_error(),
            Some(SajuError::InvalidGender(_))
        ));
    }

    #[test]
    fn generates_cycles_from_start_age() {
        let mut i = input();
        i.luck_start_age = Some(8);
        i.luck_cycle_count = Some(3);
        let req = i.resolve().unwrap();
        // 庚 is yang, male: forward from 戊寅
        let starts: Vec<_> = req.raw_luck_cycles.iter().map(|c| c.start_age).collect();
        assert_eq!(starts, vec![8, 18, 28]);
        assert_eq!(req.raw_luck_cycles[0].pillar, "己卯".parse().unwrap());
    }

    #[test]
    fn oversized_cycle_count_is_rejected() {
        let mut i = input();
        i.luck_start_age = Some(5);
        i.luck_cycle_count = Some(500_000_000);
        let err = i.resolve().unwrap_err();
        assert!(err.to_string().starts_with("luckCycleCount:"), "{err}");
        assert_eq!(
            err.symbol_error(),
            Some(&SajuError::LuckCycleCount {
                count: 500_000_000,
                max: MAX_LUCK_CYCLE_COUNT
            })
        );
    }

    #[test]
    fn overflowing_start_age_is_rejected() {
        let mut i = input();
        i.luck_start_age = Some(4_294_967_290);
        let err = i.resolve().unwrap_err();
        assert!(err.to_string().starts_with("luckStartAge:"), "{err}");
        assert!(matches!(
            err.symbol_error(),
            Some(SajuError::LuckAgeOverflow { .. })
        ));
    }

    #[test]
    fn explicit_cycles_take_precedence() {
        let mut i = input();
        i.luck_start_age = Some(8);
        i.raw_luck_cycles = vec![RawLuckCycleInput {
            stem: "丁".into(),
            branch: "丑".into(),
            start_age: 2,
        }];
        let req = i.resolve().unwrap();
        assert_eq!(req.raw_luck_cycles.len(), 1);
        assert_eq!(req.raw_luck_cycles[0].start_age, 2);
    }
}
