//! Four-Pillars chart assembly.
//!
//! This crate provides:
//! - A wire-format input ([`ChartInput`]) with string symbols in any script
//! - Resolution into a typed [`ChartRequest`], failing on the first bad symbol
//! - The orchestrator [`analyze`], which renders a [`SajuChart`] in one locale

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input;

pub use chart::{analyze, analyze_input, ten_gods};
pub use chart_types::{DayMaster, ElementLabel, LuckCycleView, SajuChart, TenGodEntry};
pub use error::ChartError;
pub use input::{ChartInput, ChartRequest, RawLuckCycleInput, RawPillar, RawPillars};
