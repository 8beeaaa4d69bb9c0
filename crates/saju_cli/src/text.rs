//! Plain-text chart rendering.

use std::fmt::{Display, Formatter, Result};

use saju_base::Locale;
use saju_chart::{LuckCycleView, SajuChart};

/// Display adapter printing a chart as labelled sections.
pub struct ChartText<'a>(pub &'a SajuChart);

impl Display for ChartText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let chart = self.0;
        let l = chart.locale;

        let dm = &chart.day_master;
        writeln!(
            f,
            "{}: {} {} ({}, {})",
            l.pick("일간", "Day Master"),
            dm.stem,
            dm.stem_label,
            dm.element.label,
            dm.polarity
        )?;
        if !chart.time_known {
            writeln!(f, "{}", l.pick("(시주 미상)", "(birth hour unknown)"))?;
        }

        write!(f, "\n{}:", l.pick("오행 분포", "Element Tally"))?;
        for (element, count) in chart.element_tally.iter() {
            write!(f, " {} {count}", element.label(l))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{}: {}",
            l.pick("주도 오행", "Dominant Element"),
            chart.dominant_element.label
        )?;
        writeln!(
            f,
            "{}: {} {}, {} {}",
            l.pick("음양", "Polarity"),
            l.pick("양", "Yang"),
            chart.polarity.yang,
            l.pick("음", "Yin"),
            chart.polarity.yin
        )?;

        section(f, l.pick("십성", "Ten Gods"), chart.ten_gods.is_empty(), l)?;
        for g in &chart.ten_gods {
            writeln!(f, "  {} {}: {}", g.position_label, g.stem, g.label)?;
        }

        section(f, l.pick("신살", "Special Stars"), chart.shinsal_markers.is_empty(), l)?;
        for m in &chart.shinsal_markers {
            writeln!(f, "  {}: {}", m.name, m.description)?;
        }

        section(f, l.pick("합충해", "Relations"), chart.relations.is_empty(), l)?;
        for r in &chart.relations {
            writeln!(f, "  {} - {}", r.rule_label, r.counterpart_pillar_label)?;
        }

        section(f, l.pick("대운", "Luck Cycles"), chart.luck_cycles.is_empty(), l)?;
        for c in &chart.luck_cycles {
            cycle_line(f, c)?;
        }
        if let Some(c) = &chart.current_luck_cycle {
            writeln!(
                f,
                "\n{}: {}",
                l.pick("현재 대운", "Current Luck Cycle"),
                c.governing_force_description
            )?;
        }
        Ok(())
    }
}

fn section(f: &mut Formatter<'_>, title: &str, empty: bool, l: Locale) -> Result {
    writeln!(f, "\n{title}")?;
    if empty {
        writeln!(f, "  {}", l.pick("없음", "none"))?;
    }
    Ok(())
}

fn cycle_line(f: &mut Formatter<'_>, c: &LuckCycleView) -> Result {
    let end = c.end_age.map_or_else(|| "..".to_string(), |e| e.to_string());
    writeln!(
        f,
        "{} {:>3}-{:<3} {} {} ({}/{}) {}",
        if c.is_current { '*' } else { ' ' },
        c.start_age,
        end,
        c.pillar,
        c.pillar_label,
        c.stem_element.label,
        c.branch_element.label,
        c.governing_force_label,
    )
}
