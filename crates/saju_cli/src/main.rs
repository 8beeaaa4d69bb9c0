mod logger;
mod text;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Locale, Pillar, Stem, ten_god, void_branches,
};
use saju_chart::{ChartInput, analyze_input};
use saju_config::{OutputFormat, SajuConfig};

use crate::text::ChartText;

#[derive(Parser)]
#[command(name = "saju", about = "Four-Pillars (Saju) chart CLI", version)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output locale: ko or en
    #[arg(long, global = true)]
    locale: Option<Locale>,
    /// Output format: json or text
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    /// Debug logging for the saju crates
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a chart input (JSON) read from a file or stdin
    Analyze {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Void branches of a Day pillar
    Void {
        /// Day pillar, e.g. 甲子 or 갑자
        pillar: String,
    },
    /// Ten-God of OTHER seen from the Day stem DAY
    TenGod {
        /// Day stem (甲, 갑 or Gap)
        day: String,
        /// Other stem
        other: String,
    },
    /// List stems, branches and elements
    Symbols,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read input file {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read chart input from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SajuConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(locale) = cli.locale {
        config.output.locale = locale;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    logger::init_cli_logger(cli.verbose, &config.logging.filter);
    tracing::debug!(?config, "effective configuration");

    let locale = config.output.locale;
    let format = config.output.format;

    match cli.command {
        Commands::Analyze { input } => {
            let json = read_input(input.as_ref())?;
            let request = ChartInput::from_json(&json)?;
            let chart = analyze_input(&request, locale)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                OutputFormat::Text => print!("{}", ChartText(&chart)),
            }
        }

        Commands::Void { pillar } => {
            let day: Pillar = pillar.parse()?;
            let [a, b] = void_branches(day);
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "pillar": day,
                    "void": [a, b],
                }))?,
                OutputFormat::Text => println!(
                    "{} ({}): {}{} ({}, {})",
                    day,
                    day.label(locale),
                    a,
                    b,
                    a.label(locale),
                    b.label(locale)
                ),
            }
        }

        Commands::TenGod { day, other } => {
            let day: Stem = day.parse()?;
            let other: Stem = other.parse()?;
            let god = ten_god(day, other);
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "day": day,
                    "other": other,
                    "tenGod": god,
                    "label": god.label(locale),
                    "hanja": god.hanja(),
                    "description": god.description(locale),
                }))?,
                OutputFormat::Text => println!(
                    "{day} -> {other}: {} {} - {}",
                    god.hanja(),
                    god.label(locale),
                    god.description(locale)
                ),
            }
        }

        Commands::Symbols => match format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "stems": ALL_STEMS.iter().map(|s| serde_json::json!({
                    "hanja": s.hanja(),
                    "hangul": s.hangul(),
                    "romanized": s.romanized(),
                    "element": s.element(),
                    "polarity": s.polarity(),
                })).collect::<Vec<_>>(),
                "branches": ALL_BRANCHES.iter().map(|b| serde_json::json!({
                    "hanja": b.hanja(),
                    "hangul": b.hangul(),
                    "romanized": b.romanized(),
                    "animal": b.animal(locale),
                    "element": b.element(),
                    "polarity": b.polarity(),
                })).collect::<Vec<_>>(),
                "elements": ALL_ELEMENTS.iter().map(|e| serde_json::json!({
                    "element": e,
                    "hanja": e.hanja(),
                    "label": e.label(locale),
                    "generates": e.generates(),
                    "controls": e.controls(),
                })).collect::<Vec<_>>(),
            }))?,
            OutputFormat::Text => {
                println!("{}", locale.pick("천간", "Stems"));
                for s in ALL_STEMS {
                    println!(
                        "  {} {:<6} {:<7} {} {}",
                        s,
                        s.hangul(),
                        s.romanized(),
                        s.element().label(locale),
                        s.polarity().label(locale)
                    );
                }
                println!("{}", locale.pick("지지", "Branches"));
                for b in ALL_BRANCHES {
                    println!(
                        "  {} {:<6} {:<7} {} {} {}",
                        b,
                        b.hangul(),
                        b.romanized(),
                        b.animal(locale),
                        b.element().label(locale),
                        b.polarity().label(locale)
                    );
                }
                println!("{}", locale.pick("오행", "Elements"));
                for e in ALL_ELEMENTS {
                    println!(
                        "  {} {} -> {} / x {}",
                        e.hanja(),
                        e.label(locale),
                        e.generates().label(locale),
                        e.controls().label(locale)
                    );
                }
            }
        },
    }

    Ok(())
}
