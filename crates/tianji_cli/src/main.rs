use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tianji_rs::{
    Advice, BaziChart, CivilDateTime, FiveElementHistogram, Gender, QimenOutcome,
    QuestionCategory, Tianji, TianjiConfig, TianjiError, ZiweiChart,
};

#[derive(Parser)]
#[command(name = "tianji", about = "BaZi, Qimen and Ziwei chart engine")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars chart
    Bazi {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Civil time (HH:MM or HH:MM:SS)
        time: String,
        /// East-positive longitude for solar-time correction
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Qimen decision signal for a question category
    Qimen {
        /// career, wealth, relationship, travel, study or health
        category: String,
        /// Consult at this time ("YYYY-MM-DD HH:MM") instead of now
        #[arg(long)]
        at: Option<String>,
        /// Clear the category's cooldown lock instead of consulting
        #[arg(long)]
        release: bool,
    },
    /// Ziwei Dou Shu chart
    Ziwei {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Civil time (HH:MM or HH:MM:SS)
        time: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Five-element histogram over stem/branch symbols
    Histogram {
        /// Glyphs or pinyin, e.g. 甲 子 bing wu
        symbols: Vec<String>,
    },
    /// BaZi chart plus a narrative advisory report
    Advise {
        date: String,
        time: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long, default_value = "male")]
        gender: String,
        /// Year the report looks ahead to
        #[arg(long)]
        year: i32,
        /// API key for the advisory service
        #[arg(long, env = "TIANJI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

/// JSON body of the `advise` subcommand.
#[derive(Serialize)]
struct AdviseOutput<'a> {
    chart: &'a BaziChart,
    advice: &'a Advice,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,tianji_rs=info,tianji_charts=info,tianji_advisory=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> TianjiConfig {
    match path {
        Some(p) => TianjiConfig::load(p).unwrap_or_else(|e| fail(format!("Failed to load config: {e}"))),
        None => TianjiConfig::default(),
    }
}

fn build_engine(config: &TianjiConfig) -> Tianji {
    Tianji::new(config).unwrap_or_else(|e| fail(format!("Failed to start engine: {e}")))
}

fn parse_gender(s: &str) -> Gender {
    s.parse()
        .unwrap_or_else(|e| fail(format!("{e}; expected male or female")))
}

fn or_fail<T>(result: Result<T, TianjiError>) -> T {
    result.unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("Failed to encode JSON: {e}")),
    }
}

fn print_bazi(chart: &BaziChart) {
    for p in &chart.pillars {
        let void = if p.void { " (void)" } else { "" };
        println!("{:<6} {}{void}", p.slot.name(), p.pillar.glyphs());
    }
    println!(
        "Day master: {} ({})",
        chart.day_master.glyph(),
        chart.day_master_element.name()
    );
    print_histogram(&chart.histogram);
    println!(
        "Strength: {} (support {}, dominant {})",
        chart.strength.strength.name(),
        chart.strength.support,
        chart.strength.dominant.name()
    );
    println!("Season: {}", chart.season.name());
    println!(
        "Void: {}{}",
        chart.void_branches[0].glyph(),
        chart.void_branches[1].glyph()
    );
    println!("Zodiac: {}", chart.zodiac.name());
    println!("Luck cycles: {}", chart.luck_direction.name());
    println!(
        "Lunar date: {}-{}{}-{}",
        chart.lunar.year,
        if chart.lunar.leap { "leap " } else { "" },
        chart.lunar.month,
        chart.lunar.day
    );
}

fn print_histogram(h: &FiveElementHistogram) {
    let parts: Vec<String> = h
        .iter()
        .map(|(e, n)| format!("{}{} {n}", e.glyph(), e.name()))
        .collect();
    println!("Elements: {}", parts.join(", "));
}

fn print_qimen(outcome: &QimenOutcome) {
    match outcome {
        QimenOutcome::Computed(r) => {
            println!("Signal: {} (score {})", r.signal.name(), r.score);
            println!("{}", r.summary);
            println!(
                "Self {} / matter {} / door {}",
                r.day_palace.glyph(),
                r.hour_palace.glyph(),
                r.door.glyph()
            );
            println!("Factors: {}", r.factors.join(", "));
            println!("Valid until {}", r.valid_until);
        }
        QimenOutcome::Locked { since, until } => {
            println!("Locked since {since}; ask again after {until}");
        }
    }
}

fn print_ziwei(chart: &ZiweiChart) {
    println!(
        "Bureau: {}  life {}  body {}",
        chart.bureau.label(),
        chart.life_palace().branch.glyph(),
        chart.body_palace().branch.glyph()
    );
    for p in &chart.palaces {
        let stars: Vec<&str> = p.stars.iter().map(|s| s.kind.glyph()).collect();
        println!(
            "{}{} {:<4} {:>7} {}{}",
            p.stem.glyph(),
            p.branch.glyph(),
            p.area.glyph(),
            p.decade.to_string(),
            stars.join(" "),
            if p.is_body { " [body]" } else { "" }
        );
    }
}

fn print_advice(advice: &Advice) {
    let r = &advice.report;
    for (title, text) in [
        ("Overview", &r.overview),
        ("Personality", &r.personality),
        ("Career", &r.career),
        ("Wealth", &r.wealth),
        ("Relationships", &r.relationships),
        ("Health", &r.health),
        ("Study", &r.study),
        ("Family", &r.family),
        ("Luck cycle", &r.luck_cycle),
        ("Annual outlook", &r.annual_outlook),
        ("Favorable elements", &r.favorable_elements),
        ("Advice", &r.advice),
    ] {
        println!("## {title}\n{text}\n");
    }
    if let Some(e) = &advice.error {
        eprintln!("Advisory service unavailable: {e}");
    }
}

fn now_or(at: Option<&str>) -> CivilDateTime {
    match at {
        Some(s) => s
            .parse()
            .unwrap_or_else(|e| fail(format!("Invalid --at: {e}"))),
        None => CivilDateTime::from_naive(chrono::Local::now().naive_local()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let config = load_config(cli.config.as_ref());

    match cli.command {
        Commands::Bazi {
            date,
            time,
            lon,
            gender,
        } => {
            let engine = build_engine(&config);
            let chart = or_fail(engine.compute_bazi(&date, &time, lon, parse_gender(&gender)));
            if cli.json {
                print_json(&chart);
            } else {
                print_bazi(&chart);
            }
        }

        Commands::Qimen {
            category,
            at,
            release,
        } => {
            let engine = build_engine(&config);
            let category: QuestionCategory = category.parse().unwrap_or_else(|e| fail(e));
            if release {
                or_fail(engine.release_qimen(category));
                println!("Released {category}");
                return;
            }
            let now = now_or(at.as_deref());
            debug!(%now, "consulting qimen");
            let outcome = or_fail(engine.compute_qimen(category, &now));
            if cli.json {
                print_json(&outcome);
            } else {
                print_qimen(&outcome);
            }
        }

        Commands::Ziwei {
            date,
            time,
            lon,
            gender,
        } => {
            let engine = build_engine(&config);
            let at = CivilDateTime::parse(&date, &time).unwrap_or_else(|e| fail(e));
            let chart = or_fail(engine.compute_ziwei_for(&at, lon, parse_gender(&gender)));
            if cli.json {
                print_json(&chart);
            } else {
                print_ziwei(&chart);
            }
        }

        Commands::Histogram { symbols } => {
            let engine = build_engine(&config);
            let h = engine.element_histogram(symbols.as_slice());
            if cli.json {
                print_json(&h);
            } else {
                print_histogram(&h);
            }
        }

        Commands::Advise {
            date,
            time,
            lon,
            gender,
            year,
            api_key,
        } => {
            let config = match api_key {
                Some(key) => config.with_api_key(key),
                None => config,
            };
            let engine = build_engine(&config);
            let chart = or_fail(engine.compute_bazi(&date, &time, lon, parse_gender(&gender)));
            if !cli.json {
                print_bazi(&chart);
                println!();
            }
            let runtime = tokio::runtime::Runtime::new()
                .unwrap_or_else(|e| fail(format!("Failed to start runtime: {e}")));
            let advice = runtime.block_on(engine.advise(&chart, year));
            if cli.json {
                print_json(&AdviseOutput {
                    chart: &chart,
                    advice: &advice,
                });
            } else {
                print_advice(&advice);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tianji_rs::{AdvisoryReport, PLACEHOLDER};

    #[test]
    fn advise_json_carries_chart_and_report() {
        let engine = Tianji::new(&TianjiConfig::default()).unwrap();
        let chart = engine
            .compute_bazi("2024-02-04", "12:00", Some(120.0), Gender::Male)
            .unwrap();
        let advice = Advice {
            report: AdvisoryReport::placeholder(),
            error: None,
        };
        let json = serde_json::to_value(AdviseOutput {
            chart: &chart,
            advice: &advice,
        })
        .unwrap();
        assert_eq!(json["chart"]["day_master"], "Wu");
        assert_eq!(json["chart"]["pillars"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["advice"]["report"]["overview"], PLACEHOLDER);
    }

    #[test]
    fn advise_args_parse() {
        let cli = Cli::try_parse_from([
            "tianji", "--json", "advise", "2024-02-04", "12:00", "--lon", "120", "--year", "2026",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Advise { year: 2026, .. }));
    }
}
