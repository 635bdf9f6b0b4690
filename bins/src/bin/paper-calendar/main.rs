// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Paper Calendar project*
//!
//! Render printable day, week, and month calendar pages
//!

mod config;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, ValueEnum, builder::PossibleValue};
use config::Config;
use log::info;
use paper_calendar_core::Event;
use paper_calendar_renderer::{Page, day_view, month_view, svg, week_view};
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};

/// Paper Calendar entry point
fn main() {
    let args = Cli::parse();

    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("paper_calendar")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let events = config.load_events(&args.events)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    info!("{} event(s), rendering around {date}", events.len());

    fs::create_dir_all(&args.out)?;

    let views: &[View] = match args.view {
        View::All => &[View::Day, View::Week, View::Month],
        View::Day => &[View::Day],
        View::Week => &[View::Week],
        View::Month => &[View::Month],
    };
    for view in views {
        let page = build_page(*view, date, &events, &config)?;
        write_page(&page, &args.out, view.file_stem(), args.format)?;
    }
    Ok(())
}

fn build_page(
    view: View,
    date: NaiveDate,
    events: &[Event],
    config: &Config,
) -> Result<Page, paper_calendar_renderer::LayoutError> {
    match view {
        View::Day => day_view(date, events, config.hour_span, &config.style),
        View::Week => week_view(date, events, config.hour_span, &config.style),
        View::Month | View::All => month_view(date.year(), date.month(), events, &config.style),
    }
}

fn write_page(
    page: &Page,
    dir: &Path,
    stem: &str,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let (contents, extension) = match format {
        Format::Svg => (svg::page_to_svg(page), "svg"),
        Format::Json => (serde_json::to_string_pretty(page)?, "json"),
    };
    let path = dir.join(format!("{stem}.{extension}"));
    fs::write(&path, contents)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Paper Calendar CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Render printable calendar pages",
    after_help = "Event files are JSON arrays of {\"name\", \"begin\", \"end\"} objects"
)]
pub struct Cli {
    /// The view(s) to render
    #[arg(value_enum)]
    pub view: View,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a JSON file of events (may be repeated)
    #[arg(long)]
    pub events: Vec<PathBuf>,

    /// The date to render around (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Directory to write the pages to
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    pub format: Format,

    /// Log layout details
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Day,
    Week,
    Month,
    All,
}

impl View {
    fn file_stem(&self) -> &'static str {
        match self {
            View::Day => "day",
            View::Week => "week",
            View::Month => "month",
            View::All => "all",
        }
    }
}

impl ValueEnum for View {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Day, Self::Week, Self::Month, Self::All]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            View::Day => Some(PossibleValue::new("day").help("The given day's schedule")),
            View::Week => Some(
                PossibleValue::new("week").help("The schedule of the week (from Monday) of the day"),
            ),
            View::Month => Some(PossibleValue::new("month").help("The month table of the day")),
            View::All => Some(PossibleValue::new("all").help("All three views")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Json,
}

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Svg, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Format::Svg => Some(PossibleValue::new("svg").help("An SVG document per page")),
            Format::Json => Some(PossibleValue::new("json").help("The laid out pages as JSON")),
        }
    }
}
