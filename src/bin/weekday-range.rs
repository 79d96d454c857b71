use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use weekday_range::{
    CalendarDate, CalendarGrid, DateRange, Month, MonthView, PickerConfig, RangeChange, RangeSelector,
    WEEKDAY_LABELS, build_grid, weekends_in_range,
};

#[derive(Parser)]
#[command(
    name = "weekday-range",
    about = "Drive the date range picker core without a UI"
)]
struct Cli {
    /// Date to use as today (YYYY-MM-DD, defaults to the local date)
    #[arg(long)]
    today: Option<CalendarDate>,

    /// JSON picker config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the predefined-range catalog for today
    Presets,

    /// Print the weekend days between two dates
    Weekends {
        /// Start date (YYYY-MM-DD)
        from: CalendarDate,

        /// End date (YYYY-MM-DD)
        to: CalendarDate,
    },

    /// Print the calendar grid for a month
    Grid {
        year: i32,

        /// Month number (1-12)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,

        /// Selected range start
        #[arg(long)]
        from: Option<CalendarDate>,

        /// Selected range end
        #[arg(long, requires = "from")]
        to: Option<CalendarDate>,
    },

    /// Replay picker events and print every emitted change as JSON
    Replay {
        /// Events: pick:DATE, preset:LABEL, month:N, year:N, from:TEXT, to:TEXT, clear
        #[arg(required = true)]
        events: Vec<Event>,
    },
}

/// One view-layer action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Pick(CalendarDate),
    Preset(String),
    Month(i32),
    Year(i32),
    FromText(String),
    ToText(String),
    Clear,
}

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "clear" {
            return Ok(Self::Clear);
        }
        let Some((kind, value)) = s.split_once(':') else {
            bail!("unknown event: {s}. Expected KIND:VALUE or clear");
        };
        let event = match kind {
            "pick" => Self::Pick(value.parse()?),
            "preset" => Self::Preset(value.to_owned()),
            "month" => Self::Month(value.parse().with_context(|| format!("bad month offset: {value}"))?),
            "year" => Self::Year(value.parse().with_context(|| format!("bad year offset: {value}"))?),
            "from" => Self::FromText(value.to_owned()),
            "to" => Self::ToText(value.to_owned()),
            other => bail!("unknown event kind: {other}. Expected pick, preset, month, year, from, to"),
        };
        Ok(event)
    }
}

fn apply(selector: &mut RangeSelector, event: &Event) -> Result<Option<RangeChange>> {
    let change = match event {
        Event::Pick(date) => selector.pick_date(*date),
        Event::Preset(label) => Some(selector.pick_preset(label)?),
        Event::Month(offset) => {
            selector.navigate_month(*offset);
            None
        }
        Event::Year(offset) => {
            selector.navigate_year(*offset);
            None
        }
        Event::FromText(text) => selector.set_from_text(text),
        Event::ToText(text) => selector.set_to_text(text),
        Event::Clear => Some(selector.clear()),
    };
    Ok(change)
}

fn render_grid(grid: &CalendarGrid) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{:^28}", grid.title())?;
    for label in WEEKDAY_LABELS {
        write!(out, "{label:>4}")?;
    }
    out.push('\n');
    for row in grid.rows() {
        for cell in row {
            let day = cell.date.day();
            if cell.is_selected {
                write!(out, "[{day:>2}]")?;
            } else if cell.is_in_range {
                write!(out, "({day:>2})")?;
            } else if cell.in_displayed_month {
                write!(out, " {day:>2} ")?;
            } else {
                write!(out, " {day:>2}.")?;
            }
        }
        out.push('\n');
    }
    Ok(out)
}

fn load_config(path: Option<&PathBuf>) -> Result<PickerConfig> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    PickerConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn cmd_replay(selector: &mut RangeSelector, events: &[Event]) -> Result<()> {
    for (index, event) in events.iter().enumerate() {
        let change = apply(selector, event).with_context(|| format!("event {} ({event:?}) failed", index + 1))?;
        if let Some(change) = change {
            println!("{}", serde_json::to_string(&change)?);
        }
    }
    info!(range = %selector.range(), view = %selector.view().title(), "replay finished");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let today = match cli.today {
        Some(date) => date,
        None => CalendarDate::today().context("local date is outside the supported years")?,
    };
    let config = load_config(cli.config.as_ref())?;
    let mut selector = RangeSelector::with_config(today, &config);
    info!(%today, presets = selector.presets().len(), "session started");

    match &cli.command {
        Commands::Presets => {
            println!("{}", serde_json::to_string_pretty(selector.presets())?);
        }
        Commands::Weekends { from, to } => {
            let weekends = weekends_in_range(*from, *to)?;
            println!("{}", serde_json::to_string(&weekends)?);
        }
        Commands::Grid {
            year,
            month,
            from,
            to,
        } => {
            let range = match (from, to) {
                (Some(from), Some(to)) => DateRange::new(*from, *to)?,
                (Some(from), None) => DateRange::partial(*from),
                _ => DateRange::empty(),
            };
            let view = MonthView::new(*year, Month::new(*month)?);
            let grid = build_grid(view, &range).with_context(|| format!("cannot show {}", view.title()))?;
            print!("{}", render_grid(&grid)?);
        }
        Commands::Replay { events } => {
            cmd_replay(&mut selector, events)?;
        }
    }

    Ok(())
}
