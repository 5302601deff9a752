use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use usbiz::{
    Calendar, CalendarOptions, CustomHoliday, HolidayRuleProvider, UsHolidays, WalkOptions,
};

/// US business-day calculator.
#[derive(Parser)]
#[command(name = "usbiz", version, about = "US business-day calculator")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Region code: US, USA or a two-letter state code.
    #[arg(short, long, global = true, default_value = "US")]
    region: String,

    /// JSON file with calendar options.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Holiday name to treat as a business day (repeatable).
    #[arg(long, global = true)]
    exclude: Vec<String>,

    /// Extra public holiday as RULE=NAME, e.g. "02-02=Groundhog Day" (repeatable).
    #[arg(long, global = true, value_parser = parse_custom_holiday)]
    add: Vec<CustomHoliday>,

    /// Fail when an excluded holiday name is unknown.
    #[arg(long, global = true)]
    strict: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Command {
    /// Print whether a date is a business day.
    Check { date: String },
    /// Print the date a number of business days after a date.
    Add {
        date: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
        /// Count the starting date as well.
        #[arg(long)]
        include_initial: bool,
    },
    /// Print a JSON tally of the days between two dates.
    Count {
        start: String,
        end: String,
        /// Count the starting date as well.
        #[arg(long)]
        include_initial: bool,
    },
    /// Print the public holidays of a year as JSON.
    Holidays { year: i32 },
    /// List the known region codes.
    Regions,
}

fn parse_custom_holiday(arg: &str) -> std::result::Result<CustomHoliday, String> {
    let (rule, name) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected RULE=NAME, got {arg:?}"))?;
    Ok(CustomHoliday::new(rule.trim(), name.trim()))
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` env var overrides the CLI flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("usbiz={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_options(cli: &Cli) -> Result<CalendarOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            CalendarOptions::from_json_str(&json)?
        }
        None => CalendarOptions::default(),
    };
    options.exclude_holidays.extend(cli.exclude.iter().cloned());
    options.add_holidays.extend(cli.add.iter().cloned());
    options.strict_exclusions |= cli.strict;
    Ok(options.merge_env()?)
}

fn walk_options(include_initial: bool) -> WalkOptions {
    WalkOptions {
        exclude_initial_date: !include_initial,
    }
}

fn calendar(cli: &Cli) -> Result<Calendar> {
    let options = load_options(cli)?;
    Ok(Calendar::with_options(&cli.region, options)?)
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Regions => {
            let provider = UsHolidays;
            for code in provider.list_regions() {
                println!("{code}\t{}", provider.region_name(&code).unwrap_or_default());
            }
        }
        Command::Check { date } => {
            println!("{}", calendar(&cli)?.is_business_day(date.as_str())?)
        }
        Command::Add {
            date,
            days,
            include_initial,
        } => {
            let date = calendar(&cli)?.add_business_days(
                date.as_str(),
                *days,
                walk_options(*include_initial),
            )?;
            println!("{date}");
        }
        Command::Count {
            start,
            end,
            include_initial,
        } => {
            let tally = calendar(&cli)?.count_days(
                start.as_str(),
                end.as_str(),
                walk_options(*include_initial),
            )?;
            println!("{}", serde_json::to_string_pretty(&tally)?);
        }
        Command::Holidays { year } => {
            let holidays = calendar(&cli)?.list_holidays(*year);
            println!("{}", serde_json::to_string_pretty(&holidays)?);
        }
    }
    Ok(())
}
