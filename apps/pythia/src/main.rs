use anyhow::Context;
use chrono::{Local, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use pythia::chart::{horary_off_thread, natal_off_thread, ChartEngine, ChartSettings};
use pythia::compatibility::Compatibility;
use pythia::ephemeris::{GeoLocation, HouseSystem, SwissEphemerisAdapter};
use pythia::iching::{cast, Numbering, RngCoins};
use pythia::input::{default_time, parse_date, parse_date_time, parse_time, to_utc};
use pythia::matrix::DestinyMatrix;
use pythia::numerology::{reduction_chain, NumerologyProfile};
use pythia::tarot::card_of_the_day;
use pythia::OracleError;
use pythia_config::PythiaSettings;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Divination readings from dates, times and places")]
struct Args {
    /// Print readings as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to $PYTHIA_CONFIG or configs/pythia.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cast an I Ching hexagram with three coins
    Hexagram {
        #[arg(long)]
        seed: Option<u64>,
        /// king-wen or binary
        #[arg(long)]
        numbering: Option<Numbering>,
    },
    /// Sucai consciousness and mission numbers
    Numerology {
        #[arg(help = "Birth date, dd.mm.yyyy")]
        date: String,
    },
    /// Reduce a number by repeated digit sums
    Reduce {
        n: i64,
        #[arg(long, default_value_t = 9)]
        max: u64,
    },
    /// Destiny matrix for a birth date
    Matrix {
        #[arg(help = "Birth date, dd.mm.yyyy")]
        date: String,
    },
    /// Compatibility of two birth dates
    Compat { first: String, second: String },
    /// Major Arcana card of the day
    Card {
        #[arg(long)]
        date: Option<String>,
    },
    /// Birth chart
    Natal {
        #[arg(help = "Birth date, dd.mm.yyyy")]
        date: String,
        /// Local birth time HH:MM, noon when omitted
        #[arg(long)]
        time: Option<String>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        #[arg(long)]
        place: Option<String>,
    },
    /// Question chart for now or a given moment
    Horary {
        #[arg(long, help = "dd.mm.yyyy HH:MM, now when omitted")]
        at: Option<String>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

fn emit<T: Serialize + Display>(value: &T, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn build_engine(settings: &PythiaSettings) -> anyhow::Result<Arc<ChartEngine<SwissEphemerisAdapter>>> {
    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("Swiss Ephemeris is not available")?;
    let house_system: HouseSystem = settings
        .house_system
        .parse()
        .context("Invalid ephemeris.house_system")?;
    let chart_settings = ChartSettings {
        house_system,
        default_location: GeoLocation {
            lat: settings.location.lat,
            lon: settings.location.lon,
        },
    };
    Ok(Arc::new(ChartEngine::with_settings(adapter, chart_settings)))
}

fn explicit_location(lat: Option<f64>, lon: Option<f64>) -> Option<GeoLocation> {
    lat.zip(lon).map(|(lat, lon)| GeoLocation { lat, lon })
}

async fn run(args: Args, settings: PythiaSettings) -> anyhow::Result<()> {
    match args.command {
        Command::Hexagram { seed, numbering } => {
            let numbering = match numbering {
                Some(n) => n,
                None => settings
                    .numbering
                    .parse::<Numbering>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid iching.numbering")?,
            };
            let casting = match seed {
                Some(seed) => cast(&mut RngCoins::seeded(seed), numbering)?,
                None => cast(&mut RngCoins::from_entropy(), numbering)?,
            };
            emit(&casting, args.json)
        }
        Command::Numerology { date } => {
            let profile = NumerologyProfile::from_date(parse_date(&date)?);
            emit(&profile, args.json)
        }
        Command::Reduce { n, max } => {
            let chain = reduction_chain(n, max)?;
            if args.json {
                let result = chain.last().copied();
                println!(
                    "{}",
                    serde_json::json!({ "n": n, "max": max, "chain": chain, "result": result })
                );
            } else {
                let steps: Vec<String> = chain.iter().map(|v| v.to_string()).collect();
                println!("{}", steps.join(" -> "));
            }
            Ok(())
        }
        Command::Matrix { date } => {
            let matrix = DestinyMatrix::calculate(parse_date(&date)?)?;
            let year = matrix.current_year_arcana()?;
            if args.json {
                let mut value = serde_json::to_value(&matrix)?;
                value["current_year_arcana"] = year.into();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", matrix);
                println!("Current year: arcanum {} - {}", year, matrix.arcanum(year)?.name);
            }
            Ok(())
        }
        Command::Compat { first, second } => {
            let result = Compatibility::score(parse_date(&first)?, parse_date(&second)?);
            emit(&result, args.json)
        }
        Command::Card { date } => {
            let day = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            emit(&card_of_the_day(day)?, args.json)
        }
        Command::Natal {
            date,
            time,
            lat,
            lon,
            place,
        } => {
            let day = parse_date(&date)?;
            let time = match time {
                Some(t) => parse_time(&t)?,
                None => default_time(),
            };
            let birth = to_utc(NaiveDateTime::new(day, time));
            let location = explicit_location(lat, lon);
            let place = place.or_else(|| location.is_none().then(|| settings.location.label.clone()));

            let engine = build_engine(&settings)?;
            let natal = natal_off_thread(engine, birth, location, place).await?;
            if !natal.chart.missing.is_empty() {
                log::warn!("Natal chart is missing {:?}", natal.chart.missing);
            }
            emit(&natal, args.json)
        }
        Command::Horary { at, lat, lon } => {
            let at = match at {
                Some(s) => to_utc(parse_date_time(&s)?),
                None => Utc::now(),
            };
            let engine = build_engine(&settings)?;
            let reading = horary_off_thread(engine, at, explicit_location(lat, lon)).await?;
            emit(&reading, args.json)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = pythia_config::load_settings(args.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    log::debug!("Settings: {:?}", settings);

    if let Err(err) = run(args, settings).await {
        if let Some(oracle) = err.downcast_ref::<OracleError>() {
            log::error!("{:?} error: {}", oracle.category(), oracle);
        }
        return Err(err);
    }
    Ok(())
}
