//! dndroll - dice roller for tabletop role-playing games

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dndroll::dice::{evaluate, parse_notation, roll_total, DiceSpec, DieSource, RngSource};
use dndroll::report;
use dndroll::rules;
use dndroll::{Config, DiceError};

/// Dice roller for D&D 5th Edition
#[derive(Parser, Debug)]
#[command(
    name = "dndroll",
    version,
    about = "Dice roller for D&D 5th Edition",
    long_about = "Dice roller for D&D 5th Edition. Running without a command \
                  rolls the default dice (1d20) and prints its statistics."
)]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true, env = "DNDROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Seed the random generator for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll dice and print the total
    Roll(DiceArgs),
    /// Roll dice and print the full statistics
    Stats(DiceArgs),
    /// Generate ability scores (4d6, drop the lowest)
    Abilities {
        /// Number of scores [default: from config, 6]
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Roll two d20s and keep the higher
    Advantage,
    /// Roll two d20s and keep the lower
    Disadvantage,
    /// Proficiency bonus for a character level (1-20)
    Proficiency {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Roll a d100 as a percentage
    Percentile,
    /// Roll four Fate dice against a rating
    Fate {
        /// Integer or ladder adjective (legendary .. catastrophic)
        #[arg(default_value = "0", allow_negative_numbers = true)]
        rating: String,
    },
}

/// Dice given as notation or as explicit numbers; the configured default
/// roll is used when neither is given
#[derive(clap::Args, Debug)]
struct DiceArgs {
    /// Dice notation XdY+/-Z, where X > 0, Y > 1 and Z is any integer
    #[arg(value_name = "XdY+/-Z", conflicts_with_all = ["count", "sides", "modifier"])]
    notation: Option<String>,

    /// Number of dice [default: 1]
    #[arg(short, long, requires = "sides")]
    count: Option<u32>,

    /// Sides per die
    #[arg(short, long)]
    sides: Option<u32>,

    /// Added to the sum of the dice [default: 0]
    #[arg(short, long, requires = "sides", allow_negative_numbers = true)]
    modifier: Option<i32>,
}

impl DiceArgs {
    fn spec(&self, config: &Config) -> Result<DiceSpec, DiceError> {
        match (&self.notation, self.sides) {
            (Some(notation), _) => parse_notation(notation),
            (None, Some(sides)) => {
                DiceSpec::new(self.count.unwrap_or(1), sides, self.modifier.unwrap_or(0))
            }
            (None, None) => parse_notation(&config.default_roll),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dndroll=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if err.downcast_ref::<DiceError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.json |= args.json;

    let mut source: Box<dyn DieSource> = match config.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };
    let source = source.as_mut();

    debug!(command = ?args.command, "running");

    match args.command {
        Some(Command::Roll(dice)) => {
            let spec = dice.spec(&config)?;
            let total = roll_total(spec, source);
            emit(
                config.json,
                &json!({ "roll": spec.label(), "total": total }),
                || total.to_string(),
            )
        }
        Some(Command::Stats(dice)) => {
            let outcome = evaluate(dice.spec(&config)?, source);
            emit(config.json, &outcome, || report::render_stats(&outcome))
        }
        None => {
            let outcome = evaluate(parse_notation(&config.default_roll)?, source);
            emit(config.json, &outcome, || report::render_stats(&outcome))
        }
        Some(Command::Abilities { count }) => {
            let n = count.unwrap_or(config.ability_scores);
            let scores = rules::roll_ability_scores(n, source)?;
            emit(config.json, &scores, || report::render_abilities(&scores))
        }
        Some(Command::Advantage) => {
            let roll = rules::roll_advantage(source);
            emit(config.json, &roll, || report::render_edge(&roll))
        }
        Some(Command::Disadvantage) => {
            let roll = rules::roll_disadvantage(source);
            emit(config.json, &roll, || report::render_edge(&roll))
        }
        Some(Command::Proficiency { level }) => {
            let bonus = rules::proficiency_bonus(level)?;
            emit(
                config.json,
                &json!({ "level": level, "bonus": bonus }),
                || report::render_proficiency(level, bonus),
            )
        }
        Some(Command::Percentile) => {
            let roll = rules::roll_percentile(source);
            emit(config.json, &roll, || roll.to_string())
        }
        Some(Command::Fate { rating }) => {
            let rating = rules::parse_fate_rating(&rating)?;
            let roll = rules::roll_fate(rating, source);
            emit(config.json, &roll, || report::render_fate(&roll))
        }
    }
}

/// Print `value` as JSON, or the text rendering
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
