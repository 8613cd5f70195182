//! Simulate Binary
//!
//! Plays many randomized solo games and logs score statistics.
//!
//! ```text
//! simulate --n-simulations 10000 --player-type random --seed 42
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use faraway_sim::cards::loader::{load_catalog, load_main_only, DEFAULT_BONUS_CARDS, DEFAULT_MAIN_CARDS};
use faraway_sim::{FailurePolicy, GameRng, SimulationConfig, SoloPlay, StrategyKind};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Monte Carlo simulation of solo card-drafting games")]
struct Args {
    /// Number of simulations to run
    #[arg(short = 'n', long, default_value_t = 1_000)]
    n_simulations: usize,

    /// Type of player to use
    #[arg(long, default_value = "random")]
    player_type: String,

    /// Whether to use bonus cards
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    use_bonus_cards: bool,

    /// Main cards per game
    #[arg(long, default_value_t = faraway_sim::core::DEFAULT_ROUNDS)]
    n_rounds: usize,

    /// Verbosity level (0 silent, 1 summary, 2 per simulation)
    #[arg(short, long, default_value_t = 1)]
    verbose: u8,

    /// Log to a file instead of the terminal
    #[arg(long, num_args = 0..=1, default_missing_value = "faraway.log")]
    log_to_file: Option<PathBuf>,

    /// Batch seed; drawn from OS entropy if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Main card records
    #[arg(long, default_value = DEFAULT_MAIN_CARDS)]
    main_cards: PathBuf,

    /// Bonus card records
    #[arg(long, default_value = DEFAULT_BONUS_CARDS)]
    bonus_cards: PathBuf,

    /// Count invalid final fields instead of aborting the batch
    #[arg(long)]
    count_failures: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.log_to_file.as_ref())?;

    let strategy: StrategyKind = args.player_type.parse()?;

    let catalog = if args.use_bonus_cards {
        load_catalog(&args.main_cards, &args.bonus_cards)
    } else {
        load_main_only(&args.main_cards)
    }
    .with_context(|| format!("loading card catalog from {}", args.main_cards.display()))?;

    let policy = if args.count_failures {
        FailurePolicy::Count
    } else {
        FailurePolicy::Abort
    };
    let config = SimulationConfig::default()
        .with_rounds(args.n_rounds)
        .with_bonus_cards(args.use_bonus_cards)
        .with_verbose(args.verbose)
        .with_failure_policy(policy);

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut game = SoloPlay::new(Arc::new(catalog), strategy, config)?;
    let report = game
        .run_simulations(args.n_simulations, &mut rng)
        .context("simulation batch aborted")?;

    if args.verbose > 1 {
        let mut histogram: Vec<_> = report.histogram().into_iter().collect();
        histogram.sort_unstable();
        for (score, count) in histogram {
            log::debug!("score {:>4}: {}", score, count);
        }
    }
    Ok(())
}

/// Terminal logging by default, a single log file when requested.
fn init_logging(verbose: u8, file: Option<&PathBuf>) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    match file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            WriteLogger::init(level, config, file)?;
        }
        None => TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)?,
    }
    Ok(())
}
