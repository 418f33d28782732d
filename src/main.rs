use anyhow::Result;
use clap::Parser;
use flexi_logger::Logger;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use tycoon::game::{Board, BoardConfig, DEFAULT_PROPERTY_COUNT, DEFAULT_ROUND_LIMIT};
use tycoon::simulation::{simulate, SimulationReport};

#[derive(Parser, Debug)]
#[command(name = "tycoon", about = "Pit four property-buying strategies against each other")]
struct Cli {
    /// Number of matches to play
    #[arg(short, long, default_value_t = 300)]
    games: usize,

    /// Number of properties around the board
    #[arg(short, long, default_value_t = DEFAULT_PROPERTY_COUNT)]
    properties: usize,

    /// Rounds after which a match times out
    #[arg(short, long, default_value_t = DEFAULT_ROUND_LIMIT)]
    round_limit: u32,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level, unless RUST_LOG is set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)?.start()?;

    let config = BoardConfig {
        property_count: cli.properties,
        round_limit: cli.round_limit,
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = Board::new(config, rng)?;
    info!(
        "Simulating {} matches on {} properties (round limit {})",
        cli.games, config.property_count, config.round_limit
    );

    let start = Instant::now();
    let results = simulate(&mut board, cli.games)?;
    let duration = start.elapsed();

    let report = SimulationReport::from_results(&results)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    info!("Time elapsed: {:?}", duration);

    Ok(())
}
