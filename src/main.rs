//! Entry point for the Elo league simulator
//!
//! Generates a league of players with hidden true skills, plays a
//! round-robin through the Gaussian Elo calculator, and prints how close the
//! estimated ratings ended up to the truth.

use anyhow::Result;
use clap::Parser;
use matchmaker_skills::config::AppConfig;
use matchmaker_skills::simulation::{SimulationReport, Simulator};
use matchmaker_skills::GaussianEloCalculator;
use std::path::PathBuf;
use tracing::{error, info};

/// Elo League Simulator - exercise the Gaussian Elo calculator on synthetic players
#[derive(Parser)]
#[command(
    name = "elo-simulator",
    version,
    about = "Round-robin simulation of the Gaussian Elo calculator",
    long_about = "Generates players with a hidden true skill, plays them against each other with \
                 outcomes drawn from those skills, and updates their visible ratings with the \
                 Gaussian Elo calculator (K = 24)."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Number of players
    #[arg(short, long, value_name = "COUNT")]
    players: Option<usize>,

    /// Matches per player
    #[arg(short, long, value_name = "COUNT")]
    matches: Option<usize>,

    /// Beta of the Gaussian curve
    #[arg(long, value_name = "BETA")]
    beta: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration and exit without running the simulation"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(players) = args.players {
        config.simulation.player_count = players;
    }
    if let Some(matches) = args.matches {
        config.simulation.matches_per_player = matches;
    }
    if let Some(beta) = args.beta {
        config.game.beta = beta;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }

    matchmaker_skills::config::validate_config(&config)?;
    Ok(config)
}

fn display_startup_banner(config: &AppConfig) {
    info!("Elo League Simulator v{}", matchmaker_skills::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Beta: {}", config.game.beta);
    info!("   Initial rating: {}", config.game.initial_mean);
    info!("   Draw probability: {}", config.game.draw_probability);
    info!("   Players: {}", config.simulation.player_count);
    info!(
        "   Matches per player: {}",
        config.simulation.matches_per_player
    );
    info!(
        "   True skill range: [{}, {}]",
        config.simulation.true_skill_min, config.simulation.true_skill_max
    );
}

fn print_table(report: &SimulationReport) {
    println!(
        "{:<38} {:>10} {:>10} {:>6} {:>6} {:>6}",
        "player", "true", "rating", "won", "lost", "drawn"
    );
    for player in &report.players {
        println!(
            "{:<38} {:>10.1} {:>10.1} {:>6} {:>6} {:>6}",
            player.id.to_string(),
            player.true_skill,
            player.rating.mean,
            player.wins,
            player.losses,
            player.draws
        );
    }
    println!();
    println!("seed:                  {}", report.seed);
    println!("matches played:        {}", report.matches_played);
    println!("average match quality: {:.3}", report.average_match_quality);
    println!("mean absolute error:   {:.1}", report.mean_absolute_error);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    let game_info = config.game_info()?;

    if args.dry_run {
        info!("Configuration validation successful");
        info!("Dry run completed - exiting without running the simulation");
        return Ok(());
    }

    let simulator = Simulator::new(
        GaussianEloCalculator::new(),
        game_info,
        config.simulation.clone(),
    );

    let report = match simulator.run() {
        Ok(report) => report,
        Err(e) => {
            error!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}
