use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sacred_geometry::solver::{ExpressionSolver, SolverConfig};
use sacred_geometry::utils::{roll_dice, targets_for_level, validate_dice_count, validate_level};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Sacred Geometry - Roll dice and find an expression that reaches a target prime
#[derive(Parser, Debug)]
#[command(name = "sacred-geometry")]
#[command(about = "Roll dice and combine them with + - × ÷ to reach one of a level's prime targets")]
#[command(version)]
pub struct CliArgs {
    /// Number of dice to roll (1-24)
    pub num_dice: usize,

    /// Level selecting the candidate target primes (1-9)
    pub level: u8,

    /// Seed for a reproducible roll
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only accept expressions that use every die
    #[arg(long)]
    pub all_dice: bool,

    /// Give up on a target once this many states have been recorded
    #[arg(long)]
    pub max_states: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub num_dice: usize,
    pub level: u8,
    pub seed: Option<u64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        validate_dice_count(args.num_dice).context("Invalid number of dice")?;
        validate_level(args.level).context("Invalid level")?;

        Ok(CliConfig {
            num_dice: args.num_dice,
            level: args.level,
            seed: args.seed,
            solver: SolverConfig {
                require_all_dice: args.all_dice,
                max_states: args.max_states,
            },
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let targets = targets_for_level(config.level)?;
    let dice = match config.seed {
        Some(seed) => roll_dice(config.num_dice, &mut StdRng::seed_from_u64(seed)),
        None => roll_dice(config.num_dice, &mut rand::thread_rng()),
    };
    println!("Die rolls: {:?}", dice);

    info!("Trying level {} targets {:?}", config.level, targets);
    let solver = ExpressionSolver::with_config(config.solver);

    match solver
        .solve_targets(&dice, targets)
        .context("Expression search failed")?
    {
        Some(solution) => {
            println!("{}", solution);
            Ok(())
        }
        None => {
            warn!("No target reachable with {:?}", dice);
            println!("No valid solution found for any target prime");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(num_dice: usize, level: u8) -> CliArgs {
        CliArgs {
            num_dice,
            level,
            seed: None,
            all_dice: false,
            max_states: None,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from([
            "sacred-geometry",
            "5",
            "3",
            "--seed",
            "11",
            "--all-dice",
            "--max-states",
            "1000",
        ]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.num_dice, 5);
            assert_eq!(args.level, 3);
            assert_eq!(args.seed, Some(11));
            assert!(args.all_dice);
            assert_eq!(args.max_states, Some(1000));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_non_integer_arguments_are_rejected() {
        assert!(CliArgs::try_parse_from(["sacred-geometry", "five", "3"]).is_err());
        assert!(CliArgs::try_parse_from(["sacred-geometry", "5"]).is_err());
    }

    #[test]
    fn test_config_from_valid_args() {
        let config = CliConfig::try_from(args(24, 9));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.num_dice, 24);
            assert_eq!(config.level, 9);
            assert!(!config.solver.require_all_dice);
            assert_eq!(config.solver.max_states, None);
        }
    }

    #[test]
    fn test_config_rejects_out_of_range_args() {
        assert!(CliConfig::try_from(args(0, 1)).is_err());
        assert!(CliConfig::try_from(args(25, 1)).is_err());
        assert!(CliConfig::try_from(args(3, 0)).is_err());
        assert!(CliConfig::try_from(args(3, 10)).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
