use anyhow::Context;
use clap::{Parser, ValueEnum};
use pairmatch_core::{GameConfig, Session};
use std::path::PathBuf;

mod autoplay;
mod config;
mod interactive;
mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// 6x5 board, 15 pairs
    Classic,
    /// 8x4 board, 16 pairs
    Extended,
}

impl Variant {
    fn preset(self) -> GameConfig {
        match self {
            Self::Classic => GameConfig::classic(),
            Self::Extended => GameConfig::extended(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board preset to start from
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,

    /// TOML file overriding values of the preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Let the built-in player play one round on a simulated clock
    #[arg(long)]
    autoplay: bool,

    /// Print the final round snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn random_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = config::load(args.variant.preset(), args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(random_seed);
    log::debug!("seed: {}", seed);

    let mut session = Session::new(config, seed).context("Could not start a round")?;
    let snapshot = if args.autoplay {
        autoplay::run(&mut session)
    } else {
        interactive::run(&mut session)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
