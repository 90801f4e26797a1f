//! Staking daemon: writes genesis, replays ticks and answers queries against
//! an LMDB-backed store.

mod config;

use anyhow::{bail, Context};
use clap::Parser;
use config::DaemonConfig;
use serde::Serialize;
use stake_engine::{init_genesis_with_kv_bank, query, StakeModule};
use stake_store::{ParamsStore, StoreError};
use stake_store_lmdb::LmdbStore;
use stake_types::{Address, PublicKey};
use stake_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stake-daemon", about = "Validator bonding and reward accounting")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "STAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory for the LMDB store.
    #[arg(long, env = "STAKE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAKE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STAKE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Write genesis params and candidates into an empty store.
    Init,
    /// Run the per-block tick and print the validator-set changes as JSON.
    Tick {
        /// Block height; defaults to one past the last processed height.
        #[arg(long)]
        height: Option<u64>,
    },
    /// Read stored state.
    Query {
        #[command(subcommand)]
        what: QueryCommand,
    },
}

#[derive(clap::Subcommand)]
enum QueryCommand {
    /// One candidate by hex public key.
    Candidate { pub_key: String },
    /// Public keys of all candidates.
    Candidates,
    /// A delegator's bond with one candidate.
    Bond { delegator: String, pub_key: String },
    /// Candidates a delegator is bonded to.
    DelegatorCandidates { delegator: String },
    /// A named service definition.
    Service { name: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => DaemonConfig::from_toml_file(path)?,
        None => DaemonConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    stake_utils::init_tracing(config.log_format, &config.log_level);

    let store = LmdbStore::open(&config.data_dir, config.map_size)
        .with_context(|| format!("opening store at {}", config.data_dir.display()))?;

    match cli.command {
        Command::Init => {
            match store.load_params() {
                Ok(_) => bail!("store at {} is already initialised", config.data_dir.display()),
                Err(StoreError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
            let candidates = config.genesis_candidates()?;
            let diff = init_genesis_with_kv_bank(&store, &config.params, &candidates)?;
            tracing::info!(data_dir = %config.data_dir.display(), "genesis complete");
            print_json(&diff)?;
        }
        Command::Tick { height } => {
            let module = StakeModule::new(&store);
            let height = match height {
                Some(h) => h,
                None => module.store().last_height()?.map_or(1, |h| h + 1),
            };
            let outcome = module.tick_with_kv_bank(height)?;
            print_json(&serde_json::json!({
                "height": outcome.height,
                "diff": outcome.diff,
                "unbonds_released": outcome.unbonds_released,
                "commission_purged": outcome.commission_purged,
                "minted": outcome.minted,
                "inflation": outcome.inflation.to_string(),
            }))?;
        }
        Command::Query { what } => match what {
            QueryCommand::Candidate { pub_key } => {
                let pk = PublicKey::from_hex(&pub_key)?;
                print_json(&query::candidate(&store, &pk)?)?;
            }
            QueryCommand::Candidates => print_json(&query::candidates(&store)?)?,
            QueryCommand::Bond { delegator, pub_key } => {
                let delegator = Address::parse(&delegator)?;
                let pk = PublicKey::from_hex(&pub_key)?;
                print_json(&query::delegator_bond(&store, &delegator, &pk)?)?;
            }
            QueryCommand::DelegatorCandidates { delegator } => {
                let delegator = Address::parse(&delegator)?;
                print_json(&query::delegator_candidates(&store, &delegator)?)?;
            }
            QueryCommand::Service { name } => {
                print_json(&query::service_definition(&store, &name)?)?;
            }
        },
    }

    Ok(())
}
