//! Daemon configuration with TOML file support.
//!
//! Decimal values (inflation rates, shares, commission) are written as
//! strings, e.g. `inflation = "0.07"`, so they are parsed exactly.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stake_engine::GenesisCandidate;
use stake_types::{Address, Decimal, Description, Params, PublicKey, StakeTypesError};
use stake_utils::LogFormat;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Directory of the LMDB environment.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    /// Genesis parameters; unset fields take the genesis defaults.
    #[serde(default)]
    pub params: Params,

    /// Candidates bonded at genesis.
    #[serde(default)]
    pub genesis: Vec<GenesisCandidateConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenesisCandidateConfig {
    /// Hex-encoded public key.
    pub pub_key: String,
    pub owner: String,
    pub shares: Decimal,
    #[serde(default)]
    pub commission: Decimal,
    #[serde(default)]
    pub moniker: String,
}

impl GenesisCandidateConfig {
    pub fn to_genesis(&self) -> Result<GenesisCandidate, StakeTypesError> {
        Ok(GenesisCandidate {
            pub_key: PublicKey::from_hex(&self.pub_key)?,
            owner: Address::parse(&self.owner)?,
            shares: self.shares,
            commission: self.commission,
            description: Description {
                moniker: self.moniker.clone(),
                ..Description::default()
            },
        })
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./stake_data")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_map_size() -> usize {
    stake_store_lmdb::environment::DEFAULT_MAP_SIZE
}

impl DaemonConfig {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("parsing daemon config")
    }

    pub fn genesis_candidates(&self) -> anyhow::Result<Vec<GenesisCandidate>> {
        self.genesis
            .iter()
            .map(|g| {
                g.to_genesis()
                    .with_context(|| format!("genesis candidate {}", g.pub_key))
            })
            .collect()
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            map_size: default_map_size(),
            params: Params::default(),
            genesis: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = DaemonConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.data_dir, PathBuf::from("./stake_data"));
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.params, Params::default());
        assert!(config.genesis.is_empty());
    }

    #[test]
    fn partial_params_override_defaults() {
        let toml = r#"
            log_format = "json"

            [params]
            max_vals = 4
            inflation = "0.10"
            total_supply = 1000000

            [[genesis]]
            pub_key = "0a0b"
            owner = "alice"
            shares = "250"
            commission = "0.05"
        "#;
        let config = DaemonConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.params.max_vals, 4);
        assert_eq!(config.params.inflation, dec!(0.10));
        assert_eq!(config.params.goal_bonded, dec!(0.67));

        let genesis = config.genesis_candidates().unwrap();
        assert_eq!(genesis[0].pub_key, PublicKey::new(vec![0x0a, 0x0b]));
        assert_eq!(genesis[0].shares, dec!(250));
        assert_eq!(genesis[0].commission, dec!(0.05));
    }

    #[test]
    fn bad_genesis_key_is_reported() {
        let toml = r#"
            [[genesis]]
            pub_key = "xyz"
            owner = "alice"
            shares = "1"
        "#;
        let config = DaemonConfig::from_toml_str(toml).unwrap();
        assert!(config.genesis_candidates().is_err());
    }
}
