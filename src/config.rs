use serde::{Deserialize, Serialize};
use std::fs;

use anyhow::Context;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Accounts seeded into the in-memory store by the demo driver
    #[serde(default = "default_seed_accounts")]
    pub seed_accounts: Vec<SeedAccount>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SeedAccount {
    pub id: u64,
    /// Opening balance, parsed through the money module
    pub balance: String,
}

fn default_seed_accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount {
            id: 1001,
            balance: "1000.00".to_string(),
        },
        SeedAccount {
            id: 1002,
            balance: "250.00".to_string(),
        },
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "ledger.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            seed_accounts: default_seed_accounts(),
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{env}.yaml");
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path}"))?;
        serde_yaml::from_str(&content).context("Failed to parse config yaml")
    }

    /// Load `config/{env}.yaml`, falling back to defaults when absent.
    pub fn load_or_default(env: &str) -> Self {
        Self::load(env).unwrap_or_default()
    }
}
