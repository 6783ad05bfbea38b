use crate::config::toml_config::ShopConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "shop-access")]
#[command(about = "Client-side access to the virtual shop's clients and orders")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Overrides api.base_url from the configuration file")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sum the item values of every order a client placed
    Payments {
        client_id: i64,

        #[arg(long, help = "Use the seeded orders instead of the shop API")]
        local: bool,
    },
    /// Run an order operation against the seeded in-memory repository
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OrderAction {
    Get { id: String },
    Delete { id: String },
    Add { order: String },
    Update { id: String, order: String },
}

impl CliConfig {
    /// Reads the configuration file (or defaults) and applies CLI overrides.
    pub fn load_shop_config(&self) -> Result<ShopConfig> {
        let mut config = match &self.config {
            Some(path) => ShopConfig::from_file(path)?,
            None => ShopConfig::default(),
        };

        if let Some(base_url) = &self.api_base_url {
            config.api.base_url = base_url.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments that parse as JSON are passed on as JSON; anything else is a
/// plain string. `"7"` becomes a number and `"x"` stays a string, so the
/// order service sees the caller's input as typed.
pub fn parse_cli_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
