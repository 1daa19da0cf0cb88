//! Service settings read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_RULES_DIR: &str = "./config/ph_preview";

/// Settings for the preview HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the server binds to (`SERVER_ADDR`).
    pub server_addr: SocketAddr,
    /// Directory holding the rule YAML files (`PREVIEW_RULES_DIR`).
    pub rules_dir: PathBuf,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr_raw =
            lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr =
            server_addr_raw
                .parse::<SocketAddr>()
                .map_err(|e| EngineError::InvalidSetting {
                    name: "SERVER_ADDR".to_string(),
                    message: format!("'{}' is not a socket address: {}", server_addr_raw, e),
                })?;

        let rules_dir = lookup("PREVIEW_RULES_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RULES_DIR.to_string());

        Ok(Self {
            server_addr,
            rules_dir: PathBuf::from(rules_dir),
        })
    }
}
