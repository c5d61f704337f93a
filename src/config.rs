use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str =
    "https://job-application-tracker-backend-ip83.onrender.com";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl JsonConfig {
    pub fn config_path() -> Option<PathBuf> {
        let base = env::var("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .ok()
            .or_else(dirs::config_dir)?;
        Some(base.join("jobtrack").join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Self::default()),
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

pub struct Config {
    pub base_url: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Cli) -> Result<Self, String> {
        let json_config = JsonConfig::load().map_err(|e| e.to_string())?;

        // Base URL: CLI arg > env var > JSON config > default
        let base_url = args
            .api_url
            .clone()
            .or_else(|| env::var("JOBTRACK_API_URL").ok())
            .or(json_config.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Verbose: CLI flag > env var > JSON config > default
        let verbose = args.verbose
            || env::var("JOBTRACK_VERBOSE")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(json_config.session.verbose)
                .unwrap_or(false);

        Ok(Config { base_url, verbose })
    }
}
