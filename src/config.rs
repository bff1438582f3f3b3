use anyhow::{Context, Result};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::pagination::MAX_PAGE_SIZE;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env().unwrap_or_else(|e| panic!("Invalid configuration: {e:#}"))
});

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub results_per_page: u64,
    pub simulated_latency: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let results_per_page = parse_env_or_default("ROSE_RESULTS_PER_PAGE", 10u64)?;
        if !(1..=MAX_PAGE_SIZE).contains(&results_per_page) {
            anyhow::bail!("ROSE_RESULTS_PER_PAGE must be in [1, {MAX_PAGE_SIZE}], got {results_per_page}");
        }
        Ok(Config {
            host: get_env_or_default("ROSE_HOST", "127.0.0.1"),
            port: parse_env_or_default("ROSE_PORT", 3000)?,
            results_per_page,
            simulated_latency: Duration::from_millis(parse_env_or_default(
                "ROSE_SIMULATED_LATENCY_MS",
                500,
            )?),
            static_dir: get_env_or_default("ROSE_STATIC_DIR", "static"),
        })
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse environment variable {key}={raw:?}")),
        Err(_) => Ok(default),
    }
}
