use anyhow::{ensure, Context, Result};

use crate::models::{SkillCatalog, Template};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults produce a working local host.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_sessions: usize,
    pub skill_catalog: SkillCatalog,
    pub default_template: Template,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_sessions: parse_max_sessions(
                &std::env::var("MAX_SESSIONS").unwrap_or_else(|_| "256".to_string()),
            )?,
            skill_catalog: std::env::var("SKILL_CATALOG")
                .map(|list| SkillCatalog::parse(&list))
                .unwrap_or_default(),
            default_template: match std::env::var("DEFAULT_TEMPLATE") {
                Ok(name) => name.parse().context("DEFAULT_TEMPLATE is not a known template")?,
                Err(_) => Template::default(),
            },
        })
    }
}

fn parse_max_sessions(raw: &str) -> Result<usize> {
    let value = raw
        .trim()
        .parse::<usize>()
        .context("MAX_SESSIONS must be a positive integer")?;
    ensure!(value > 0, "MAX_SESSIONS must be a positive integer, got 0");
    Ok(value)
}
