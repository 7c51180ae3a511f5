use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::models::SkillCatalog;
use crate::page::{page_contract, PageContract};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub catalog: Arc<SkillCatalog>,
    /// Controls found in the served page; actions needing absent ones are skipped.
    pub contract: Arc<PageContract>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = config.skill_catalog.clone();
        let contract = page_contract(&catalog)?;
        Ok(Self {
            sessions: SessionStore::new(config.max_sessions, config.default_template),
            catalog: Arc::new(catalog),
            contract: Arc::new(contract),
        })
    }
}
