// src/config.rs
//! Configuration loading: an optional `config.yaml` with one section per
//! environment, overlaid by environment variables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::convert::{CompanyLimit, ConversionOptions};
use crate::types::{DocumentType, StartDateField};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_BASE_URL: &str = "https://open.larksuite.com/open-apis";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_INLINE_COMPANIES_VAR: &str = "MAX_INLINE_COMPANIES";
const START_DATE_FIELD_VAR: &str = "START_DATE_FIELD";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub store: StoreConfig,
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub app_token: String,
    /// Sent verbatim as the bearer token.
    pub access_token: String,
    pub timeout_seconds: u64,
    pub tables: TableIds,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_token: String::new(),
            access_token: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            tables: TableIds::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableIds {
    pub career_history: String,
    pub recommendation: String,
    pub career_plan: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Unset means one field group per company.
    pub max_inline_companies: Option<usize>,
    /// Column name for the desired start date.
    pub start_date_field: StartDateField,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvironmentSection {
    store: StoreConfig,
    conversion: ConversionConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: EnvironmentSection,
    production: EnvironmentSection,
}

impl ConfigManager {
    /// Load `path` plus the process environment. A `company_limit` given on
    /// the command line replaces the configured one, and a bad
    /// `MAX_INLINE_COMPANIES` is then never read.
    pub fn load(path: &Path, company_limit: Option<CompanyLimit>) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);
        Self::load_with_limit(
            path,
            &environment,
            |key| std::env::var(key).ok(),
            company_limit,
        )
    }

    fn get_environment() -> String {
        std::env::var("CANDIDATE_DOCS_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Reads `path` if it exists, picks the section for `environment`, then
    /// applies overrides from `env`.
    pub fn load_from<F>(path: &Path, environment: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load_with_limit(path, environment, env, None)
    }

    /// Same as [`Self::load_from`], with a company limit that replaces the
    /// configured one.
    pub fn load_with_limit<F>(
        path: &Path,
        environment: &str,
        env: F,
        company_limit: Option<CompanyLimit>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_yaml::from_str::<ConfigFile>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            warn!("{} not found, using defaults", path.display());
            ConfigFile::default()
        };

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        let mut config = Self {
            environment: environment.to_string(),
            store: section.store,
            conversion: section.conversion,
        };
        match company_limit {
            Some(limit) => {
                config.apply_env(|key| env(key).filter(|_| key != MAX_INLINE_COMPANIES_VAR))?;
                config.set_company_limit(limit);
            }
            None => config.apply_env(env)?,
        }
        Ok(config)
    }

    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = &mut self.store;
        for (key, slot) in [
            ("TABLE_STORE_URL", &mut store.base_url),
            ("TABLE_STORE_APP_TOKEN", &mut store.app_token),
            ("TABLE_STORE_ACCESS_TOKEN", &mut store.access_token),
            ("CAREER_HISTORY_TABLE_ID", &mut store.tables.career_history),
            ("RECOMMENDATION_TABLE_ID", &mut store.tables.recommendation),
            ("CAREER_PLAN_TABLE_ID", &mut store.tables.career_plan),
        ] {
            if let Some(value) = env(key).filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }

        if let Some(value) = env(MAX_INLINE_COMPANIES_VAR) {
            let limit = CompanyLimit::from_setting(&value)
                .with_context(|| format!("Invalid {}: {}", MAX_INLINE_COMPANIES_VAR, value))?;
            self.set_company_limit(limit);
        }

        if let Some(value) = env(START_DATE_FIELD_VAR) {
            self.conversion.start_date_field = StartDateField::from_setting(&value)
                .with_context(|| format!("Invalid {}: {}", START_DATE_FIELD_VAR, value))?;
        }
        Ok(())
    }

    fn set_company_limit(&mut self, limit: CompanyLimit) {
        self.conversion.max_inline_companies = match limit {
            CompanyLimit::Unbounded => None,
            CompanyLimit::Inline(n) => Some(n),
        };
    }

    pub fn company_limit(&self) -> CompanyLimit {
        self.conversion.max_inline_companies.into()
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions::default()
            .with_company_limit(self.company_limit())
            .with_start_date_field(self.conversion.start_date_field)
    }

    /// The table a document type is stored in, if one is configured.
    pub fn table_id(&self, document_type: DocumentType) -> Option<&str> {
        let tables = &self.store.tables;
        let id = match document_type {
            DocumentType::CareerHistory => &tables.career_history,
            DocumentType::Recommendation => &tables.recommendation,
            DocumentType::CareerPlan => &tables.career_plan,
        };
        Some(id.as_str()).filter(|id| !id.is_empty())
    }

    /// Whether records of this type can be sent.
    pub fn is_configured(&self, document_type: DocumentType) -> bool {
        !self.store.app_token.is_empty()
            && !self.store.access_token.is_empty()
            && self.table_id(document_type).is_some()
    }
}
