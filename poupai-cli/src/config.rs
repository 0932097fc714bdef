use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use poupai_api::ApiClient;
use poupai_core::{local_today, parse_timezone};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::ensure_poupai_home;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiSection,
    pub user: UserSection,
    #[serde(default)]
    pub ledger: LedgerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSection {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSection {
    pub id: i64,
    /// IANA zone used to decide what "today" is. System zone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSection {
    pub page_size: u32,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self { page_size: 30 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSection {
                base_url: "http://192.168.1.8:5177".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            user: UserSection {
                id: 1,
                timezone: Some("America/Sao_Paulo".to_string()),
            },
            ledger: LedgerSection::default(),
        }
    }
}

impl Config {
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::with_timeout(&self.api.base_url, Duration::from_secs(self.api.timeout_secs))
            .with_context(|| format!("configure API client for {}", self.api.base_url))
    }

    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.user
            .timezone
            .as_deref()
            .map(parse_timezone)
            .transpose()
    }

    pub fn today(&self) -> Result<NaiveDate> {
        Ok(local_today(self.timezone()?))
    }

    /// `POUPAI_API_URL` wins over the file
    fn apply_env(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_poupai_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    let cfg = if p.exists() {
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        parse_config(&s)?
    } else {
        Config::default()
    };
    Ok(cfg.apply_env(std::env::var("POUPAI_API_URL").ok()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    println!("# {}", config_path()?.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
