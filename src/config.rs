use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the export path
pub const EXPORT_PATH_ENV: &str = "HARVEST_EXPORT_PATH";

/// Shortest fetch timeout, in seconds; a zero timeout would fail every fetch
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Configuration for a harvester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Listing pages to fetch, in the order they are processed
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Keywords searched for in anchor text
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Spreadsheet written by each successful run
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Upper bound for a single page fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            keywords: default_keywords(),
            export_path: default_export_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply overrides taken from the environment
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(EXPORT_PATH_ENV) {
            if !path.is_empty() {
                ::log::debug!("Export path overridden by {}: {}", EXPORT_PATH_ENV, path);
                self.export_path = PathBuf::from(path);
            }
        }
        self
    }

    /// Fetch timeout, never shorter than [`MIN_TIMEOUT_SECS`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

/// Default listing page
fn default_sources() -> Vec<String> {
    vec!["https://abrava.com.br/associados/".to_string()]
}

/// Default HVAC keyword set
fn default_keywords() -> Vec<String> {
    ["ar-condicionado", "ventilação", "HVAC", "PMOC", "climatização"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

fn default_export_path() -> PathBuf {
    PathBuf::from("resultado_hvac.xlsx")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("hvac-harvest/{}", env!("CARGO_PKG_VERSION"))
}
