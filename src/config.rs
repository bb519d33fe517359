use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, WordFreqError};

pub const DEFAULT_URL: &str = "https://gutenberg.net.au/ebooks01/0100021.txt";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Document fetched when no local file is given
    pub url: String,
    /// Number of words shown in the chart
    pub top_n: usize,
    /// Worker threads for the map and reduce stages (None = one per cpu)
    pub workers: Option<usize>,
    /// Words of interest; empty counts every word
    pub words: Vec<String>,
    /// Columns used by the longest bar
    pub chart_width: usize,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            url: DEFAULT_URL.to_string(),
            top_n: 10,
            workers: None,
            words: Vec::new(),
            chart_width: 50,
            timeout_secs: 30,
        };
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        return Ok(config);
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(WordFreqError::Validation("top_n must be greater than 0".to_string()));
        }
        if self.workers == Some(0) {
            return Err(WordFreqError::Validation("workers must be greater than 0".to_string()));
        }
        if self.chart_width == 0 {
            return Err(WordFreqError::Validation("chart_width must be greater than 0".to_string()));
        }
        return Ok(());
    }

    pub fn worker_count(&self) -> usize {
        return self.workers.unwrap_or_else(num_cpus::get);
    }

    pub fn timeout(&self) -> Duration {
        return Duration::from_secs(self.timeout_secs);
    }
}
