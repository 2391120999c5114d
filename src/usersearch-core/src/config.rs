use serde::{Deserialize, Serialize};

/// Settings for a `SearchClient`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub url: String,
    #[serde(default)]
    pub access_token: String,

    /// Whole-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Requests asking for more than this are clamped down to it
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,
}

pub fn default_timeout_ms() -> u64 {
    1000
}

pub fn default_max_page_size() -> i64 {
    25
}

impl ClientConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
            access_token: String::new(),
            timeout_ms: default_timeout_ms(),
            max_page_size: default_max_page_size(),
        }
    }
}

/// Settings for the reference search server
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: String,

    /// JSON file holding the user records
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// When set, requests must carry this value in the `AccessToken` header
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Base name of the JSON log file inside `log_dir`
    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Rotated files kept per day
    #[serde(default = "default_log_max_files")]
    pub log_max_files: usize,
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_dataset_path() -> String {
    "./data/dataset.json".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

fn default_log_file() -> String {
    "usersearch-server.log".to_string()
}

fn default_log_max_files() -> usize {
    9
}

impl ServerConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            dataset_path: default_dataset_path(),
            access_token: None,
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            log_max_files: default_log_max_files(),
        }
    }
}
