use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/feedback.json";

const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL của feedback API server
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Hỏi xác nhận trước khi gửi phản hồi
    #[serde(default = "default_confirm_before_submit")]
    pub confirm_before_submit: bool,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_confirm_before_submit() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            confirm_before_submit: default_confirm_before_submit(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
