use serde::{Deserialize, Serialize};

/// Placeholder answer returned for every question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            ttl: default_ttl(),
        }
    }
}

fn default_address() -> String {
    "8.8.8.8".to_string()
}

fn default_ttl() -> u32 {
    60
}
