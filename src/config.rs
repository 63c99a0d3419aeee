use std::{net::SocketAddr, time::Duration};

use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Process configuration, read once at startup from flags or the environment
/// (a `.env` file is loaded first by the binary).
#[derive(Clone, Parser)]
#[command(name = "calorie-lens", version, about = "Upload a meal photo, get a calorie table")]
pub struct Config {
    /// Bearer token for the vision API. Left empty, requests are still sent
    /// and the API's rejection is shown to the user.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Chat-completions endpoint of the vision API.
    #[arg(long, env = "VISION_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait for the vision API; 0 waits forever.
    #[arg(long, env = "VISION_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn vision(&self) -> VisionSettings {
        VisionSettings {
            api_key: self.api_key.clone(),
            endpoint: self.api_url.clone(),
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
        }
    }
}

/// What the vision client needs, handed to it explicitly.
#[derive(Clone)]
pub struct VisionSettings {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
}
