use std::env;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api";

/// Runtime settings. The backend url is only used by the diagnostic
/// endpoints; the mock endpoints never leave the process.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            backend_url: env::var("BACKEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
