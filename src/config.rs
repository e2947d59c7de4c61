use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Reads CABINET_HOST / CABINET_PORT, falling back to defaults on
    /// absent or malformed values.
    pub fn from_env() -> Self {
        let host = env::var("CABINET_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("CABINET_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }
}
