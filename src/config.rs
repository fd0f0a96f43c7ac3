use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SUBMIT_PATH: &str = "/submit";
pub const DEFAULT_DATA_PATH: &str = "/data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub submit_path: String,
    pub data_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM.to_string(),
            submit_path: DEFAULT_SUBMIT_PATH.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

pub fn resolve_config() -> Config {
    resolve_with(|key| env::var(key).ok())
}

fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Config {
    let port = lookup("PORT")
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let upstream_url = lookup("UPSTREAM_URL")
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());

    Config {
        port,
        upstream_url,
        submit_path: endpoint_path(lookup("SUBMIT_PATH"), DEFAULT_SUBMIT_PATH),
        data_path: endpoint_path(lookup("DATA_PATH"), DEFAULT_DATA_PATH),
    }
}

fn endpoint_path(value: Option<String>, default: &str) -> String {
    match value.map(|value| value.trim().to_string()) {
        Some(path) if path.starts_with('/') => path,
        Some(path) if !path.is_empty() => format!("/{path}"),
        _ => default.to_string(),
    }
}
