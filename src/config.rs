use std::env;

pub const DEFAULT_URL: &str = "http://localhost:3000";
pub const URL_VAR: &str = "FETCH_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl FetchConfig {
    /// Reads the endpoint from the environment, loading a `.env` file first if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        Self { url }
    }
}
