//! Runtime environment for the client: where the backend lives.
//! Configuration comes from environment variables with compiled-in defaults;
//! the CLI layers its flag overrides on top.

use std::env;

pub const API_URL_ENV: &str = "CREWGATE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5228/api";

#[derive(Debug, Clone)]
pub struct Environment {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_url: String,
}

impl Environment {
    pub fn from_env() -> Self {
        let api_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_api_url(api_url)
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self { api_url }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let env = Environment::with_api_url("http://localhost:8080/api///");
        assert_eq!(env.api_url, "http://localhost:8080/api");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(Environment::default().api_url, DEFAULT_API_URL);
    }
}
