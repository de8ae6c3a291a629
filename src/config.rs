pub const DEFAULT_API_BASE_URL: &str = "https://xkcd.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        AppConfig {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `COMIC_API_BASE_URL`, falling back to the public xkcd API.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("COMIC_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_API_BASE_URL));

        AppConfig::new(api_base_url.trim())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = AppConfig::new("http://127.0.0.1:8080//");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn default_points_at_xkcd() {
        assert_eq!(AppConfig::default().api_base_url, "https://xkcd.com");
    }
}
