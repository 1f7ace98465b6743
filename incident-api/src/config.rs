use crate::routes;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SUBMIT_BASE_URL: &str = "http://127.0.0.1:8002";

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const SUBMIT_BASE_URL_ENV: &str = "SUBMIT_BASE_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Report intake runs as a separate service.
    pub submit_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_SUBMIT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, submit_base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            submit_base_url: submit_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Values baked in at compile time, for the browser bundle.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("SUBMIT_BASE_URL").unwrap_or(DEFAULT_SUBMIT_BASE_URL),
        )
    }

    pub fn from_env() -> Self {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let submit =
            std::env::var(SUBMIT_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_SUBMIT_BASE_URL.into());
        Self::new(&base, &submit)
    }

    pub fn endpoint(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    pub fn submit_endpoint(&self) -> String {
        join(&self.submit_base_url, routes::SUBMIT_REQUEST)
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::new("https://api.example.org//", " http://intake:9000/ ");
        assert_eq!(cfg.base_url, "https://api.example.org");
        assert_eq!(
            cfg.endpoint(routes::LOGIN),
            "https://api.example.org/api/login"
        );
        assert_eq!(
            cfg.submit_endpoint(),
            "http://intake:9000/api/submitrequest"
        );
    }

    #[test]
    fn defaults_point_at_local_services() {
        let cfg = ApiConfig::default();
        assert_eq!(
            cfg.endpoint("api/allincidents"),
            "http://127.0.0.1:8000/api/allincidents"
        );
        assert!(cfg.submit_endpoint().starts_with("http://127.0.0.1:8002"));
    }
}
