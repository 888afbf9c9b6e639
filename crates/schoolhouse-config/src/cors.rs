use std::env;
use std::fmt;

/// The CORS layer always allows credentials, which browsers (and tower-http)
/// refuse to combine with a wildcard origin.
pub const WILDCARD_ORIGIN: &str = "*";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardOriginError;

impl fmt::Display for WildcardOriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "ALLOWED_ORIGINS cannot contain `*` because credentials are allowed; list origins explicitly",
        )
    }
}

impl std::error::Error for WildcardOriginError {}

impl CorsConfig {
    pub fn from_env() -> Result<Self, WildcardOriginError> {
        let origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());
        Self::parse(&origins)
    }

    /// Parses a comma-separated origin list.
    pub fn parse(origins: &str) -> Result<Self, WildcardOriginError> {
        let allowed_origins: Vec<String> = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if allowed_origins.iter().any(|o| o == WILDCARD_ORIGIN) {
            return Err(WildcardOriginError);
        }

        Ok(Self { allowed_origins })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}
