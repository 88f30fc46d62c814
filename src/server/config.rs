use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOSTNAME: &str = "localhost";
const DEFAULT_PORT: u16 = 1440;
const DEFAULT_AVATAR_DIR: &str = "public/avatars";

pub struct Config {
    pub database_url: String,

    pub hostname: String,
    pub port: u16,
    /// `true` when `APP_ENV` is `development`.
    pub development: bool,

    /// Allowed CORS origins; `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    pub avatar_dir: String,

    pub gemini_api_key: Option<String>,
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SERVER_PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = std::env::var("CORS_ORIGIN")
            .ok()
            .and_then(|value| parse_origins(&value));

        Ok(Self {
            database_url,
            hostname: std::env::var("SERVER_HOSTNAME")
                .unwrap_or_else(|_| DEFAULT_HOSTNAME.to_string()),
            port,
            development: std::env::var("APP_ENV")
                .map(|env| env.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
            cors_origins,
            avatar_dir: std::env::var("AVATAR_DIR")
                .unwrap_or_else(|_| DEFAULT_AVATAR_DIR.to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            seed_database: std::env::var("SEED_DATABASE")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

/// `*` or an empty list means any origin.
fn parse_origins(value: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = value
        .split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn wildcard_allows_any_origin() {
        assert_eq!(parse_origins("*"), None);
        assert_eq!(parse_origins(" "), None);
    }

    #[test]
    fn splits_comma_separated_origins() {
        assert_eq!(
            parse_origins("http://a.edu, http://b.edu"),
            Some(vec!["http://a.edu".to_string(), "http://b.edu".to_string()])
        );
    }
}
