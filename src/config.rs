use std::{env, path::PathBuf};

/// The single username/password pair accepted by login. Read once at
/// startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub credentials: Credentials,
    pub jwt_secret: String,
}

impl Config {
    /// Reads configuration from the environment (after `dotenvy` has loaded
    /// any `.env` file). Only the signing secret is mandatory.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            data_path: env::var("DATA_PATH")
                .unwrap_or_else(|_| "data/dishes.json".to_string())
                .into(),
            credentials: Credentials {
                username: env::var("API_USERNAME")
                    .unwrap_or_else(|_| "defaultUsername".to_string()),
                password: env::var("API_PASSWORD")
                    .unwrap_or_else(|_| "defaultPassword".to_string()),
            },
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set!"),
        }
    }
}
