use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the user directory API
    pub directory_url: String,
    /// Bearer token for the directory, if it requires one
    pub directory_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            directory_url: env::var("DIRECTORY_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            directory_token: env::var("DIRECTORY_TOKEN").ok(),
        }
    }
}
