use std::env;

/// Application configuration, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_api_token: String,
    pub bind_addr: String,
}

impl Config {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let admin_api_token =
            env::var("ADMIN_API_TOKEN").expect("ADMIN_API_TOKEN must be set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Self {
            database_url,
            admin_api_token,
            bind_addr: format!("{host}:{port}"),
        }
    }
}
