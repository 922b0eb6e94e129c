use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Bearer token for the admin moderation routes
    pub admin_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            admin_api_key: env::var("ADMIN_API_KEY")
                .unwrap_or_else(|_| "dev-admin-key-not-for-production".to_string()),
        }
    }
}
