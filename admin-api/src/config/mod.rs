use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Obfuscated path segment serving the login page.
    pub secret_path: String,
    /// The single shared admin password.
    pub password: String,
    /// Session cookie lifetime in days.
    pub session_days: i64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8081)?
            .set_default("app.env", "development")?
            // Insecure defaults, expected to be overridden in production.
            .set_default("admin.secret_path", "xwayp-admin-2024")?
            .set_default("admin.password", "xwayp2024secure")?
            .set_default("admin.session_days", 7)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}
