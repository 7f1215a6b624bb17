use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub sql_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            sqlite_path: "./data/board.sqlite".to_string(),
            database_url: None,
            max_connections: 10,
            sql_logging: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.server_port);

        let sqlite_path = env::var("SQLITE_PATH").unwrap_or(defaults.sqlite_path);
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.max_connections);

        let sql_logging = env::var("DB_SQL_LOGGING")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.sql_logging);

        Self {
            server_port,
            sqlite_path,
            database_url,
            max_connections,
            sql_logging,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }
}
