use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Presentation settings for the donor intake form
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Title shown above the form and in the page title
    pub title: String,
    /// Label of the submit button
    pub submit_label: String,
    /// Optional client-side companion script loaded with the form
    pub client_script: Option<String>,
    /// chrono format string used to parse `lastDonationDate`
    pub date_format: String,
    /// Directory whose `.jinja` files override the embedded templates
    pub template_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            form: FormConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 64 * 1024; // 64KB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl FormConfig {
    pub const DEFAULT_TITLE: &'static str = "Blood Requirement Registration Form";
    pub const DEFAULT_SUBMIT_LABEL: &'static str = "Submit";
    pub const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d";
    const DEFAULT_TEMPLATE_DIR: &'static str = "templates";

    pub fn from_env() -> Result<Self, String> {
        let title = env::var("FORM_TITLE").unwrap_or_else(|_| Self::DEFAULT_TITLE.to_string());
        let submit_label = env::var("FORM_SUBMIT_LABEL")
            .unwrap_or_else(|_| Self::DEFAULT_SUBMIT_LABEL.to_string());
        // Only reference a client script if the path is non-empty
        let client_script = env::var("FORM_CLIENT_SCRIPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let date_format = env::var("FORM_DATE_FORMAT")
            .unwrap_or_else(|_| Self::DEFAULT_DATE_FORMAT.to_string());
        if date_format.trim().is_empty() {
            return Err("FORM_DATE_FORMAT must not be empty".to_string());
        }
        let template_dir = env::var("TEMPLATE_DIR")
            .unwrap_or_else(|_| Self::DEFAULT_TEMPLATE_DIR.to_string())
            .into();

        Ok(Self {
            title,
            submit_label,
            client_script,
            date_format,
            template_dir,
        })
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            submit_label: Self::DEFAULT_SUBMIT_LABEL.to_string(),
            client_script: None,
            date_format: Self::DEFAULT_DATE_FORMAT.to_string(),
            template_dir: Self::DEFAULT_TEMPLATE_DIR.into(),
        }
    }
}
