use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Outbound SMS gateway configuration.
    pub sms: SmsConfig,
    /// Blob storage configuration.
    pub storage: StorageConfig,
}

/// Configuration for the SMS notification gateway.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Gateway endpoint URL.
    pub gateway_url: String,
    /// Per-deployment API key.
    pub api_key: String,
    /// Deployment-level owner phone, used when settings carry none.
    pub owner_phone: Option<String>,
}

/// Which blob storage backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Local,
    S3,
}

/// Configuration for blob storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Root directory for the local backend.
    pub local_root: String,
    /// Base URL that uploaded objects are publicly served from.
    pub public_base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `3000`                             |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`            |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                               |
    /// | `SMS_GATEWAY_URL`      | `https://textbelt.com/text`        |
    /// | `SMS_API_KEY`          | `textbelt`                         |
    /// | `OWNER_PHONE`          | (none)                             |
    /// | `STORAGE_BACKEND`      | `local`                            |
    /// | `STORAGE_LOCAL_ROOT`   | `storage`                          |
    /// | `STORAGE_PUBLIC_URL`   | `http://localhost:3000/storage`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let sms = SmsConfig {
            gateway_url: std::env::var("SMS_GATEWAY_URL")
                .unwrap_or_else(|_| hauler_sms::DEFAULT_GATEWAY_URL.into()),
            api_key: std::env::var("SMS_API_KEY")
                .unwrap_or_else(|_| hauler_sms::DEFAULT_API_KEY.into()),
            owner_phone: std::env::var("OWNER_PHONE").ok(),
        };

        let backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".into())
            .as_str()
        {
            "local" => StorageBackend::Local,
            "s3" => StorageBackend::S3,
            other => panic!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        };

        let storage = StorageConfig {
            backend,
            local_root: std::env::var("STORAGE_LOCAL_ROOT").unwrap_or_else(|_| "storage".into()),
            public_base_url: std::env::var("STORAGE_PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000/storage".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            sms,
            storage,
        }
    }
}
