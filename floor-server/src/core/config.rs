use std::path::PathBuf;

/// Server configuration
///
/// # Environment Variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | FLOOR_WORK_DIR | /var/lib/mesa/floor | Work directory (database, logs) |
/// | FLOOR_HTTP_PORT | 3000 | HTTP API port |
/// | FLOOR_LOG_LEVEL | info | Log filter directive |
/// | FLOOR_ENV | development | Runtime environment |
/// | FLOOR_POLL_SECONDS | 5 | Polling interval hint handed to clients |
///
/// # Example
///
/// ```ignore
/// FLOOR_WORK_DIR=/data/floor FLOOR_HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log filter directive (`EnvFilter` syntax)
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Poll interval hint surfaced through `/health`; clients poll, the
    /// server never pushes
    pub poll_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("FLOOR_WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/mesa/floor".into()),
            http_port: std::env::var("FLOOR_HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("FLOOR_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("FLOOR_ENV").unwrap_or_else(|_| "development".into()),
            poll_seconds: std::env::var("FLOOR_POLL_SECONDS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Override work dir and port, keeping the rest from the environment
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// `<work_dir>/database`
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// `<work_dir>/database/floor.redb`
    pub fn database_path(&self) -> PathBuf {
        self.database_dir().join("floor.redb")
    }

    /// `<work_dir>/logs`
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_layout() {
        let config = Config::with_overrides("/tmp/floor-test", 8088);

        assert_eq!(config.http_port, 8088);
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/floor-test/database/floor.redb")
        );
        assert_eq!(config.logs_dir(), PathBuf::from("/tmp/floor-test/logs"));
    }
}
