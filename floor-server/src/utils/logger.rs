//! Logging Infrastructure
//!
//! Structured logging setup for development (stdout) and production
//! (daily-rolling files under the work directory).

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (info level, stdout)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `log_level` accepts an `EnvFilter` directive string, so both `"debug"`
/// and `"info,floor_server=debug"` work. File output is only enabled when
/// `log_dir` names an existing directory.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "floor-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
