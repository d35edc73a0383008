//! Logging configuration
//!
//! Initializes tracing for the application. Logs go to stderr so stdout
//! only carries rendered output.

/// Initializes logging with the specified level.
///
/// `RUST_LOG` takes precedence over `level`. A second call is a no-op.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging("debug");
        init_logging("info");
    }
}
