use std::sync::Once;

/// How the host's diagnostics are filtered and printed.
///
/// Device selection reports every device it sees at `info`, scene handoff and
/// teardown at `debug`, and material bookkeeping at `trace`. `env_filter`
/// takes `env_logger` syntax, e.g. "lumen_host=debug,wgpu=warn"; `None` falls
/// back to `RUST_LOG`, then to `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` for the host process.
///
/// Call before `select_devices` so the device listing is not lost. Only the
/// first call configures anything; an already installed logger is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = effective_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        // A test harness or embedding host may already own the logger.
        if builder.try_init().is_ok() {
            log::debug!("host logging on ({filter})");
        }
    });
}

/// Explicit filter, then `RUST_LOG`, then `info` so device listings show.
fn effective_filter(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .or(from_env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

const DEFAULT_FILTER: &str = "info";
