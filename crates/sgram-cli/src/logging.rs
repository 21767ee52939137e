use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "SGRAMS_LOG";

/// Installs the stderr subscriber.
///
/// `SGRAMS_LOG` wins; otherwise `-v`/`-vv` pick `info`/`debug`, else `fallback`.
pub fn init(verbosity: u8, fallback: &str) {
    let default = match verbosity {
        0 => fallback,
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    if Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }
}
