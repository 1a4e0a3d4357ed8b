pub mod logs;

pub use logs::*;

use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "placebot=info";

/// `RUST_LOG` when it is set and valid, otherwise `placebot=info`.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the stderr tracing subscriber.
pub fn init_tracing() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(rust_log.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        );
    set_global_default(subscriber)?;
    Ok(())
}
