// Optional stderr logging for consumers without a tracing subscriber

use tracing_subscriber::EnvFilter;

/// Install a stderr log subscriber filtered by the `DFST_LOG` environment
/// variable (`warn` when unset). Calling it again, or after another
/// subscriber was installed, does nothing.
#[unsafe(no_mangle)]
pub extern "C" fn DFST_enableLogging() {
    let filter = EnvFilter::try_from_env("DFST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("logging enabled");
    }
}
