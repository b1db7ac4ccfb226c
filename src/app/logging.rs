use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `-v` enables debug output for this crate and `-vv` trace output; without
/// it `RUST_LOG` is honored, defaulting to warnings only.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,eniscope=debug"),
        _ => EnvFilter::new("warn,eniscope=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
