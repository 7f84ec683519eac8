//! Logger bootstrap for the binary

use env_logger::{Builder, Env, Target};

/// Install the stderr logger. `SIDEWAY_LOG` overrides `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let env = Env::new().filter_or("SIDEWAY_LOG", default_level);
    if Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("logger already initialized");
    }
}
