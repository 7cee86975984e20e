extern crate log;
extern crate pretty_env_logger;

use log::LevelFilter;
use std::env;

/// Timed pretty logger at `info`, refined by `RUST_LOG` when set.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
