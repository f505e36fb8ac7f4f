use log::LevelFilter;

/// Initialize the logger at `level`. Module directives in `RUST_LOG` are
/// applied on top.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}
