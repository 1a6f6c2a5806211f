use log::LevelFilter;

/// Logs go to stderr so they never mix with an image written to stdout.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
