use env_logger::Env;
use log::LevelFilter;

/// Start logging for the viewer.
///
/// An explicit `--log-level` overrides everything. Without one, `RUST_LOG`
/// is honored and the viewer falls back to `info`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis().init();
}
