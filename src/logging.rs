use env_logger::Env;
use log::LevelFilter;

/// Map stunneler's numeric `rem_log_level` onto a log filter.
/// 0 is errors only, 4 and above is full trace.
pub fn level_filter(level: i64) -> LevelFilter {
    match level {
        i64::MIN..=0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the global logger once, at startup. The config's level (when
/// the config loaded) picks the default filter; RUST_LOG still overrides.
pub fn init(conf_level: Option<i64>) {
    let default = conf_level.map(level_filter).unwrap_or(LevelFilter::Info);
    env_logger::Builder::from_env(Env::default().default_filter_or(default.as_str()))
        .format_timestamp_millis()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping_covers_the_whole_range() {
        assert_eq!(level_filter(-3), LevelFilter::Error);
        assert_eq!(level_filter(0), LevelFilter::Error);
        assert_eq!(level_filter(1), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Info);
        assert_eq!(level_filter(3), LevelFilter::Debug);
        assert_eq!(level_filter(4), LevelFilter::Trace);
        assert_eq!(level_filter(99), LevelFilter::Trace);
    }
}
