use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging; `debug` wins over `quiet`
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let result = SimpleLogger::new()
        .with_level(log_level)
        .with_module_level("notify", LevelFilter::Warn)
        .with_module_level("tower_http", log_level.min(LevelFilter::Info))
        .init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log_level
}
