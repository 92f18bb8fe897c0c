//! Config handling

use tracing::log::LevelFilter;

/// Dependencies that are too chatty at info level, with the level they get
/// outside of debug mode.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("tracing", LevelFilter::Warn),
    ("tower_http", LevelFilter::Warn),
    ("reqwest", LevelFilter::Warn),
    ("rustls", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("h2", LevelFilter::Info),
];

/// Sets up logging based on the debug flag.
///
/// Debug mode also logs the raw and cleaned model replies.
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = QUIET_MODULES
            .iter()
            .fold(logger, |logger, (module, level)| {
                logger.with_module_level(module, *level)
            });
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}
