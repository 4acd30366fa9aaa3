use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Logs to stderr only, so that results on stdout stay clean. 
/// Location, target and thread are not shown.
pub fn init_simple_logger(level: LevelFilter, color: bool) -> Result<(), log::SetLoggerError> { 
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    let color = if color { ColorChoice::Auto } else { ColorChoice::Never };

    TermLogger::init(level, config, TerminalMode::Stderr, color)
}
