use clap::Parser;
use fluff::{Config, Field, Level, LogBridge, Logger, Payload, RenderOptions, Sink};
use log::{debug, error};

mod cli;

/// Diagnostics of the binary itself go to stderr through fluff as well.
fn setup_diagnostics() {
    let minimum_level = std::env::var("FLUFF_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Warning);

    let options = RenderOptions {
        minimum_level,
        prefix: "fluff".to_string(),
        include_time: false,
        sink: Sink::stderr(),
        ..RenderOptions::default()
    };

    let _ = LogBridge::install(Logger::new(options, Default::default()));
}

fn build_logger(args: &cli::Args) -> anyhow::Result<Logger> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    config.apply_env()?;

    let options = &mut config.options;
    if let Some(level) = args.minimum_level {
        options.minimum_level = level;
    }
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(format) = args.date_format {
        options.date_format = format;
    }
    if let Some(format) = args.time_format {
        options.time_format = format;
    }
    options.include_date |= args.date;
    options.include_time &= !args.no_time;
    options.include_caller |= args.caller;
    options.throw_on_fatal &= !args.no_throw;

    Ok(config.into_logger())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_diagnostics();

    let args = cli::Args::parse();
    let logger = build_logger(&args)?;

    debug!("Rendering with {:?}", logger.options);

    let fields: Vec<Field> = args.args.iter().chain(&args.lists).cloned().collect();
    let payload: Option<&dyn Payload> = if fields.is_empty() {
        None
    } else {
        Some(&fields)
    };

    if let Err(e) = logger.print(args.level, &args.message, payload) {
        if e.is_fatal() {
            std::process::exit(1);
        }
        error!("Failed to print line: {}", e);
        return Err(e.into());
    }

    Ok(())
}
