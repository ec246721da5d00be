use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use log::{Log, Metadata, Record};

use crate::{tests::helpers::*, Level, LogBridge, Logger, RenderOptions, Sink};

#[test]
fn test_bridge_renders_log_records() {
    let (logger, buffer) = capture_logger(RenderOptions {
        include_caller: true,
        ..plain_options()
    });
    let bridge = LogBridge::new(logger);

    bridge.log(
        &Record::builder()
            .level(log::Level::Warn)
            .args(format_args!("disk at {}%", 91))
            .file(Some("src/storage/disk.rs"))
            .line(Some(42))
            .build(),
    );

    assert_eq!(plain(&buffer), "WARN <disk.rs:42> disk at 91%\n");
}

fn log_trace(bridge: &LogBridge) {
    bridge.log(
        &Record::builder()
            .level(log::Level::Trace)
            .args(format_args!("noise"))
            .build(),
    );
}

#[test]
fn test_bridge_gates_by_minimum_level() {
    let (logger, buffer) = capture_logger(plain_options());
    let bridge = LogBridge::new(logger);
    let trace = Metadata::builder().level(log::Level::Trace).build();

    assert!(!bridge.enabled(&trace));
    log_trace(&bridge);
    assert!(buffer.is_empty());

    // Lowering the level through the handle takes effect immediately
    bridge.logger().write().set_minimum_level(Level::Debug);
    assert!(bridge.enabled(&trace));
    log_trace(&bridge);
    assert_eq!(plain(&buffer), "DEBU noise\n");
}

#[test]
fn test_bridge_without_location() {
    let (logger, buffer) = capture_logger(RenderOptions {
        include_caller: true,
        ..plain_options()
    });
    let bridge = LogBridge::new(logger);

    bridge.log(
        &Record::builder()
            .level(log::Level::Error)
            .args(format_args!("boom"))
            .build(),
    );

    assert_eq!(plain(&buffer), "ERRO <unknown:0> boom\n");
}

// The only test installing a global `log` logger.
#[test]
fn test_installed_bridge_follows_level_changes() {
    let (logger, buffer) = capture_logger(RenderOptions {
        minimum_level: Level::Warning,
        ..plain_options()
    });
    let handle = LogBridge::install(logger).expect("Failed to install bridge");

    log::info!("before lowering");
    assert!(buffer.is_empty());

    handle.write().set_minimum_level(Level::Debug);
    log::info!("after lowering");
    log::debug!("debug too");

    assert_eq!(plain(&buffer), "INFO after lowering\nDEBU debug too\n");
}

#[test]
fn test_bridge_flushes_wrapped_sink() {
    let flushes = Arc::new(AtomicUsize::new(0));
    let counter = flushes.clone();
    let sink = Sink::from_fn(|_| Ok(())).with_flush(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });
    let bridge = LogBridge::new(Logger::new(
        RenderOptions {
            sink,
            ..plain_options()
        },
        Default::default(),
    ));

    bridge.flush();
    bridge.flush();

    assert_eq!(flushes.load(Ordering::SeqCst), 2);
}
