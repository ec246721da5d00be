use chrono::{Local, TimeZone};

use crate::{Buffer, FixedClock, Level, Logger, RenderOptions, Sink};

/// 2024-03-05 14:07:09 local time.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(2024, 3, 5, 14, 7, 9)
            .single()
            .expect("Failed to build fixed time"),
    )
}

/// Options with every optional segment off and the gate at Info.
pub fn plain_options() -> RenderOptions {
    RenderOptions {
        include_caller: false,
        include_date: false,
        include_time: false,
        minimum_level: Level::Info,
        prefix: String::new(),
        ..RenderOptions::default()
    }
}

/// A logger writing into a buffer, with a frozen clock.
pub fn capture_logger(options: RenderOptions) -> (Logger, Buffer) {
    let (sink, buffer) = Sink::buffer();
    let options = RenderOptions { sink, ..options };
    let logger = Logger::new(options, Default::default()).with_clock(fixed_clock());
    (logger, buffer)
}

/// Removes ANSI escape sequences.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Captured output without colors.
pub fn plain(buffer: &Buffer) -> String {
    strip_ansi(&buffer.contents())
}

/// Captured write calls without colors.
pub fn plain_chunks(buffer: &Buffer) -> Vec<String> {
    buffer.chunks().iter().map(|c| strip_ansi(c)).collect()
}
