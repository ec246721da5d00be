//! Output sinks.
//!
//! A sink receives the text of a rendered line, possibly in several chunks per
//! line. The renderer calls it in segment order and never buffers on its own.

use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::Arc,
};

use parking_lot::Mutex;

type SinkFn = dyn Fn(&str) -> io::Result<()> + Send + Sync;
type FlushFn = dyn Fn() -> io::Result<()> + Send + Sync;

/// Destination of rendered text.
#[derive(Clone)]
pub struct Sink {
    write: Arc<SinkFn>,
    flush: Option<Arc<FlushFn>>,
}

impl Sink {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        Self {
            write: Arc::new(f),
            flush: None,
        }
    }

    /// Attaches what [`Sink::flush`] should do. Without it, flushing is a no-op.
    pub fn with_flush<F>(mut self, f: F) -> Self
    where
        F: Fn() -> io::Result<()> + Send + Sync + 'static,
    {
        self.flush = Some(Arc::new(f));
        self
    }

    /// Writes to standard output, flushing after every chunk.
    pub fn stdout() -> Self {
        Self::from_fn(|chunk| {
            let mut out = io::stdout().lock();
            out.write_all(chunk.as_bytes())?;
            out.flush()
        })
        .with_flush(|| io::stdout().flush())
    }

    pub fn stderr() -> Self {
        Self::from_fn(|chunk| io::stderr().lock().write_all(chunk.as_bytes()))
            .with_flush(|| io::stderr().flush())
    }

    /// Appends to the file at `path`, creating it if needed.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let file: Arc<Mutex<File>> = Arc::new(Mutex::new(file));
        let flushed = file.clone();

        Ok(Self::from_fn(move |chunk| file.lock().write_all(chunk.as_bytes()))
            .with_flush(move || flushed.lock().flush()))
    }

    /// An in-memory sink, together with a handle to read what it received.
    pub fn buffer() -> (Self, Buffer) {
        let buffer = Buffer::default();
        let handle = buffer.clone();

        let sink = Self::from_fn(move |chunk| {
            handle.0.lock().push(chunk.to_string());
            Ok(())
        });

        (sink, buffer)
    }

    pub fn write(&self, chunk: &str) -> io::Result<()> {
        (self.write)(chunk)
    }

    pub fn flush(&self) -> io::Result<()> {
        match &self.flush {
            Some(flush) => flush(),
            None => Ok(()),
        }
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sink(..)")
    }
}

/// Text captured by [`Sink::buffer`], kept as the individual write calls.
#[derive(Debug, Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<String>>>);

impl Buffer {
    /// Every chunk written so far, in write order.
    pub fn chunks(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn contents(&self) -> String {
        self.0.lock().concat()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}
