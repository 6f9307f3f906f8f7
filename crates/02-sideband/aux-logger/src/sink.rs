use std::sync::Arc;

use parking_lot::Mutex;

/// `log` target used by [`LogSink`].
pub const TRACE_TARGET: &str = "dp_aux";

/// Destination for trace lines.
///
/// Emitting is infallible from the logger's point of view: a sink that cannot
/// deliver a line drops it.
pub trait TraceSink {
    fn emit(&self, line: &str);
}

/// Forwards lines to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&self, line: &str) {
        log::info!(target: TRACE_TARGET, "{line}");
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drains the recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}
