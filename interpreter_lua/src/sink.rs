use common::logger;

/// Destination for the single human readable line an invocation emits on
/// failure. Shared by every running invocation.
pub trait LogSink : Send + Sync {
    fn write_log(&self, message : &'_ str);
}

/// Writes through the process logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggerSink;

impl LogSink for LoggerSink {
    fn write_log(&self, message : &'_ str) {
        logger::error!("{}", message);
    }
}
