mod bridge;
mod failure;
mod sink;

pub use bridge::{InvocationHandle, InvokeRequest, LuaBridge, ENTRY_FN_NAME};
pub use failure::{FailurePhase, FailureRecord, CALL_ERROR_PREFIX, LOAD_ERROR_PREFIX};
pub use sink::{LogSink, LoggerSink};
