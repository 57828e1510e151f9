use std::sync::Arc;
use std::thread::JoinHandle;

use mlua::{Function, Lua, LuaOptions, StdLib};
use mlua::Error as LuaError;

use common::func;
use common::logger;
use common::path::resolve_with_root;

use crate::failure::FailureRecord;
use crate::sink::{LogSink, LoggerSink};

/// Global every invoked script must define. Called as
/// `main(root_path, simulator_path, rom_path)`; return values are ignored.
pub const ENTRY_FN_NAME : &'static str = "main";

const INVOKE_THREAD_NAME : &'static str = "lua-invoke";
const TRACEBACK_MARKER : &'static str = "\nstack traceback:";

/// Script error as a single line: the interpreter's own `file:line: msg`
/// without the kind prefix or the traceback.
fn lua_error_line(e : &'_ LuaError) -> String {
    let text = match e {
        LuaError::RuntimeError(msg) => msg.clone(),
        LuaError::SyntaxError { message, .. } => message.clone(),
        other => other.to_string(),
    };

    let head = text.split(TRACEBACK_MARKER).next().unwrap_or_default();
    head.trim_end().replace('\n', " ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeRequest {
    pub script_path : String,
    pub simulator_path : String,
    pub rom_path : String,
}

impl InvokeRequest {
    pub fn new<S : Into<String>>(script_path : S, simulator_path : S, rom_path : S) -> Self {
        InvokeRequest {
            script_path: script_path.into(),
            simulator_path: simulator_path.into(),
            rom_path: rom_path.into(),
        }
    }
}

/// Completion signal of one dispatched invocation. Dropping it detaches the
/// invocation.
pub struct InvocationHandle {
    join : JoinHandle<()>,
}

impl InvocationHandle {
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the invocation. Returns false when its thread panicked.
    pub fn join(self) -> bool {
        self.join.join().is_ok()
    }
}

/// Runs user scripts on their own thread, each in a fresh interpreter.
///
/// Nothing is reported back to the caller; a failing script produces exactly
/// one line on the bridge's [`LogSink`].
#[derive(Clone)]
pub struct LuaBridge {
    root_path : String,
    sink : Arc<dyn LogSink>,
}

struct LuaInvocation<'a> {
    lua : Lua,
    root_path : &'a str,
    request : &'a InvokeRequest,
}

impl<'a> LuaInvocation<'a> {
    fn new(root_path : &'a str, request : &'a InvokeRequest) -> Result<Self, FailureRecord> {
        let lua = Lua::new_with(StdLib::ALL_SAFE, LuaOptions::new()).map_err(|e| {
            FailureRecord::load(lua_error_line(&e))
        })?;

        Ok(LuaInvocation { lua, root_path, request })
    }

    fn load_script(&self) -> Result<(), FailureRecord> {
        let path = resolve_with_root(self.root_path, self.request.script_path.as_str());
        logger::debug!("{} - load script {}", func!(), path);

        let code = std::fs::read(path.as_str()).map_err(|e| {
            FailureRecord::load(format!("cannot open {}: {}", path, e))
        })?;

        self.lua.load(code)
            .set_name(format!("@{}", path))
            .exec()
            .map_err(|e| FailureRecord::load(lua_error_line(&e)))
    }

    fn call_entry(&self) -> Result<(), FailureRecord> {
        let entry : Function = self.lua.globals().get(ENTRY_FN_NAME).map_err(|e| {
            FailureRecord::call(lua_error_line(&e))
        })?;

        entry.call::<()>((
            self.root_path,
            self.request.simulator_path.as_str(),
            self.request.rom_path.as_str(),
        )).map_err(|e| FailureRecord::call(lua_error_line(&e)))
    }

    fn run(self) -> Result<(), FailureRecord> {
        self.load_script()?;
        self.call_entry()
    }
}

impl LuaBridge {
    pub fn new(root_path : String, sink : Arc<dyn LogSink>) -> Self {
        LuaBridge { root_path, sink }
    }

    /// Bridge reporting through the process logger.
    pub fn with_logger(root_path : String) -> Self {
        Self::new(root_path, Arc::new(LoggerSink))
    }

    pub fn root_path(&self) -> &'_ str {
        self.root_path.as_str()
    }

    pub fn resolve_script_path(&self, script_path : &'_ str) -> String {
        resolve_with_root(self.root_path.as_str(), script_path)
    }

    /// Runs one invocation on the current thread. The interpreter is created
    /// here and released before returning.
    pub fn run_blocking(&self, request : &'_ InvokeRequest) -> Result<(), FailureRecord> {
        LuaInvocation::new(self.root_path.as_str(), request)?.run()
    }

    /// Dispatches an invocation and returns its completion handle. `None`
    /// means no thread could be started; that is logged like a load failure.
    pub fn spawn(&self, request : InvokeRequest) -> Option<InvocationHandle> {
        let bridge = self.clone();

        let spawned = std::thread::Builder::new()
            .name(INVOKE_THREAD_NAME.to_string())
            .spawn(move || {
                if let Err(failure) = bridge.run_blocking(&request) {
                    logger::debug!("{} - {} failed in {:?} phase", func!(), request.script_path, failure.phase);
                    bridge.sink.write_log(failure.log_line().as_str());
                }
            });

        match spawned {
            Ok(join) => Some(InvocationHandle { join }),
            Err(e) => {
                logger::warn!("{} - spawn {} failed", func!(), INVOKE_THREAD_NAME);
                self.sink.write_log(FailureRecord::load(e.to_string()).log_line().as_str());
                None
            }
        }
    }

    /// Fire and forget: returns at once, outcome only visible on the sink.
    pub fn call_lua(&self, script_path : &'_ str, simulator_path : &'_ str, rom_path : &'_ str) {
        drop(self.spawn(InvokeRequest::new(script_path, simulator_path, rom_path)));
    }
}
