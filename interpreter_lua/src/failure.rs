use std::error::Error;
use std::fmt::Display;

pub const LOAD_ERROR_PREFIX : &'static str = "Lua Run Error:";
pub const CALL_ERROR_PREFIX : &'static str = "Lua Error:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePhase {
    /// reading, compiling or running the script's top level
    Load,
    /// calling the script's entry function
    Call,
}

#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub phase : FailurePhase,
    pub message : String,
}

impl FailureRecord {
    pub fn load<S : Into<String>>(message : S) -> Self {
        FailureRecord { phase: FailurePhase::Load, message: message.into() }
    }

    pub fn call<S : Into<String>>(message : S) -> Self {
        FailureRecord { phase: FailurePhase::Call, message: message.into() }
    }

    /// Line handed to the log sink. The prefixes are part of the log format
    /// and must not change.
    pub fn log_line(&self) -> String {
        let prefix = match self.phase {
            FailurePhase::Load => LOAD_ERROR_PREFIX,
            FailurePhase::Call => CALL_ERROR_PREFIX,
        };
        format!("{}{}", prefix, self.message)
    }
}

impl Display for FailureRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.log_line().as_str())
    }
}

impl Error for FailureRecord {}
