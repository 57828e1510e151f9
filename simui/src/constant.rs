pub const DEFAULT_LOG_LEVEL : &'static str = "info";
pub const DEFAULT_CONFIG_FILE_NAME : &'static str = "simui.toml";
pub const DEFAULT_DB_FILE_NAME : &'static str = "simui.db";
