use crate::err::impl_err_mod;

impl_err_mod!(system, [
    (ApiCallError, "os or library api call failed", "check process env or permission")
]);

impl_err_mod!(file, [
    (NotRegularFileError, "source is not a regular file", "only regular files can be copied by file_copy"),
    (CopyFailedError, "file copy failed", "check source readable and destination writable"),
    (MoveFailedError, "file or folder rename failed", "check destination parent exists and same device"),
    (DeleteFailedError, "file or folder delete failed", "check permission"),
    (WriteFailedError, "file write failed", "check destination path")
]);

impl_err_mod!(database, [
    (OpenFailedError, "database open failed", "check db file path and permission"),
    (QueryFailedError, "database query failed", "check table schema or query")
]);

impl_err_mod!(config, [
    (ReadFailedError, "config file read failed", "check config path"),
    (ParsingError, "config parsing failed", "check toml syntax and field types")
]);

