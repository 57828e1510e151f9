pub mod logger {
    use std::error::Error;
    use std::sync::OnceLock;

    use ftail::Ftail;
    use log::LevelFilter;

    use crate::err::define::system::ApiCallError;
    use crate::make_err_msg;

    static LOGGER_INIT_RET : OnceLock<Result<(), String>> = OnceLock::new();

    pub fn convert_str_to_log_level(log_level : &'_ str) -> LevelFilter {
        match log_level {
            "debug" => LevelFilter::Debug,
            "warn" => LevelFilter::Warn,
            "trace" => LevelFilter::Trace,
            "info" => LevelFilter::Info,
            _ => LevelFilter::Error
        }
    }

    fn init(log_level : &'_ str, log_file : Option<&'_ str>) -> Result<(), String> {
        let level = convert_str_to_log_level(log_level);
        let mut ftail = Ftail::new().console(level);

        if let Some(file) = log_file {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .map_err(|e| make_err_msg!("{} : {}", file, e))?;

            ftail = ftail.single_file(file, true, level);
        }

        ftail.init().map_err(|e| make_err_msg!("{}", e))
    }

    /// Installs the process logger. Only the first call configures anything;
    /// every call returns the outcome of that first attempt.
    pub fn init_once(log_level : &'_ str, log_file : Option<&'_ str>) -> Result<(), Box<dyn Error>> {
        LOGGER_INIT_RET
            .get_or_init(|| init(log_level, log_file))
            .clone()
            .map_err(ApiCallError::new)
    }

}
