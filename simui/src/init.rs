use std::error::Error;
use std::path::PathBuf;

use common::init::logger;
use common::path::exe_root_path;

use crate::args;
use crate::config::{self, AppConfig, Settings};
use crate::constant::DEFAULT_CONFIG_FILE_NAME;

/// Explicit `--config` must exist; the default one under the installation
/// root is optional.
pub(crate) fn get_settings(proc_args : &'_ args::Args) -> Result<Settings, Box<dyn Error>> {
    let default_root = exe_root_path()?;

    let cfg = match proc_args.config.as_ref() {
        Some(p) => config::parse_toml(p.as_path())?,
        None => {
            let p = PathBuf::from(format!("{}{}", default_root, DEFAULT_CONFIG_FILE_NAME));
            if p.is_file() {
                config::parse_toml(p.as_path())?
            } else {
                AppConfig::default()
            }
        }
    };

    Ok(config::merge(cfg, proc_args, default_root))
}

pub(crate) fn init_common_lib(settings : &'_ Settings) -> Result<(), Box<dyn Error>> {
    logger::init_once(settings.log_level.as_str(), settings.log_file.as_deref())
}
