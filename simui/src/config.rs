use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use common::err::define::config as cfg_err;
use common::make_err_msg;

use crate::args::Args;
use crate::constant::*;

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub root_path : Option<String>,
    pub log_level : Option<String>,
    pub log_file : Option<String>,
    pub db_file : Option<String>,
}

/// Values every command runs with, after file and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root_path : String,
    pub log_level : String,
    pub log_file : Option<String>,
    pub db_file : String,
}

pub fn parse_toml_str(data : &'_ str) -> Result<AppConfig, Box<dyn Error>> {
    toml::from_str(data).map_err(|e| {
        cfg_err::ParsingError::new(make_err_msg!("toml parsing failed : {}", e))
    })
}

pub fn parse_toml(path : &'_ Path) -> Result<AppConfig, Box<dyn Error>> {
    let data = fs::read_to_string(path).map_err(|e| {
        cfg_err::ReadFailedError::new(make_err_msg!("can't read {} : {}", path.display(), e))
    })?;

    parse_toml_str(data.as_str())
}

fn with_trailing_separator(mut root : String) -> String {
    if !root.is_empty() && !root.ends_with('/') && !root.ends_with(std::path::MAIN_SEPARATOR) {
        root.push(std::path::MAIN_SEPARATOR);
    }
    root
}

/// Command line wins over the file, the file wins over defaults.
pub fn merge(cfg : AppConfig, proc_args : &'_ Args, default_root : String) -> Settings {
    let root_path = with_trailing_separator(cfg.root_path.unwrap_or(default_root));

    let db_file = cfg.db_file.unwrap_or_else(|| format!("{}{}", root_path, DEFAULT_DB_FILE_NAME));

    Settings {
        log_level : proc_args.log_level.clone()
            .or(cfg.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        log_file : proc_args.log_file.clone().or(cfg.log_file),
        root_path,
        db_file,
    }
}
