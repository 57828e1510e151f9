use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use common::err::define::config as cfg_err;
use common::err::define::system::ApiCallError;
use common::{func, logger, make_err_msg};
use db_rombase::{RombaseEnum, RombaseStore};
use interpreter_lua::{InvokeRequest, LuaBridge};

use crate::args::{Command, FileAction, RombaseAction};
use crate::config::Settings;

#[derive(Debug, Default, Deserialize)]
struct RombaseImport {
    #[serde(default)]
    rombase : Vec<RombaseEnum>,
}

fn parse_rombase_import(data : &'_ str) -> Result<Vec<RombaseEnum>, Box<dyn Error>> {
    let parsed : RombaseImport = toml::from_str(data).map_err(|e| {
        cfg_err::ParsingError::new(make_err_msg!("rombase import parsing failed : {}", e))
    })?;
    Ok(parsed.rombase)
}

fn print_rombase(list : &'_ [RombaseEnum]) {
    for v in list {
        println!("{}\t{}\t{}", v.rom_type, v.sort, v.name);
    }
}

fn run_lua(settings : &'_ Settings, script : String, sim : String, rom : String) {
    let bridge = LuaBridge::with_logger(settings.root_path.clone());
    logger::info!("{} - run {}", func!(), bridge.resolve_script_path(script.as_str()));

    // the process must outlive the script, so wait here instead of detaching
    if let Some(handle) = bridge.spawn(InvokeRequest::new(script, sim, rom)) {
        if !handle.join() {
            logger::error!("{} - lua invocation thread panicked", func!());
        }
    }
}

fn run_rombase(settings : &'_ Settings, action : RombaseAction) -> Result<(), Box<dyn Error>> {
    let store = RombaseStore::open(settings.db_file.as_str())?;

    match action {
        RombaseAction::List { rom_type: Some(t) } => print_rombase(store.get_by_type(t.as_str())?.as_slice()),
        RombaseAction::List { rom_type: None } => print_rombase(store.get_all()?.as_slice()),
        RombaseAction::Import { file } => {
            let data = fs::read_to_string(file.as_path()).map_err(|e| {
                cfg_err::ReadFailedError::new(make_err_msg!("can't read {} : {}", file.display(), e))
            })?;
            let list = parse_rombase_import(data.as_str())?;
            store.batch_add(list.as_slice())?;
            logger::info!("{} - imported {} rows", func!(), list.len());
        }
        RombaseAction::Delete { rom_type } => {
            let n = store.delete_by_type(rom_type.as_str())?;
            logger::info!("{} - deleted {} rows of {}", func!(), n, rom_type);
        }
    }
    Ok(())
}

fn run_file(action : FileAction) -> Result<(), Box<dyn Error>> {
    use common::fs as cfs;

    match action {
        FileAction::Copy { src, dst } => {
            if cfs::dir_exists(src.as_str()) {
                cfs::folder_copy(src.as_str(), dst.as_str())
            } else {
                cfs::file_copy(src.as_str(), dst.as_str())
            }
        }
        FileAction::Move { src, dst } => {
            if cfs::dir_exists(src.as_str()) {
                cfs::folder_move(src.as_str(), dst.as_str())
            } else {
                cfs::file_move(src.as_str(), dst.as_str())
            }
        }
        FileAction::Rename { path, name } => {
            if cfs::dir_exists(path.as_str()) {
                cfs::folder_rename(path.as_str(), name.as_str())
            } else {
                let new_path = cfs::file_rename(path.as_str(), name.as_str())?;
                println!("{}", new_path);
                Ok(())
            }
        }
        FileAction::Delete { path } => {
            if cfs::dir_exists(path.as_str()) {
                cfs::delete_dir(path.as_str())
            } else {
                cfs::file_delete(path.as_str())
            }
        }
        FileAction::Size { path } => {
            let len = fs::metadata(Path::new(path.as_str())).map(|m| m.len() as i64).map_err(|e| {
                ApiCallError::new(make_err_msg!("stat {} : {}", path, e))
            })?;
            let readable = cfs::get_file_size_string(len);
            if readable.is_empty() {
                println!("{}B", len);
            } else {
                println!("{}", readable);
            }
            Ok(())
        }
    }
}

pub(crate) fn run(command : Command, settings : &'_ Settings) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Lua { script, sim, rom } => {
            run_lua(settings, script, sim, rom);
            Ok(())
        }
        Command::Rombase { action } => run_rombase(settings, action),
        Command::File { action } => run_file(action),
    }
}
