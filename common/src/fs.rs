use std::error::Error;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::err::define::file as file_err;
use crate::make_err_msg;
use crate::path::{get_file_path, replace_file_name_by_path};

const KB : f64 = 1024.0;
const MB : f64 = KB * 1024.0;
const GB : f64 = MB * 1024.0;
const TB : f64 = GB * 1024.0;
const PB : f64 = TB * 1024.0;

pub fn file_exists(p : &'_ str) -> bool {
    Path::new(p).is_file()
}

pub fn dir_exists(p : &'_ str) -> bool {
    Path::new(p).is_dir()
}

fn copy_stream(src : &'_ Path, dst : &'_ Path) -> Result<(), Box<dyn Error>> {
    let source = fs::File::open(src).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("open {} : {}", src.display(), e))
    })?;
    let destination = fs::File::create(dst).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("create {} : {}", dst.display(), e))
    })?;

    let mut writer = BufWriter::new(destination);
    std::io::copy(&mut BufReader::new(source), &mut writer).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("{} -> {} : {}", src.display(), dst.display(), e))
    })?;

    writer.flush().map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("flush {} : {}", dst.display(), e))
    })
}

/// Copies one regular file, creating the destination directory when needed.
pub fn file_copy(src : &'_ str, dst : &'_ str) -> Result<(), Box<dyn Error>> {
    let stat = fs::metadata(src).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("stat {} : {}", src, e))
    })?;

    if !stat.is_file() {
        return Err(file_err::NotRegularFileError::new(make_err_msg!("{} is not a regular file", src)));
    }

    let dir = get_file_path(dst);
    if !dir.is_empty() {
        create_dir(dir.as_str())?;
    }

    copy_stream(Path::new(src), Path::new(dst))
}

fn absolute(p : &'_ str) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(p);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let pwd = std::env::current_dir().map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("current_dir failed : {}", e))
    })?;
    Ok(pwd.join(path))
}

fn copy_tree(from : &'_ Path, to : &'_ Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(to).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("mkdir {} : {}", to.display(), e))
    })?;

    let entries = fs::read_dir(from).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("read_dir {} : {}", from.display(), e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            file_err::CopyFailedError::new(make_err_msg!("read_dir {} : {}", from.display(), e))
        })?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| {
            file_err::CopyFailedError::new(make_err_msg!("file_type {} : {}", src.display(), e))
        })?;

        // symlinks are never walked as directories
        if file_type.is_dir() {
            copy_tree(&src, &dst)?;
        } else {
            copy_stream(&src, &dst)?;
        }
    }
    Ok(())
}

/// Copies a file or a whole directory tree. Empty paths are ignored.
pub fn folder_copy(from : &'_ str, to : &'_ str) -> Result<(), Box<dyn Error>> {
    if from.is_empty() || to.is_empty() {
        return Ok(());
    }

    let stat = fs::metadata(from).map_err(|e| {
        file_err::CopyFailedError::new(make_err_msg!("stat {} : {}", from, e))
    })?;

    let from_abs = absolute(from)?;
    let to_abs = absolute(to)?;

    if stat.is_dir() {
        copy_tree(&from_abs, &to_abs)
    } else {
        if let Some(parent) = to_abs.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                file_err::CopyFailedError::new(make_err_msg!("mkdir {} : {}", parent.display(), e))
            })?;
        }
        copy_stream(&from_abs, &to_abs)
    }
}

fn rename(old : &'_ str, new : &'_ str) -> Result<(), Box<dyn Error>> {
    fs::rename(old, new).map_err(|e| {
        file_err::MoveFailedError::new(make_err_msg!("{} -> {} : {}", old, new, e))
    })
}

pub fn file_move(old_file : &'_ str, new_file : &'_ str) -> Result<(), Box<dyn Error>> {
    if !file_exists(old_file) {
        return Ok(());
    }
    rename(old_file, new_file)
}

pub fn folder_move(old_folder : &'_ str, new_folder : &'_ str) -> Result<(), Box<dyn Error>> {
    if !dir_exists(old_folder) {
        return Ok(());
    }
    rename(old_folder, new_folder)
}

/// Renames a file in place and returns its new path. Missing sources yield an
/// empty path.
pub fn file_rename(old_path : &'_ str, file_name : &'_ str) -> Result<String, Box<dyn Error>> {
    if !file_exists(old_path) {
        return Ok(String::new());
    }
    let new_path = replace_file_name_by_path(old_path, file_name);
    rename(old_path, new_path.as_str())?;
    Ok(new_path)
}

pub fn folder_rename(old_path : &'_ str, folder_name : &'_ str) -> Result<(), Box<dyn Error>> {
    if !dir_exists(old_path) {
        return Ok(());
    }
    let new_path = Path::new(old_path)
        .parent()
        .map_or_else(|| PathBuf::from(folder_name), |p| p.join(folder_name));

    rename(old_path, new_path.to_string_lossy().as_ref())
}

pub fn file_delete(src : &'_ str) -> Result<(), Box<dyn Error>> {
    if !file_exists(src) {
        return Ok(());
    }
    fs::remove_file(src).map_err(|e| {
        file_err::DeleteFailedError::new(make_err_msg!("{} : {}", src, e))
    })
}

pub fn delete_dir(src : &'_ str) -> Result<(), Box<dyn Error>> {
    if !dir_exists(src) {
        return Ok(());
    }
    fs::remove_dir_all(src).map_err(|e| {
        file_err::DeleteFailedError::new(make_err_msg!("{} : {}", src, e))
    })
}

/// Human readable size. Anything under 2 KiB is not worth showing and
/// yields an empty string.
pub fn get_file_size_string(size : i64) -> String {
    if size < 2048 {
        return String::new();
    }

    let s = size as f64;
    if s < MB {
        format!("{:.2}KB", s / KB)
    } else if s < GB {
        format!("{:.2}MB", s / MB)
    } else if s < TB {
        format!("{:.2}GB", s / GB)
    } else {
        format!("{:.2}EB", s / PB)
    }
}

pub fn create_dir(p : &'_ str) -> Result<(), Box<dyn Error>> {
    if dir_exists(p) {
        return Ok(());
    }
    fs::create_dir_all(p).map_err(|e| {
        file_err::WriteFailedError::new(make_err_msg!("mkdir {} : {}", p, e))
    })
}

pub fn create_file(p : &'_ str, content : &'_ str) -> Result<(), Box<dyn Error>> {
    if p.is_empty() {
        return Ok(());
    }
    fs::write(p, content.as_bytes()).map_err(|e| {
        file_err::WriteFailedError::new(make_err_msg!("{} : {}", p, e))
    })
}

/// Truncating write.
pub fn overlay_write_file(p : &'_ str, content : &'_ str) -> Result<(), Box<dyn Error>> {
    create_file(p, content)
}

/// Reads a whole file as text. Every failure, including a missing file when
/// `check` is set, reads as empty content.
pub fn read_file(p : &'_ str, check : bool) -> String {
    if p.is_empty() || (check && !file_exists(p)) {
        return String::new();
    }
    fs::read_to_string(p).unwrap_or_default()
}

pub fn get_file_update_date(p : &'_ str) -> Option<SystemTime> {
    fs::metadata(p).and_then(|m| m.modified()).ok()
}
