use std::error::Error;
use std::path::{Path, MAIN_SEPARATOR};

use crate::err::define::system::ApiCallError;
use crate::make_err_msg;

pub fn is_abs_path(path : &'_ str) -> bool {
    Path::new(path).is_absolute()
}

/// Resolves `path` against the installation root. Relative paths are joined by
/// plain concatenation, so `root` is expected to end with a separator.
pub fn resolve_with_root(root : &'_ str, path : &'_ str) -> String {
    if is_abs_path(path) {
        path.to_string()
    } else {
        format!("{}{}", root, path)
    }
}

/// Directory holding the running executable, with a trailing separator.
pub fn exe_root_path() -> Result<String, Box<dyn Error>> {
    let exe = std::env::current_exe().map_err(|e| {
        ApiCallError::new(make_err_msg!("current_exe failed : {}", e))
    })?;

    let dir = exe.parent().ok_or_else(|| {
        ApiCallError::new(make_err_msg!("{} has no parent dir", exe.display()))
    })?;

    let mut root = dir.to_string_lossy().to_string();
    if !root.ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR);
    }
    Ok(root)
}

/// Parent directory of `path`, or an empty string for a bare file name.
pub fn get_file_path(path : &'_ str) -> String {
    Path::new(path)
        .parent()
        .map_or_else(String::new, |p| p.to_string_lossy().to_string())
}

/// Path of a sibling file named `file_name`. When `file_name` has no extension
/// the original extension is kept.
pub fn replace_file_name_by_path(path : &'_ str, file_name : &'_ str) -> String {
    let p = Path::new(path);
    let mut name = file_name.to_string();

    if Path::new(file_name).extension().is_none() {
        if let Some(ext) = p.extension() {
            name = format!("{}.{}", file_name, ext.to_string_lossy());
        }
    }

    match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name).to_string_lossy().to_string(),
        _ => name
    }
}
