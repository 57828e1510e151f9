use std::error::Error;
use std::path::Path;

use common::err::define;
use common::fs;

fn path_str(p : &'_ Path) -> String {
    p.to_string_lossy().to_string()
}

#[test]
pub fn test_file_copy_creates_dest_dir() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let src = path_str(&dir.path().join("game.nes"));
    let dst = path_str(&dir.path().join("backup/nes/game.nes"));

    fs::create_file(src.as_str(), "NES\x1a")?;
    fs::file_copy(src.as_str(), dst.as_str())?;

    assert_eq!(fs::read_file(dst.as_str(), true), "NES\x1a");
    assert!(fs::file_exists(src.as_str()));
    Ok(())
}

#[test]
pub fn test_file_copy_rejects_directory() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let src = path_str(dir.path());
    let dst = path_str(&dir.path().join("out"));

    let err = fs::file_copy(src.as_str(), dst.as_str()).unwrap_err();
    assert!(err.downcast_ref::<define::file::NotRegularFileError>().is_some(), "{}", err);
    Ok(())
}

#[test]
pub fn test_folder_copy_tree() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let from = dir.path().join("roms");
    let to = dir.path().join("mirror");

    fs::create_dir(path_str(&from.join("nes/hacks")).as_str())?;
    fs::create_file(path_str(&from.join("nes/a.nes")).as_str(), "a")?;
    fs::create_file(path_str(&from.join("nes/hacks/b.nes")).as_str(), "b")?;

    fs::folder_copy(path_str(&from).as_str(), path_str(&to).as_str())?;

    assert_eq!(fs::read_file(path_str(&to.join("nes/a.nes")).as_str(), true), "a");
    assert_eq!(fs::read_file(path_str(&to.join("nes/hacks/b.nes")).as_str(), true), "b");

    fs::folder_copy("", path_str(&to).as_str())?;
    Ok(())
}

#[test]
pub fn test_move_rename_delete() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let a = path_str(&dir.path().join("a.nes"));
    let b = path_str(&dir.path().join("b.nes"));

    fs::create_file(a.as_str(), "rom")?;
    fs::file_move(a.as_str(), b.as_str())?;
    assert!(!fs::file_exists(a.as_str()));
    assert!(fs::file_exists(b.as_str()));

    let renamed = fs::file_rename(b.as_str(), "c")?;
    assert_eq!(renamed, path_str(&dir.path().join("c.nes")));
    assert!(fs::file_exists(renamed.as_str()));

    assert_eq!(fs::file_rename(b.as_str(), "d")?, "");

    fs::file_delete(renamed.as_str())?;
    assert!(!fs::file_exists(renamed.as_str()));
    fs::file_delete(renamed.as_str())?;
    Ok(())
}

#[test]
pub fn test_folder_move_rename_delete() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let a = path_str(&dir.path().join("snap"));
    let b = path_str(&dir.path().join("snapshots"));

    fs::create_dir(a.as_str())?;
    fs::folder_rename(a.as_str(), "snapshots")?;
    assert!(!fs::dir_exists(a.as_str()));
    assert!(fs::dir_exists(b.as_str()));

    fs::folder_move(b.as_str(), a.as_str())?;
    assert!(fs::dir_exists(a.as_str()));

    fs::delete_dir(a.as_str())?;
    assert!(!fs::dir_exists(a.as_str()));
    fs::delete_dir(a.as_str())?;
    Ok(())
}

#[test]
pub fn test_overlay_write_and_read() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let p = path_str(&dir.path().join("note.txt"));

    fs::create_file(p.as_str(), "first")?;
    fs::overlay_write_file(p.as_str(), "second")?;
    assert_eq!(fs::read_file(p.as_str(), false), "second");
    assert!(fs::get_file_update_date(p.as_str()).is_some());

    let missing = path_str(&dir.path().join("missing.txt"));
    assert_eq!(fs::read_file(missing.as_str(), true), "");
    assert_eq!(fs::read_file(missing.as_str(), false), "");
    assert!(fs::get_file_update_date(missing.as_str()).is_none());
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
pub fn test_file_copy_reports_write_failure() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let src = path_str(&dir.path().join("small.nes"));
    fs::create_file(src.as_str(), "x".repeat(100).as_str())?;

    let err = fs::file_copy(src.as_str(), "/dev/full").unwrap_err();
    assert!(err.downcast_ref::<define::file::CopyFailedError>().is_some(), "{}", err);
    Ok(())
}

#[cfg(unix)]
#[test]
pub fn test_folder_copy_does_not_follow_dir_symlink() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let from = dir.path().join("roms");
    fs::create_dir(path_str(&from).as_str())?;
    fs::create_file(path_str(&from.join("a.nes")).as_str(), "a")?;
    std::os::unix::fs::symlink(&from, from.join("loop"))?;

    let to = dir.path().join("mirror");
    let ret = fs::folder_copy(path_str(&from).as_str(), path_str(&to).as_str());

    assert!(ret.is_err());
    assert!(!to.join("loop/loop").exists());
    Ok(())
}
