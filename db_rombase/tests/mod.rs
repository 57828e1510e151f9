use std::error::Error;

use db_rombase::{RombaseEnum, RombaseStore};

fn sample() -> Vec<RombaseEnum> {
    vec![
        RombaseEnum::new("genre", "RPG", 2),
        RombaseEnum::new("genre", "ACT", 1),
        RombaseEnum::new("region", "JP", 3),
        RombaseEnum::new("genre", "STG", 0),
    ]
}

#[test]
pub fn test_get_all_sorted() -> Result<(), Box<dyn Error>> {
    let store = RombaseStore::open_memory()?;
    store.batch_add(sample().as_slice())?;

    let all = store.get_all()?;
    let sorts : Vec<u32> = all.iter().map(|x| x.sort).collect();
    assert_eq!(sorts, vec![0, 1, 2, 3]);
    assert_eq!(all[0], RombaseEnum::new("genre", "STG", 0));
    Ok(())
}

#[test]
pub fn test_get_by_type() -> Result<(), Box<dyn Error>> {
    let store = RombaseStore::open_memory()?;
    store.batch_add(sample().as_slice())?;

    let genre = store.get_by_type("genre")?;
    let names : Vec<&str> = genre.iter().map(|x| x.name.as_str()).collect();
    assert_eq!(names, vec!["STG", "ACT", "RPG"]);

    assert!(store.get_by_type("publisher")?.is_empty());
    Ok(())
}

#[test]
pub fn test_delete_by_type() -> Result<(), Box<dyn Error>> {
    let store = RombaseStore::open_memory()?;
    store.batch_add(sample().as_slice())?;

    assert_eq!(store.delete_by_type("genre")?, 3);
    assert_eq!(store.delete_by_type("genre")?, 0);

    let rest = store.get_all()?;
    assert_eq!(rest, vec![RombaseEnum::new("region", "JP", 3)]);
    Ok(())
}

#[test]
pub fn test_empty_batch_is_noop() -> Result<(), Box<dyn Error>> {
    let store = RombaseStore::open_memory()?;
    store.batch_add(&[])?;
    assert!(store.get_all()?.is_empty());
    Ok(())
}

#[test]
pub fn test_file_db_persists() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("simui.db").to_string_lossy().to_string();

    {
        let store = RombaseStore::open(file.as_str())?;
        store.batch_add(sample().as_slice())?;
    }

    let store = RombaseStore::open(file.as_str())?;
    assert_eq!(store.get_all()?.len(), 4);
    assert_eq!(store.get_by_type("region")?.len(), 1);
    Ok(())
}
