use std::fs;

use kingdom_draft::{Catalog, CatalogError};
use kingdom_test_utils::synthetic_dominoes;

#[test]
fn written_catalog_loads_from_path() {
    let catalog = Catalog::from_dominoes(synthetic_dominoes(30)).unwrap();
    let path = std::env::temp_dir().join(format!("kingdom-catalog-{}.json", std::process::id()));
    fs::write(&path, catalog.to_json().unwrap()).unwrap();
    let loaded = Catalog::from_path(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), catalog);
}

#[test]
fn reader_and_str_agree() {
    let json = Catalog::standard().unwrap().to_json().unwrap();
    let from_reader = Catalog::from_reader(json.as_bytes()).unwrap();
    let from_str = Catalog::from_json_str(&json).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn truncated_json_is_rejected() {
    let json = Catalog::standard().unwrap().to_json().unwrap();
    let cut = &json[..json.len() / 2];
    assert!(matches!(
        Catalog::from_json_str(cut),
        Err(CatalogError::Json(_))
    ));
}
