//! Tests for FileStore
//!
//! These tests verify:
//! - Save/load round trips preserve order and values
//! - The on-disk JSON format
//! - Tolerated inputs (`null`, unknown and missing fields)
//! - Typed errors for missing and malformed files
//! - Startup initialization

use std::fs;
use std::path::PathBuf;

use itemql::store::{sample_collection, FileStore, Record};
use itemql::ItemError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("items.json");
    (temp_dir, path)
}

fn write_raw(path: &PathBuf, content: &str) {
    fs::write(path, content).unwrap();
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);
    let records = vec![
        Record::new(3, "c"),
        Record::new(1, "a"),
        Record::new(2, "b"),
    ];

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_save_load_save_is_byte_identical() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);
    let records = sample_collection(19);

    store.save(&records).unwrap();
    let first = fs::read(&path).unwrap();

    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_round_trip_preserves_duplicates() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);
    let records = vec![Record::new(5, "x"), Record::new(5, "x"), Record::new(5, "y")];

    store.save(&records).unwrap();

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn test_round_trip_empty_collection() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);

    store.save(&[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

// =============================================================================
// File Format Tests
// =============================================================================

#[test]
fn test_file_uses_itemindex_and_itemname() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);

    store.save(&[Record::new(1, "a")]).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"[{"itemindex":1,"itemname":"a"}]"#
    );
}

#[test]
fn test_load_handwritten_file() {
    let (_temp, path) = setup_temp_file();
    write_raw(
        &path,
        r#"[
            {"itemindex": 10, "itemname": "ten"},
            {"itemindex": -4, "itemname": "negative"}
        ]"#,
    );

    let loaded = FileStore::new(&path).load().unwrap();

    assert_eq!(loaded, vec![Record::new(10, "ten"), Record::new(-4, "negative")]);
}

#[test]
fn test_load_null_is_empty() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, "null");

    let loaded = FileStore::new(&path).load().unwrap();

    assert!(loaded.is_empty());
}

#[test]
fn test_load_ignores_unknown_fields() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, r#"[{"itemindex": 1, "itemname": "a", "extra": true}]"#);

    let loaded = FileStore::new(&path).load().unwrap();

    assert_eq!(loaded, vec![Record::new(1, "a")]);
}

#[test]
fn test_load_missing_fields_default_to_zero() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, r#"[{"itemname": "no index"}, {"itemindex": 7}]"#);

    let loaded = FileStore::new(&path).load().unwrap();

    assert_eq!(loaded, vec![Record::new(0, "no index"), Record::new(7, "")]);
}

#[test]
fn test_save_overwrites_longer_content() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);

    store.save(&sample_collection(50)).unwrap();
    store.save(&[Record::new(1, "a")]).unwrap();

    assert_eq!(store.load().unwrap(), vec![Record::new(1, "a")]);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_load_missing_file_is_read_error() {
    let (_temp, path) = setup_temp_file();

    let result = FileStore::new(&path).load();

    match result {
        Err(ref e @ ItemError::StorageRead { .. }) => assert!(e.is_storage()),
        other => panic!("Expected StorageRead, got {:?}", other),
    }
}

#[test]
fn test_load_corrupt_file_is_format_error() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, r#"[{"itemindex": 1, "itemname": "a""#);

    let result = FileStore::new(&path).load();

    assert!(matches!(result, Err(ItemError::StorageFormat { .. })));
}

#[test]
fn test_load_wrong_shape_is_format_error() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, r#"{"itemindex": 1, "itemname": "a"}"#);

    let result = FileStore::new(&path).load();

    assert!(matches!(result, Err(ItemError::StorageFormat { .. })));
}

#[test]
fn test_load_wrong_field_type_is_format_error() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, r#"[{"itemindex": "one", "itemname": "a"}]"#);

    let result = FileStore::new(&path).load();

    assert!(matches!(result, Err(ItemError::StorageFormat { .. })));
}

#[test]
fn test_save_into_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("items.json");

    let result = FileStore::new(&path).save(&[Record::new(1, "a")]);

    assert!(matches!(result, Err(ItemError::StorageWrite { .. })));
}

#[test]
fn test_error_message_names_the_file() {
    let (_temp, path) = setup_temp_file();

    let err = FileStore::new(&path).load().unwrap_err();

    assert!(err.to_string().contains("items.json"));
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn test_init_creates_missing_file() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);

    assert!(!store.exists());
    let count = store.init(true).unwrap();

    assert_eq!(count, 0);
    assert!(store.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_init_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join("items.json");

    FileStore::new(&path).init(true).unwrap();

    assert!(path.exists());
}

#[test]
fn test_init_keeps_existing_file() {
    let (_temp, path) = setup_temp_file();
    let store = FileStore::new(&path);
    store.save(&sample_collection(3)).unwrap();

    let count = store.init(true).unwrap();

    assert_eq!(count, 3);
    assert_eq!(store.load().unwrap(), sample_collection(3));
}

#[test]
fn test_init_without_create_fails_on_missing_file() {
    let (_temp, path) = setup_temp_file();

    let result = FileStore::new(&path).init(false);

    assert!(matches!(result, Err(ItemError::StorageRead { .. })));
    assert!(!path.exists());
}

#[test]
fn test_init_reports_corrupt_file() {
    let (_temp, path) = setup_temp_file();
    write_raw(&path, "not json");

    let result = FileStore::new(&path).init(true);

    assert!(matches!(result, Err(ItemError::StorageFormat { .. })));
}

// =============================================================================
// Sample Data Tests
// =============================================================================

#[test]
fn test_sample_collection() {
    let records = sample_collection(19);

    assert_eq!(records.len(), 19);
    assert_eq!(records[0], Record::new(1, "name1"));
    assert_eq!(records[18], Record::new(19, "name19"));
}

#[test]
fn test_sample_collection_non_positive_count_is_empty() {
    assert!(sample_collection(0).is_empty());
    assert!(sample_collection(-3).is_empty());
}
