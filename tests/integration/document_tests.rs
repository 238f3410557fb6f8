//! Integration tests for loading buffer documents from disk

use crate::common::TestFixture;
use bufdiff::{load_document, BufdiffError};
use std::path::Path;

#[test]
fn test_load_document_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_buffer("config.iv", &[("motor/speed", "100"), ("motor/torque", "2.5")])
        .unwrap();

    let map = load_document(&path).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["motor/speed"], "100");
    assert_eq!(map["motor/torque"], "2.5");
}

#[test]
fn test_load_nested_document() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_buffer_raw(
            "nested.iv",
            r#"<Buffer>
                <Section Name="drive">
                    <Variable Path="drive/enabled" InitialValue="true"/>
                    <Subsection>
                        <Variable Path="drive/limit" InitialValue="10.5"/>
                    </Subsection>
                </Section>
            </Buffer>"#,
        )
        .unwrap();

    let map = load_document(&path).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["drive/enabled"], "true");
    assert_eq!(map["drive/limit"], "10.5");
}

#[test]
fn test_load_duplicate_paths_last_write_wins() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_buffer("dup.iv", &[("v", "1"), ("v", "2")])
        .unwrap();

    let map = load_document(&path).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["v"], "2");
}

#[test]
fn test_load_unicode_values() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_buffer("unicode.iv", &[("label/name", "Café ☕"), ("label/city", "北京")])
        .unwrap();

    let map = load_document(&path).unwrap();
    assert_eq!(map["label/name"], "Café ☕");
    assert_eq!(map["label/city"], "北京");
}

#[test]
fn test_load_malformed_document() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_buffer_raw("broken.iv", "<Buffer><Variable Path=\"v\"")
        .unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, BufdiffError::MalformedDocument { .. }));
}

#[test]
fn test_load_corrupted_document() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_corrupted_file("corrupted.iv").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, BufdiffError::MalformedDocument { .. }));
}

#[test]
fn test_load_missing_file() {
    let err = load_document(Path::new("/nonexistent/config.iv")).unwrap_err();
    assert!(matches!(err, BufdiffError::MalformedDocument { .. }));
}

#[test]
fn test_load_error_carries_cause() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_buffer_raw("broken.iv", "not xml at all").unwrap();

    let err = load_document(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken.iv"), "message was: {}", message);
    assert!(message.contains("Malformed document"), "message was: {}", message);
}

#[test]
fn test_load_empty_buffer() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_buffer("empty.iv", &[]).unwrap();

    let map = load_document(&path).unwrap();
    assert!(map.is_empty());
}
