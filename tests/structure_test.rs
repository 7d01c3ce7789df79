use mason::error::Error;
use mason::generator::{Generator, Options};
use mason::model::NodeKind;
use mason::structure;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_trailing_slash_key_is_a_directory() {
    let value = json!({
        "src/": {"main.cpp": ""},
        "README.md": "hello"
    });

    let root = structure::from_json(&value, "demo").unwrap();
    assert_eq!(root.name, "demo");
    assert!(root.is_directory());

    let src = root.find_child("src").unwrap();
    assert!(src.is_directory());

    let main = src.find_child("main.cpp").unwrap();
    assert_eq!(main.kind, NodeKind::File);
    assert_eq!(main.content, None);

    let readme = root.find_child("README.md").unwrap();
    assert_eq!(readme.content.as_deref(), Some("hello"));
}

#[test]
fn test_object_value_is_a_directory_without_slash() {
    let value = json!({"src": {"lib.rs": ""}});

    let root = structure::from_json(&value, "demo").unwrap();
    assert!(root.find_child("src").unwrap().is_directory());
}

#[test]
fn test_non_string_scalar_becomes_empty_file() {
    let value = json!({"VERSION": 3, "empty.txt": "", "flag": true});

    let root = structure::from_json(&value, "demo").unwrap();
    for name in ["VERSION", "empty.txt", "flag"] {
        let node = root.find_child(name).unwrap();
        assert_eq!(node.kind, NodeKind::File);
        assert_eq!(node.content, None);
    }
}

#[test]
fn test_key_order_is_preserved() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"zeta.txt": "", "alpha.txt": "", "mid/": {}}"#).unwrap();

    let root = structure::from_json(&value, "demo").unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta.txt", "alpha.txt", "mid"]);
}

#[test]
fn test_non_object_structure_is_rejected() {
    match structure::from_json(&json!(["not", "an", "object"]), "demo") {
        Err(Error::InvalidJsonFormat { .. }) => {}
        other => panic!("Expected InvalidJsonFormat, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_generated_file_content_is_written_byte_for_byte() {
    let value = json!({
        "src/": {"main.cpp": ""},
        "README.md": "hello"
    });
    let root = structure::from_json(&value, "demo").unwrap();

    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("demo");
    let stats = Generator::new(Options::default()).generate(&root, &destination).unwrap();

    let readme = std::fs::read(destination.join("README.md")).unwrap();
    assert_eq!(readme, b"hello");
    assert_eq!(stats.total_bytes, 5);
}
