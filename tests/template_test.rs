use mason::error::Error;
use mason::generator::Options;
use mason::templates::{Template, TemplateManager};
use std::fs;
use tempfile::TempDir;

const RUST_CLI: &str = r#"{
    "name": "rust-cli",
    "description": "A Rust command-line project",
    "category": "rust",
    "tags": ["cli", "binary"],
    "structure": {
        "src/": {"main.rs": "fn main() {}\n"},
        "Cargo.toml": ""
    }
}"#;

const PYTHON_LIB: &str = r#"{
    "name": "python-lib",
    "description": "A Python library skeleton",
    "category": "python",
    "author": "someone",
    "structure": {
        "pkg/": {"__init__.py": ""},
        "setup.py": ""
    }
}"#;

fn catalog() -> (TempDir, TemplateManager) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("rust-cli.json"), RUST_CLI).unwrap();

    // Discovery is recursive.
    let nested = temp_dir.path().join("community");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("python-lib.json"), PYTHON_LIB).unwrap();

    let mut manager = TemplateManager::new(temp_dir.path());
    manager.load().unwrap();
    (temp_dir, manager)
}

#[test]
fn test_load_and_list_templates() {
    let (_guard, manager) = catalog();

    assert_eq!(manager.list(), vec!["python-lib", "rust-cli"]);
    assert!(manager.contains("rust-cli"));
    assert!(!manager.contains("go-service"));
}

#[test]
fn test_info_defaults_are_applied() {
    let (_guard, manager) = catalog();

    let template = manager.get("rust-cli").unwrap();
    assert_eq!(template.info.version, "1.0.0");
    assert_eq!(template.info.category, "rust");
    assert_eq!(template.info.tags, vec!["cli", "binary"]);
    assert_eq!(template.info.author, None);

    let python = manager.get("python-lib").unwrap();
    assert_eq!(python.info.author.as_deref(), Some("someone"));
    assert!(python.info.tags.is_empty());
}

#[test]
fn test_categories_are_sorted_and_deduplicated() {
    let (_guard, manager) = catalog();
    assert_eq!(manager.categories(), vec!["python", "rust"]);
}

#[test]
fn test_list_in_category() {
    let (_guard, manager) = catalog();

    let rust = manager.list_in_category("rust");
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].name, "rust-cli");
    assert!(manager.list_in_category("haskell").is_empty());
}

#[test]
fn test_search_is_case_insensitive_over_name_and_description() {
    let (_guard, manager) = catalog();

    let by_name = manager.search("RUST");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "rust-cli");

    let by_description = manager.search("skeleton");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].name, "python-lib");

    assert!(manager.search("cobol").is_empty());
}

#[test]
fn test_get_unknown_template() {
    let (_guard, manager) = catalog();

    match manager.get("go-service") {
        Err(Error::TemplateNotFound(name)) => assert_eq!(name, "go-service"),
        other => panic!("Expected TemplateNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_templates_directory() {
    let mut manager = TemplateManager::new("/definitely/not/a/templates/dir");

    match manager.load() {
        Err(Error::DirectoryNotFound(_)) => {}
        other => panic!("Expected DirectoryNotFound, got {:?}", other),
    }
}

#[test]
fn test_broken_documents_are_skipped_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("rust-cli.json"), RUST_CLI).unwrap();
    fs::write(temp_dir.path().join("broken.json"), "{not json").unwrap();
    fs::write(
        temp_dir.path().join("no-structure.json"),
        r#"{"name": "bare", "description": "missing structure"}"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not a template").unwrap();

    let mut manager = TemplateManager::new(temp_dir.path());
    manager.load().unwrap();

    assert_eq!(manager.list(), vec!["rust-cli"]);
}

#[test]
fn test_load_from_file_reports_missing_structure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bare.json");
    fs::write(&path, r#"{"name": "bare", "description": "no structure"}"#).unwrap();

    match Template::load_from_file(&path) {
        Err(Error::InvalidTemplateStructure(_)) => {}
        other => panic!("Expected InvalidTemplateStructure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_validate_rejects_bad_structure_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("odd.json");
    fs::write(
        &path,
        r#"{"name": "odd", "description": "numbers inside", "structure": {"a.txt": 42}}"#,
    )
    .unwrap();

    let mut manager = TemplateManager::new(temp_dir.path());
    manager.load().unwrap();

    let template = manager.get("odd").unwrap();
    match manager.validate(template) {
        Err(Error::InvalidTemplateStructure(name)) => assert_eq!(name, "odd"),
        other => panic!("Expected InvalidTemplateStructure, got {:?}", other),
    }
}

#[test]
fn test_generate_from_template_writes_project() {
    let (_guard, manager) = catalog();

    let out = TempDir::new().unwrap();
    let destination = out.path().join("myapp");
    let stats = manager
        .generate_from_template("rust-cli", "myapp", &destination, Options::default())
        .unwrap();

    assert_eq!(stats.dirs_created, 2); // myapp, src
    assert_eq!(stats.files_created, 2);
    assert_eq!(
        fs::read_to_string(destination.join("src/main.rs")).unwrap(),
        "fn main() {}\n"
    );
    assert!(destination.join("Cargo.toml").is_file());
}

#[test]
fn test_generate_from_unknown_template() {
    let (_guard, manager) = catalog();

    let out = TempDir::new().unwrap();
    let result = manager.generate_from_template(
        "go-service",
        "myapp",
        out.path().join("myapp"),
        Options::default(),
    );

    match result {
        Err(Error::TemplateNotFound(_)) => {}
        other => panic!("Expected TemplateNotFound, got {:?}", other),
    }
}
