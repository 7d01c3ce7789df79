use clap::Parser;
use mason::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("mason")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_init_args() {
    let args = make_args(&["init", "structure.md", "-o", "./out"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(!parsed.verbose);
    assert!(!parsed.dry_run);
    match parsed.command {
        Command::Init { file, output, overwrite } => {
            assert_eq!(file, PathBuf::from("structure.md"));
            assert_eq!(output, Some(PathBuf::from("./out")));
            assert!(!overwrite);
        }
        other => panic!("Expected Init, got {:?}", other),
    }
}

#[test]
fn test_create_args() {
    let args = make_args(&["create", "-t", "rust-cli", "-n", "myapp", "--overwrite"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Create { template, name, output, overwrite } => {
            assert_eq!(template, "rust-cli");
            assert_eq!(name, "myapp");
            assert_eq!(output, None);
            assert!(overwrite);
        }
        other => panic!("Expected Create, got {:?}", other),
    }
}

#[test]
fn test_global_flags() {
    let args = make_args(&["--verbose", "--dry-run", "--templates-dir", "./tpl", "list"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.dry_run);
    assert_eq!(parsed.templates_dir, Some(PathBuf::from("./tpl")));
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = make_args(&["list", "-v", "--dry-run"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert!(parsed.dry_run);
}

#[test]
fn test_list_category_filter() {
    let args = make_args(&["list", "-c", "rust"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::List { category } => assert_eq!(category, Some("rust".to_string())),
        other => panic!("Expected List, got {:?}", other),
    }
}

#[test]
fn test_show_args() {
    let args = make_args(&["show", "rust-cli"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Command::Show { template } => assert_eq!(template, "rust-cli"),
        other => panic!("Expected Show, got {:?}", other),
    }
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_create_requires_template_and_name() {
    assert!(Args::try_parse_from(make_args(&["create", "-t", "rust-cli"])).is_err());
    assert!(Args::try_parse_from(make_args(&["create", "-n", "myapp"])).is_err());
}
