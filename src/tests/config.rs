use super::Config;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(Config::from_toml("").unwrap(), Config::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let cfg = Config::from_toml("tag = \"h3\"\n").unwrap();
    assert_eq!(cfg.tag, "h3");
    assert_eq!(cfg.output, "split_markdown");
    assert_eq!(cfg.extension, "md");
}

#[test]
fn test_full_toml() {
    let cfg = Config::from_toml("tag = \"H1\"\noutput = \"chapters\"\nextension = \"markdown\"\n")
        .unwrap();
    assert_eq!(
        cfg,
        Config {
            tag: "H1".to_string(),
            output: "chapters".to_string(),
            extension: "markdown".to_string(),
        }
    );
}

#[test]
fn test_load_from_missing_file() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(Config::load_from(&tmp.path().join("mdsplit.toml")), Config::default());
}

#[test]
fn test_load_from_invalid_file_falls_back() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("mdsplit.toml");
    fs::write(&path, "tag = [not toml").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("mdsplit.toml");
    fs::write(&path, "output = \"sections\"\n").unwrap();
    assert_eq!(Config::load_from(&path).output, "sections");
}
