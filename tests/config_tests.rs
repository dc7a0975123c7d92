// Config loading and validation tests

use rds_top::config::AppConfig;
use std::io::Write;

const VALID_CONFIG: &str = r#"
[aws]
region = "eu-west-1"
profile = "prod"

[report]
sort_by_mem = true
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.aws.profile.as_deref(), Some("prod"));
    assert!(config.report.sort_by_mem);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("load_from_str");
    assert!(config.aws.region.is_none());
    assert!(config.aws.profile.is_none());
    assert!(!config.report.sort_by_mem);
}

#[test]
fn test_no_path_uses_defaults() {
    let config = AppConfig::load(None).expect("load");
    assert!(config.aws.region.is_none());
    assert!(!config.report.sort_by_mem);
}

#[test]
fn test_config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::load(Some(file.path())).expect("load");
    assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_config_validation_rejects_empty_region() {
    let bad = VALID_CONFIG.replace("region = \"eu-west-1\"", "region = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("aws.region"));
}

#[test]
fn test_config_validation_rejects_empty_profile() {
    let bad = VALID_CONFIG.replace("profile = \"prod\"", "profile = \" \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("aws.profile"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}
