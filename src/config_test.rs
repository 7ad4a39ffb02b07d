use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.content_path, PathBuf::from("content/site.json"));
    assert_eq!(config.static_dir, PathBuf::from("pkg"));
}

#[test]
fn overrides_are_read() {
    let config = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("CONTENT_PATH", "/srv/site.json"),
        ("STATIC_DIR", "/srv/pkg"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.content_path, PathBuf::from("/srv/site.json"));
    assert_eq!(config.static_dir, PathBuf::from("/srv/pkg"));
}

#[test]
fn port_whitespace_is_trimmed() {
    let config = SiteConfig::from_lookup(lookup(&[("PORT", " 4000\n")])).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_port_is_an_error() {
    let err = SiteConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(SiteConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
