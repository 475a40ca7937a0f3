use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, site_root: None });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_site_root() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ROOT", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", ""), ("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn rejects_invalid_port() {
    for raw in ["abc", "70000", "0", "-1"] {
        let err = HostConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid { var: "PORT", value: raw.to_owned() }, "{raw}");
    }
}
