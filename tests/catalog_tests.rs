use std::io::Write;
use tempfile::NamedTempFile;
use zoneforge::catalog::{RoleFilter, ZoneCatalog};
use zoneforge::error::ConfigError;

const ZONE_LIST: &str = r#"
zones:
  dnssec:
    - secure.example: /var/lib/zones/secure.example
    - transfer.example:
        file: /var/lib/zones/transfer.example
        slave: true
  regular:
    - plain.example: /var/lib/zones/plain.example
    - mirrored.example:
        file: /var/lib/zones/mirrored.example
        slave: true
"#;

fn write_zone_list(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file_master() {
    let file = write_zone_list(ZONE_LIST);
    let catalog = ZoneCatalog::load(file.path(), RoleFilter::Master).unwrap();

    // Catalog size equals the unique zone names across both lists
    assert_eq!(catalog.len(), 4);

    let secure = catalog.get("secure.example").unwrap();
    assert!(secure.is_dnssec);
    assert!(!secure.participates_as_slave);
    assert_eq!(secure.source_file, "/var/lib/zones/secure.example");

    let plain = catalog.get("plain.example").unwrap();
    assert!(!plain.is_dnssec);
}

#[test]
fn test_load_from_file_slave() {
    let file = write_zone_list(ZONE_LIST);
    let catalog = ZoneCatalog::load(file.path(), RoleFilter::Slave).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.iter().all(|z| z.participates_as_slave));
    assert!(catalog.get("secure.example").is_none());
    assert!(catalog.get("transfer.example").is_some());
    assert!(catalog.get("mirrored.example").is_some());
}

#[test]
fn test_catalog_iterates_in_name_order() {
    let catalog = ZoneCatalog::from_str(ZONE_LIST, RoleFilter::Master).unwrap();
    let names: Vec<&str> = catalog.iter().map(|z| z.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_empty_zones_key_fails() {
    let file = write_zone_list("zones:\n");
    assert_eq!(
        ZoneCatalog::load(file.path(), RoleFilter::Master),
        Err(ConfigError::NoZonesSection)
    );
}

#[test]
fn test_absent_zones_key_fails() {
    let file = write_zone_list("other: true\n");
    assert_eq!(
        ZoneCatalog::load(file.path(), RoleFilter::Master),
        Err(ConfigError::NoZonesSection)
    );
}

#[test]
fn test_empty_lists_fail_with_no_zones_found() {
    let doc = "zones:\n  dnssec: []\n  regular: []\n";
    assert_eq!(
        ZoneCatalog::from_str(doc, RoleFilter::Master),
        Err(ConfigError::NoZonesFound)
    );
}

#[test]
fn test_duplicate_name_across_lists_fails() {
    let doc = r#"
zones:
  dnssec:
    - twice.example: /var/lib/zones/a
  regular:
    - twice.example: /var/lib/zones/b
"#;
    assert_eq!(
        ZoneCatalog::from_str(doc, RoleFilter::Master),
        Err(ConfigError::DuplicateZone("twice.example".to_string()))
    );
}

#[test]
fn test_duplicate_detection_ignores_role_filter() {
    // The duplicate is not kept on a slave, but the zone list is still bad.
    let doc = r#"
zones:
  dnssec:
    - twice.example: /var/lib/zones/a
  regular:
    - twice.example:
        file: /var/lib/zones/b
        slave: true
"#;
    assert_eq!(
        ZoneCatalog::from_str(doc, RoleFilter::Slave),
        Err(ConfigError::DuplicateZone("twice.example".to_string()))
    );
}

#[test]
fn test_missing_file_fails_with_io_error() {
    let err = ZoneCatalog::load("/nonexistent/zones.yaml", RoleFilter::Master).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
