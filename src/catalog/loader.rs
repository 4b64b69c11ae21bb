//! Zone list loading.
//!
//! The zone list is a YAML document with a top-level `zones` key holding
//! optional `dnssec` and `regular` lists. Each list entry maps a zone name
//! to either a bare zone-file path or a record with a `file` path and an
//! optional `slave` flag:
//!
//! ```yaml
//! zones:
//!   dnssec:
//!     - example.com: /var/lib/zones/example.com
//!     - example.net:
//!         file: /var/lib/zones/example.net
//!         slave: true
//!   regular:
//!     - plain.org: /var/lib/zones/plain.org
//! ```

use super::{ZoneCatalog, ZoneEntry};
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Which zones a deployment role keeps from the zone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFilter {
    /// Master deployment: every declared zone is kept.
    Master,
    /// Slave deployment: only zones declared with `slave: true` are kept.
    Slave,
}

#[derive(Debug, Deserialize)]
struct ZoneListDoc {
    zones: Option<ZoneLists>,
}

#[derive(Debug, Default, Deserialize)]
struct ZoneLists {
    #[serde(default)]
    dnssec: Vec<BTreeMap<String, ZoneRef>>,
    #[serde(default)]
    regular: Vec<BTreeMap<String, ZoneRef>>,
}

/// A zone-file reference: either a bare path or a record with flags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZoneRef {
    Path(String),
    Detailed {
        file: String,
        #[serde(default)]
        slave: bool,
    },
}

impl ZoneCatalog {
    /// Load a zone catalog from a YAML zone list on disk.
    pub fn load<P: AsRef<Path>>(path: P, filter: RoleFilter) -> Result<ZoneCatalog> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_str(&contents, filter)
    }

    /// Parse a zone catalog from YAML zone-list text.
    ///
    /// Merges the `dnssec` and `regular` lists into one name-keyed catalog
    /// and applies the role filter. A name appearing twice anywhere in the
    /// document is an error, regardless of the filter in effect.
    pub fn from_str(contents: &str, filter: RoleFilter) -> Result<ZoneCatalog> {
        let doc: ZoneListDoc = serde_yaml::from_str(contents)?;
        let lists = doc.zones.ok_or(ConfigError::NoZonesSection)?;

        let mut catalog = ZoneCatalog::default();
        let mut seen = HashSet::new();
        merge_list(&lists.dnssec, true, filter, &mut catalog, &mut seen)?;
        merge_list(&lists.regular, false, filter, &mut catalog, &mut seen)?;

        if catalog.is_empty() {
            return Err(ConfigError::NoZonesFound);
        }
        debug!("Loaded {} zone(s) from zone list", catalog.len());
        Ok(catalog)
    }
}

fn merge_list(
    list: &[BTreeMap<String, ZoneRef>],
    is_dnssec: bool,
    filter: RoleFilter,
    catalog: &mut ZoneCatalog,
    seen: &mut HashSet<String>,
) -> Result<()> {
    for item in list {
        for (name, reference) in item {
            if name.is_empty() {
                return Err(ConfigError::Yaml("empty zone name".to_string()));
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateZone(name.clone()));
            }
            let (source_file, participates_as_slave) = match reference {
                ZoneRef::Path(path) => (path.clone(), false),
                ZoneRef::Detailed { file, slave } => (file.clone(), *slave),
            };
            if filter == RoleFilter::Slave && !participates_as_slave {
                debug!("Skipping non-slave zone {} on slave deployment", name);
                continue;
            }
            catalog.insert(ZoneEntry {
                name: name.clone(),
                is_dnssec,
                source_file,
                participates_as_slave,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE_LIST: &str = r#"
zones:
  dnssec:
    - example.com: /var/lib/zones/example.com
    - example.net:
        file: /var/lib/zones/example.net
        slave: true
  regular:
    - plain.org:
        file: /var/lib/zones/plain.org
        slave: true
    - local.test: /var/lib/zones/local.test
"#;

    #[test]
    fn master_keeps_everything() {
        let catalog = ZoneCatalog::from_str(ZONE_LIST, RoleFilter::Master).unwrap();
        assert_eq!(catalog.len(), 4);
        let entry = catalog.get("example.com").unwrap();
        assert!(entry.is_dnssec);
        assert!(!entry.participates_as_slave);
        assert_eq!(entry.source_file, "/var/lib/zones/example.com");
    }

    #[test]
    fn slave_keeps_only_slave_zones() {
        let catalog = ZoneCatalog::from_str(ZONE_LIST, RoleFilter::Slave).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("example.net").is_some());
        assert!(catalog.get("plain.org").is_some());
        assert!(catalog.iter().all(|z| z.participates_as_slave));
    }

    #[test]
    fn missing_zones_section_fails() {
        assert_eq!(
            ZoneCatalog::from_str("zones:\n", RoleFilter::Master),
            Err(ConfigError::NoZonesSection)
        );
    }

    #[test]
    fn duplicate_zone_name_fails() {
        let doc = r#"
zones:
  dnssec:
    - example.com: /var/lib/zones/a
  regular:
    - example.com: /var/lib/zones/b
"#;
        assert_eq!(
            ZoneCatalog::from_str(doc, RoleFilter::Master),
            Err(ConfigError::DuplicateZone("example.com".to_string()))
        );
    }

    #[test]
    fn empty_catalog_after_filter_fails() {
        let doc = r#"
zones:
  regular:
    - plain.org: /var/lib/zones/plain.org
"#;
        assert_eq!(
            ZoneCatalog::from_str(doc, RoleFilter::Slave),
            Err(ConfigError::NoZonesFound)
        );
    }
}
