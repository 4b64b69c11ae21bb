use std::collections::BTreeMap;

/// One managed zone from the zone list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    /// Zone name (e.g., "example.com")
    pub name: String,
    /// Whether this zone is DNSSEC-signed on this deployment
    pub is_dnssec: bool,
    /// Path to the underlying zone-data file
    pub source_file: String,
    /// Whether this zone is replicated to a slave deployment
    pub participates_as_slave: bool,
}

/// The normalized set of zones for one run, keyed by zone name.
///
/// Backed by a `BTreeMap` so iteration order, and therefore generated
/// output, is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneCatalog {
    zones: BTreeMap<String, ZoneEntry>,
}

impl ZoneCatalog {
    pub(crate) fn insert(&mut self, entry: ZoneEntry) -> Option<ZoneEntry> {
        self.zones.insert(entry.name.clone(), entry)
    }

    /// Look up a zone by name.
    pub fn get(&self, name: &str) -> Option<&ZoneEntry> {
        self.zones.get(name)
    }

    /// Number of zones in the catalog.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the catalog holds no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over zones in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.zones.values()
    }

    /// Iterate over the DNSSEC-signed zones in name order.
    pub fn dnssec_zones(&self) -> impl Iterator<Item = &ZoneEntry> {
        self.zones.values().filter(|z| z.is_dnssec)
    }
}
