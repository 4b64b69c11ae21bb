//! Configuration assembly.
//!
//! Takes a loaded [`ZoneCatalog`] and a deployment [`Role`] and produces
//! the ordered list of files to write: key includes first, then the
//! top-level include, then one or two config files per zone. Nothing here
//! touches the filesystem; the [`crate::writer`] consumes the directives.

use crate::catalog::{ZoneCatalog, ZoneEntry};
use crate::config::{
    self, INTERNAL_ZONE_DIR, LOCAL_SIGNER_PORT, PUBLIC_ZONE_DIR, Settings, display_path,
};
use crate::render;
use crate::tsig::TsigKey;
use std::path::PathBuf;
use tracing::debug;

/// Deployment role driving zone classification.
///
/// A master with an outbound key configured is fronting an external signer;
/// without one it signs through the local signer daemon. The plain-master
/// case is a signing master whose catalog happens to contain no DNSSEC
/// zones.
#[derive(Debug, Clone)]
pub enum Role {
    Master {
        /// Key BIND presents when reading signed zones back from a signer
        reader_key: TsigKey,
        /// Key an external signer presents to read unsigned zones; its
        /// presence switches the deployment to external-signer layout
        outbound_key: Option<TsigKey>,
    },
    Slave {
        /// Address of the master this deployment replicates from
        master_addr: String,
    },
}

/// One file to be written: target path, finished contents, required mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteDirective {
    pub path: PathBuf,
    pub contents: String,
    pub mode: u32,
}

impl WriteDirective {
    fn new(path: PathBuf, contents: String) -> Self {
        Self {
            path,
            contents,
            mode: config::FILE_MODE,
        }
    }
}

/// Stateless assembler for one generation run.
pub struct Assembler<'a> {
    settings: &'a Settings,
}

impl<'a> Assembler<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Produce the full ordered directive list for the catalog under the
    /// given role.
    pub fn assemble(&self, catalog: &ZoneCatalog, role: &Role) -> Vec<WriteDirective> {
        let mut directives = Vec::new();
        match role {
            Role::Master {
                reader_key,
                outbound_key,
            } => {
                if let Some(out_key) = outbound_key {
                    directives.push(self.key_include(&self.settings.outbound_key_file_name, out_key));
                }
                directives.push(self.key_include(&self.settings.reader_key_file_name, reader_key));
                directives.push(self.master_include(catalog, outbound_key.as_ref()));
                for zone in catalog.iter() {
                    self.master_zone_files(zone, reader_key, outbound_key.as_ref(), &mut directives);
                }
            }
            Role::Slave { master_addr } => {
                directives.push(self.slave_include(catalog));
                for zone in catalog.iter() {
                    debug!("Slave zone {}", zone.name);
                    directives.push(WriteDirective::new(
                        self.settings.zone_conf_path(PUBLIC_ZONE_DIR, &zone.name),
                        render::zone_unsigned_slave(&zone.name, &zone.source_file, master_addr),
                    ));
                }
            }
        }
        directives
    }

    fn key_include(&self, file_name: &str, key: &TsigKey) -> WriteDirective {
        WriteDirective::new(self.settings.out_path(file_name), render::key_stanza(key))
    }

    /// Top-level include for master roles. With an external signer the
    /// include splits into a dual view matched by the outbound key; the
    /// internal view references the DNSSEC zones' files a second time.
    fn master_include(&self, catalog: &ZoneCatalog, outbound_key: Option<&TsigKey>) -> WriteDirective {
        let contents = match outbound_key {
            Some(out_key) => {
                let key_files = vec![
                    display_path(&self.settings.runtime_path(&self.settings.outbound_key_file_name)),
                    display_path(&self.settings.runtime_path(&self.settings.reader_key_file_name)),
                ];
                let internal_files: Vec<String> = catalog
                    .dnssec_zones()
                    .map(|z| self.runtime_zone_ref(PUBLIC_ZONE_DIR, z))
                    .collect();
                let public_files: Vec<String> = catalog
                    .iter()
                    .map(|z| self.runtime_zone_ref(PUBLIC_ZONE_DIR, z))
                    .collect();
                render::include_dual_view(&key_files, &internal_files, &public_files, &out_key.name)
            }
            None => {
                let key_files = vec![display_path(
                    &self.settings.runtime_path(&self.settings.reader_key_file_name),
                )];
                let mut zone_files = Vec::new();
                for zone in catalog.iter() {
                    zone_files.push(self.runtime_zone_ref(PUBLIC_ZONE_DIR, zone));
                    if zone.is_dnssec {
                        zone_files.push(self.runtime_zone_ref(INTERNAL_ZONE_DIR, zone));
                    }
                }
                render::include_simple(&key_files, &zone_files)
            }
        };
        WriteDirective::new(self.settings.out_path(&self.settings.conf_file_name), contents)
    }

    /// Top-level include for the slave role: public references only, never
    /// an internal one, regardless of the DNSSEC flag.
    fn slave_include(&self, catalog: &ZoneCatalog) -> WriteDirective {
        let zone_files: Vec<String> = catalog
            .iter()
            .map(|z| self.runtime_zone_ref(PUBLIC_ZONE_DIR, z))
            .collect();
        WriteDirective::new(
            self.settings.out_path(&self.settings.conf_file_name),
            render::include_simple(&[], &zone_files),
        )
    }

    /// Per-zone files on a master, by the classification table.
    fn master_zone_files(
        &self,
        zone: &ZoneEntry,
        reader_key: &TsigKey,
        outbound_key: Option<&TsigKey>,
        directives: &mut Vec<WriteDirective>,
    ) {
        match (outbound_key, zone.is_dnssec) {
            (Some(out_key), true) => {
                debug!("DNSSEC zone {} (external signer)", zone.name);
                directives.push(WriteDirective::new(
                    self.settings.zone_conf_path(PUBLIC_ZONE_DIR, &zone.name),
                    render::zone_master_for_external_signer(
                        &zone.name,
                        &zone.source_file,
                        &self.settings.signer_ip,
                        self.settings.signer_port,
                        &out_key.name,
                    ),
                ));
            }
            (None, true) => {
                debug!("DNSSEC zone {} (local signer)", zone.name);
                directives.push(WriteDirective::new(
                    self.settings.zone_conf_path(INTERNAL_ZONE_DIR, &zone.name),
                    render::zone_dnssec_unsigned(
                        &zone.name,
                        &zone.source_file,
                        &self.settings.signer_ip,
                        LOCAL_SIGNER_PORT,
                    ),
                ));
                directives.push(WriteDirective::new(
                    self.settings.zone_conf_path(PUBLIC_ZONE_DIR, &zone.name),
                    render::zone_dnssec_signed(
                        &zone.name,
                        &zone.source_file,
                        &self.settings.signer_ip,
                        LOCAL_SIGNER_PORT,
                        &reader_key.name,
                    ),
                ));
            }
            (_, false) => {
                debug!("Non-DNSSEC zone {}", zone.name);
                directives.push(WriteDirective::new(
                    self.settings.zone_conf_path(PUBLIC_ZONE_DIR, &zone.name),
                    render::zone_unsigned_master(&zone.name, &zone.source_file),
                ));
            }
        }
    }

    fn runtime_zone_ref(&self, subdir: &str, zone: &ZoneEntry) -> String {
        display_path(&self.settings.runtime_zone_path(subdir, &zone.name))
    }
}
