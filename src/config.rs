//! Generation settings for a configurator run.
//!
//! Collects the destination layout, the directory BIND reads from at
//! runtime, and the signer endpoint into one value that the assembler and
//! writer share. Everything here has a default matching a stock
//! OpenDNSSEC-plus-BIND deployment.

use std::path::{Path, PathBuf};

/// Directory under the BIND directory holding public (served) zone configs.
pub const PUBLIC_ZONE_DIR: &str = "zones.public";

/// Directory under the BIND directory holding internal (unsigned) zone
/// configs on a signing master.
pub const INTERNAL_ZONE_DIR: &str = "zones.internal";

/// Default name of the top-level include file.
pub const DEFAULT_CONF_FILE_NAME: &str = "dnssec.conf";

/// Default file carrying the key used to read signed zones from the signer.
pub const DEFAULT_READER_KEY_FILE_NAME: &str = "dnssec-key.conf";

/// Default file carrying the key the signer presents to read unsigned zones.
pub const DEFAULT_OUTBOUND_KEY_FILE_NAME: &str = "dnssec-key-out.conf";

/// Default name for the inbound (reader) TSIG key.
pub const DEFAULT_READER_KEY_NAME: &str = "opendnssec-in";

/// Default name for the outbound TSIG key.
pub const DEFAULT_OUTBOUND_KEY_NAME: &str = "opendnssec-out";

/// Loopback address the local signer daemon serves signed zones on.
pub const LOCAL_SIGNER_IP: &str = "::1";

/// Port the local signer daemon serves signed zones on. Deliberately not
/// the standard transfer port so the signer and BIND can share a host.
pub const LOCAL_SIGNER_PORT: u16 = 54;

/// Standard zone transfer port, used for explicit masters and external
/// signers.
pub const STANDARD_TRANSFER_PORT: u16 = 53;

/// Mode applied to every generated file.
pub const FILE_MODE: u32 = 0o640;

/// Mode applied to every created zone-config directory.
pub const DIR_MODE: u32 = 0o750;

/// Owner applied to generated files when running with privilege.
pub const OWNER_NAME: &str = "root";

/// Group applied to generated files when running with privilege.
pub const GROUP_NAME: &str = "named";

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory BIND resolves relative include paths against at runtime.
    /// Used inside generated text, not for writing.
    pub bind_dir: PathBuf,

    /// Directory generated files are written to. `None` writes relative to
    /// the working directory.
    pub dest_dir: Option<PathBuf>,

    /// Name of the top-level include file.
    pub conf_file_name: String,

    /// Name of the reader-key include file.
    pub reader_key_file_name: String,

    /// Name of the outbound-key include file.
    pub outbound_key_file_name: String,

    /// Address of the signer daemon reading unsigned zones.
    pub signer_ip: String,

    /// Port of the signer daemon reading unsigned zones.
    pub signer_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_dir: PathBuf::from("/etc/bind"),
            dest_dir: None,
            conf_file_name: DEFAULT_CONF_FILE_NAME.to_string(),
            reader_key_file_name: DEFAULT_READER_KEY_FILE_NAME.to_string(),
            outbound_key_file_name: DEFAULT_OUTBOUND_KEY_FILE_NAME.to_string(),
            signer_ip: LOCAL_SIGNER_IP.to_string(),
            signer_port: STANDARD_TRANSFER_PORT,
        }
    }
}

impl Settings {
    /// Resolve a file name against the destination directory.
    pub fn out_path(&self, name: &str) -> PathBuf {
        match &self.dest_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Destination path of a zone's config file in the given subdirectory.
    pub fn zone_conf_path(&self, subdir: &str, zone: &str) -> PathBuf {
        self.out_path(subdir).join(format!("{}.conf", zone))
    }

    /// Path of a file as BIND sees it at runtime, for use in generated
    /// include statements.
    pub fn runtime_path(&self, name: &str) -> PathBuf {
        self.bind_dir.join(name)
    }

    /// Runtime path of a zone's config file in the given subdirectory.
    pub fn runtime_zone_path(&self, subdir: &str, zone: &str) -> PathBuf {
        self.bind_dir.join(subdir).join(format!("{}.conf", zone))
    }
}

/// Render a path for inclusion in generated configuration text.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
