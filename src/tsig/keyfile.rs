//! Parsing of BIND/OpenDNSSEC private-key files into TSIG key material.
//!
//! A key file is line oriented:
//!
//! ```text
//! Private-key-format: v1.3
//! Algorithm: 161 (HMAC_SHA256)
//! Key: y2PiHJL7pVXSA0yHWRfI1Q==
//! ```
//!
//! Only the `Algorithm:` and `Key:` lines matter here; both must be present
//! and well formed or the whole key is rejected.

use super::TsigAlgorithm;
use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A TSIG key ready for inclusion in generated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsigKey {
    /// Key name as presented on the wire and in `key` stanzas
    pub name: String,
    /// HMAC algorithm
    pub algorithm: TsigAlgorithm,
    /// Shared secret (base64, passed through unvalidated)
    pub secret: String,
}

impl TsigKey {
    /// Read and parse a private-key file, naming the key `key_name`.
    pub fn from_file<P: AsRef<Path>>(path: P, key_name: &str) -> Result<TsigKey> {
        let path = path.as_ref();
        let material = fs::read_to_string(path)?;
        debug!("Parsing TSIG key file {}", path.display());
        parse_key_material(&material, key_name)
    }
}

/// Parse private-key material into a [`TsigKey`] named `key_name`.
///
/// Scans for an `Algorithm: <code> (<NAME>)` line and a `Key: <secret>`
/// line. An `Algorithm:` line that does not match that shape fails the
/// parse outright rather than being skipped.
pub fn parse_key_material(material: &str, key_name: &str) -> Result<TsigKey> {
    let mut algorithm = None;
    let mut secret = None;

    for line in material.lines() {
        if let Some(rest) = line.strip_prefix("Algorithm:") {
            algorithm = Some(parse_algorithm_field(rest.trim())?);
        } else if let Some(rest) = line.strip_prefix("Key:") {
            let value = rest.trim();
            if value.is_empty() {
                return Err(ConfigError::MalformedKeyFile(
                    "empty 'Key:' field".to_string(),
                ));
            }
            secret = Some(value.to_string());
        }
    }

    match (algorithm, secret) {
        (Some(algorithm), Some(secret)) => Ok(TsigKey {
            name: key_name.to_string(),
            algorithm,
            secret,
        }),
        (None, _) => Err(ConfigError::MalformedKeyFile(
            "missing 'Algorithm:' field".to_string(),
        )),
        (_, None) => Err(ConfigError::MalformedKeyFile(
            "missing 'Key:' field".to_string(),
        )),
    }
}

/// Parse the value of an `Algorithm:` field, e.g. `161 (HMAC_SHA256)`.
fn parse_algorithm_field(value: &str) -> Result<TsigAlgorithm> {
    let (code, name) = value
        .split_once('(')
        .and_then(|(code, rest)| Some((code.trim(), rest.strip_suffix(')')?.trim())))
        .ok_or_else(|| {
            ConfigError::MalformedKeyFile(format!("unparseable 'Algorithm:' field: {}", value))
        })?;
    if code.parse::<u16>().is_err() {
        return Err(ConfigError::MalformedKeyFile(format!(
            "non-numeric algorithm code: {}",
            code
        )));
    }
    TsigAlgorithm::from_key_file_name(name)
        .ok_or_else(|| ConfigError::UnsupportedAlgorithm(name.to_string()))
}
