use std::fmt;

/// TSIG HMAC algorithms accepted for zone-transfer keys.
///
/// Only the SHA family is supported; anything else found in a key file is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsigAlgorithm {
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl TsigAlgorithm {
    /// Get the algorithm name as used in BIND configuration.
    pub fn bind_name(&self) -> &'static str {
        match self {
            TsigAlgorithm::HmacSha1 => "hmac-sha1",
            TsigAlgorithm::HmacSha224 => "hmac-sha224",
            TsigAlgorithm::HmacSha256 => "hmac-sha256",
            TsigAlgorithm::HmacSha384 => "hmac-sha384",
            TsigAlgorithm::HmacSha512 => "hmac-sha512",
        }
    }

    /// Parse the algorithm name found in a BIND/OpenDNSSEC private-key
    /// file, e.g. the `HMAC_SHA256` in `Algorithm: 161 (HMAC_SHA256)`.
    pub fn from_key_file_name(name: &str) -> Option<Self> {
        match name.to_uppercase().replace('-', "_").as_str() {
            "HMAC_SHA1" => Some(TsigAlgorithm::HmacSha1),
            "HMAC_SHA224" => Some(TsigAlgorithm::HmacSha224),
            "HMAC_SHA256" => Some(TsigAlgorithm::HmacSha256),
            "HMAC_SHA384" => Some(TsigAlgorithm::HmacSha384),
            "HMAC_SHA512" => Some(TsigAlgorithm::HmacSha512),
            _ => None,
        }
    }
}

impl fmt::Display for TsigAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bind_name())
    }
}
