//! Rendering of BIND configuration text.
//!
//! Every function here is a pure formatter: parameters in, finished
//! `named.conf` fragment out. Nothing in the output depends on the clock or
//! the environment, so identical inputs always render identical bytes.

use crate::tsig::TsigKey;
use std::fmt::Write;

/// Render a `key` stanza for a TSIG key.
pub fn key_stanza(key: &TsigKey) -> String {
    format!(
        "key \"{}\" {{\n    algorithm {};\n    secret \"{}\";\n}};\n",
        key.name,
        key.algorithm.bind_name(),
        key.secret
    )
}

/// Render the top-level include file for a single-view deployment.
///
/// `key_files` and `zone_files` are paths as BIND sees them at runtime.
pub fn include_simple(key_files: &[String], zone_files: &[String]) -> String {
    let mut out = String::from("// Generated zone include list. Do not edit by hand.\n");
    for path in key_files {
        let _ = writeln!(out, "include \"{}\";", path);
    }
    for path in zone_files {
        let _ = writeln!(out, "include \"{}\";", path);
    }
    out
}

/// Render the top-level include file for an external-signer deployment.
///
/// The signer authenticates with `match_key_name` and sees the internal
/// view (the unsigned DNSSEC zones); everyone else sees the public view.
pub fn include_dual_view(
    key_files: &[String],
    internal_files: &[String],
    public_files: &[String],
    match_key_name: &str,
) -> String {
    let mut out = String::from("// Generated zone include list. Do not edit by hand.\n");
    for path in key_files {
        let _ = writeln!(out, "include \"{}\";", path);
    }
    out.push('\n');
    out.push_str("view \"internal\" {\n");
    let _ = writeln!(out, "    match-clients {{ key \"{}\"; }};", match_key_name);
    for path in internal_files {
        let _ = writeln!(out, "    include \"{}\";", path);
    }
    out.push_str("};\n\n");
    out.push_str("view \"public\" {\n");
    out.push_str("    match-clients { any; };\n");
    for path in public_files {
        let _ = writeln!(out, "    include \"{}\";", path);
    }
    out.push_str("};\n");
    out
}

/// Render a plain master zone stanza.
pub fn zone_unsigned_master(zone: &str, zone_file: &str) -> String {
    format!(
        "zone \"{}\" {{\n    type master;\n    file \"{}\";\n}};\n",
        zone, zone_file
    )
}

/// Render the internal, unsigned copy of a DNSSEC zone on a signing
/// master. The local signer daemon reads this zone over loopback.
pub fn zone_dnssec_unsigned(
    zone: &str,
    zone_file: &str,
    signer_ip: &str,
    signer_port: u16,
) -> String {
    format!(
        "zone \"{zone}\" {{\n    type master;\n    file \"{zone_file}\";\n    allow-transfer {{ {signer_ip}; }};\n    notify explicit;\n    also-notify {{ {signer_ip} port {signer_port}; }};\n}};\n"
    )
}

/// Render the public, signed copy of a DNSSEC zone on a signing master.
/// BIND slaves the signed zone back from the signer daemon.
pub fn zone_dnssec_signed(
    zone: &str,
    zone_file: &str,
    signer_ip: &str,
    signer_port: u16,
    reader_key_name: &str,
) -> String {
    format!(
        "zone \"{zone}\" {{\n    type slave;\n    masters {{ {signer_ip} port {signer_port} key \"{reader_key_name}\"; }};\n    file \"{zone_file}.signed\";\n}};\n"
    )
}

/// Render the unsigned source of truth for a DNSSEC zone when an external
/// signer transfers it out, authenticated by the outbound key.
pub fn zone_master_for_external_signer(
    zone: &str,
    zone_file: &str,
    signer_ip: &str,
    signer_port: u16,
    out_key_name: &str,
) -> String {
    format!(
        "zone \"{zone}\" {{\n    type master;\n    file \"{zone_file}\";\n    allow-transfer {{ key \"{out_key_name}\"; }};\n    notify explicit;\n    also-notify {{ {signer_ip} port {signer_port}; }};\n}};\n"
    )
}

/// Render a slave zone stanza replicating from a declared master.
pub fn zone_unsigned_slave(zone: &str, zone_file: &str, master_ip: &str) -> String {
    format!(
        "zone \"{zone}\" {{\n    type slave;\n    masters {{ {master_ip}; }};\n    file \"{zone_file}\";\n}};\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsig::TsigAlgorithm;

    #[test]
    fn key_stanza_shape() {
        let key = TsigKey {
            name: "opendnssec-in".to_string(),
            algorithm: TsigAlgorithm::HmacSha256,
            secret: "abc==".to_string(),
        };
        let text = key_stanza(&key);
        assert!(text.contains("key \"opendnssec-in\""));
        assert!(text.contains("algorithm hmac-sha256;"));
        assert!(text.contains("secret \"abc==\";"));
    }

    #[test]
    fn dual_view_orders_internal_first() {
        let text = include_dual_view(
            &["/etc/bind/dnssec-key.conf".to_string()],
            &["/etc/bind/zones.public/a.conf".to_string()],
            &["/etc/bind/zones.public/a.conf".to_string()],
            "opendnssec-out",
        );
        let internal = text.find("view \"internal\"").unwrap();
        let public = text.find("view \"public\"").unwrap();
        assert!(internal < public);
        assert!(text.contains("match-clients { key \"opendnssec-out\"; };"));
    }
}
