use std::net::IpAddr;

use rustc_hash::FxHashMap;

/// Headers consulted for a client address, most specific first, ending with
/// the direct connection address.
const IP_HEADERS: [&str; 7] = [
    "client-ip",
    "x-forwarded-for",
    "x-forwarded",
    "x-cluster-client-ip",
    "forwarded-for",
    "forwarded",
    "remote-addr",
];

/// Best-guess client address from an explicit header map. Proxy headers are
/// trivially spoofable: treat the result as a location hint only, never as
/// an authentication or access-control signal.
///
/// Header names match case-insensitively. Multi-hop values keep only the
/// first comma-separated token; anything that does not parse as an IPv4 or
/// IPv6 address is skipped.
pub fn resolve_client_ip(headers: &FxHashMap<String, String>) -> Option<IpAddr> {
    for header in IP_HEADERS {
        let value = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header))
            .map(|(_, value)| value.as_str());

        if let Some(value) = value {
            let candidate = value.split(',').next().unwrap_or_default().trim();
            if let Ok(ip) = candidate.parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }

    None
}
