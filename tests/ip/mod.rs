use nearby_events::ip::resolve_client_ip;
use rustc_hash::FxHashMap;

fn headers(entries: &[(&str, &str)]) -> FxHashMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn returns_none_without_any_address_header() {
    assert_eq!(resolve_client_ip(&headers(&[])), None);
    assert_eq!(
        resolve_client_ip(&headers(&[("accept", "application/json")])),
        None
    );
}

#[test]
fn client_ip_outranks_forwarded_headers() {
    let map = headers(&[
        ("x-forwarded-for", "198.51.100.7"),
        ("client-ip", "203.0.113.9"),
        ("remote-addr", "10.0.0.1"),
    ]);

    assert_eq!(
        resolve_client_ip(&map),
        Some("203.0.113.9".parse().unwrap())
    );
}

#[test]
fn remote_addr_is_the_last_resort() {
    let map = headers(&[("remote-addr", "10.0.0.1")]);

    assert_eq!(resolve_client_ip(&map), Some("10.0.0.1".parse().unwrap()));
}

#[test]
fn multi_hop_values_keep_the_first_token() {
    let map = headers(&[("x-forwarded-for", " 203.0.113.9 , 10.0.0.1, 10.0.0.2")]);

    assert_eq!(
        resolve_client_ip(&map),
        Some("203.0.113.9".parse().unwrap())
    );
}

#[test]
fn header_names_match_case_insensitively() {
    let map = headers(&[("X-Forwarded-For", "203.0.113.9")]);

    assert_eq!(
        resolve_client_ip(&map),
        Some("203.0.113.9".parse().unwrap())
    );
}

#[test]
fn garbage_values_fall_through_to_the_next_header() {
    let map = headers(&[
        ("client-ip", "not-an-address"),
        ("x-forwarded-for", "203.0.113.9"),
    ]);

    assert_eq!(
        resolve_client_ip(&map),
        Some("203.0.113.9".parse().unwrap())
    );
}

#[test]
fn ipv6_addresses_are_accepted() {
    let map = headers(&[("x-forwarded-for", "2001:db8::1")]);

    assert_eq!(resolve_client_ip(&map), Some("2001:db8::1".parse().unwrap()));
}
