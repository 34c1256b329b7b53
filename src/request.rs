use std::net::IpAddr;

use crate::models::Location;

/// Everything that shapes one outbound directory query.
pub struct EventsQuery<'a> {
    pub search: Option<&'a str>,
    pub timezone: Option<&'a str>,
    pub stored_location: Option<&'a Location>,
    pub client_ip: Option<IpAddr>,
    pub locale: &'a str,
    pub number: u32,
}

/// Assembles the request URL. An explicit search always wins over stored
/// coordinates; with neither, the server infers a location from the IP and
/// locale alone. `number` over-requests relative to what is shown so the
/// list survives trimming.
pub fn build_request_url(endpoint: &str, query: &EventsQuery<'_>) -> String {
    let mut params = vec![
        format!("number={}", query.number),
        format!("locale={}", urlencoding::encode(query.locale)),
    ];

    if let Some(ip) = query.client_ip {
        params.push(format!("ip={}", ip));
    }

    if let Some(timezone) = query.timezone {
        params.push(format!("timezone={}", urlencoding::encode(timezone)));
    }

    if let Some(search) = query.search {
        params.push(format!("location={}", urlencoding::encode(search)));
    } else if let Some(location) = query.stored_location {
        if let (Some(latitude), Some(longitude)) = (location.latitude, location.longitude) {
            params.push(format!("latitude={}", latitude));
            params.push(format!("longitude={}", longitude));
        }
    }

    format!("{}?{}", endpoint, params.join("&"))
}
