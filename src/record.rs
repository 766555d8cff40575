use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////
/// A DNS record as callers see it. `name` is relative to its zone, with
/// `""` or `"@"` meaning the apex. `ttl` is in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub r#type: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub ttl: u32,
}

impl Record {
    pub fn new(r#type: &str, name: &str, value: &str, ttl: u32) -> Self {
        Self {
            id: None,
            r#type: r#type.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            ttl,
        }
    }
}

////////////////////////////////////////////////////////////
// Naming
////////////////////////////////////////////////////////////

/// Qualifies `name` with `zone`. An empty name or `"@"` is the zone apex.
pub fn absolute_name(name: &str, zone: &str) -> String {
    if zone.is_empty() {
        return name.trim_matches('.').to_string();
    }
    if name.is_empty() || name == "@" {
        return zone.to_string();
    }
    if name.ends_with('.') {
        format!("{}{}", name, zone)
    } else {
        format!("{}.{}", name, zone)
    }
}

/// Inverse of [`absolute_name`]. Names outside `zone` come back unchanged
/// (minus any trailing dot); the apex becomes `"@"`.
pub fn relative_name(fqdn: &str, zone: &str) -> String {
    let fqdn = fqdn.trim_end_matches('.');
    let zone = zone.trim_end_matches('.');

    if zone.is_empty() {
        return fqdn.to_string();
    }
    if fqdn.eq_ignore_ascii_case(zone) {
        return "@".to_string();
    }

    let split = fqdn.len().checked_sub(zone.len() + 1);
    match split {
        Some(idx)
            if fqdn.as_bytes()[idx] == b'.'
                && fqdn[idx + 1..].eq_ignore_ascii_case(zone) =>
        {
            fqdn[..idx].to_string()
        }
        _ => fqdn.to_string(),
    }
}

/// Drops a single trailing root separator from a zone name.
pub fn normalize_zone_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

#[cfg(test)]
mod unit_test;
