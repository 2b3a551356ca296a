use std::net::IpAddr;

/// Maximum presentation length of a domain name including the root terminator.
const MAX_NAME_LEN: usize = 254;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Checks that `name` is a well-formed fully-qualified domain name.
///
/// The root name `"."` is accepted. Escaped dots are not interpreted: every
/// `.` separates labels.
pub fn validate_fqdn(name: &str) -> Result<(), String> {
    if name == "." {
        return Ok(());
    }
    if !name.ends_with('.') {
        return Err(format!("'{}' is not fully qualified", name));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!(
            "name exceeds {} characters ({})",
            MAX_NAME_LEN,
            name.len()
        ));
    }
    if let Some(c) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("name contains invalid character {:?}", c));
    }

    for label in name[..name.len() - 1].split('.') {
        if label.is_empty() {
            return Err(format!("'{}' contains an empty label", name));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            ));
        }
    }

    Ok(())
}

pub fn validate_resolver_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Resolver name cannot be empty".to_string());
    }
    if name.len() > 200 {
        return Err("Resolver name cannot exceed 200 characters".to_string());
    }
    Ok(())
}

pub fn validate_resolver_address(address: &str, port: u16) -> Result<(), String> {
    address
        .parse::<IpAddr>()
        .map_err(|_| format!("'{}' is not an IP address", address))?;
    if port == 0 {
        return Err(format!("port for {} cannot be 0", address));
    }
    Ok(())
}
