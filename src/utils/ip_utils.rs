use std::net::Ipv4Addr;

/// IP utility functions for validation and manipulation

/// Check if a string is a valid IPv4 address
pub fn is_valid_ipv4(ip: &str) -> bool {
    ip.parse::<Ipv4Addr>().is_ok()
}

/// Parse an `address/prefix` string into its parts
pub fn split_cidr(cidr: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, prefix) = cidr.split_once('/')?;
    let addr = addr.parse::<Ipv4Addr>().ok()?;
    let prefix = prefix.parse::<u8>().ok()?;
    if prefix > 32 {
        return None;
    }
    Some((addr, prefix))
}

/// Check if a string is a valid IPv4 CIDR (`address/prefix`)
pub fn is_valid_cidr(cidr: &str) -> bool {
    split_cidr(cidr).is_some()
}

/// The address part of a CIDR string (the input itself if it has no prefix)
pub fn strip_prefix(cidr: &str) -> &str {
    cidr.split('/').next().unwrap_or(cidr)
}

/// Check whether `gateway` lies inside the subnet of `cidr`
pub fn gateway_in_subnet(cidr: &str, gateway: &str) -> bool {
    let Some((addr, prefix)) = split_cidr(cidr) else {
        return false;
    };
    let Ok(gw) = gateway.parse::<Ipv4Addr>() else {
        return false;
    };
    if prefix == 0 {
        return true;
    }
    let mask = u32::MAX << (32 - prefix);
    (u32::from(addr) & mask) == (u32::from(gw) & mask)
}
