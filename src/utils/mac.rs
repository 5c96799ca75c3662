/// MAC address helpers shared by declaration validation and the emitter.

/// Check if a string is a valid colon-separated MAC address
pub fn is_valid_mac(mac: &str) -> bool {
    let groups: Vec<&str> = mac.split(':').collect();
    groups.len() == 6
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Lowercase a MAC address for stable comparison
pub fn normalize_mac(mac: &str) -> String {
    mac.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_mac() {
        assert!(is_valid_mac("00:00:00:00:00:01"));
        assert!(is_valid_mac("ea:E9:78:fb:FD:2d"));
        assert!(!is_valid_mac("00:00:00:00:00"));
        assert!(!is_valid_mac("00:00:00:00:00:0g"));
        assert!(!is_valid_mac("00-00-00-00-00-01"));
        assert!(!is_valid_mac("000:00:00:00:00:1"));
        assert!(!is_valid_mac(""));
    }

    #[test]
    fn test_normalize_mac() {
        assert_eq!(normalize_mac("EA:E9:78:FB:FD:2D"), "ea:e9:78:fb:fd:2d");
        assert_eq!(normalize_mac("00:00:00:00:00:01"), "00:00:00:00:00:01");
    }
}
