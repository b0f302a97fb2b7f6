//! Static table of regions with an RDS endpoint

/// Region ids the default endpoint is known for
pub const REGIONS: &[&str] = &[
    "af-south-1",
    "cn-north-4",
    "cn-north-1",
    "cn-east-2",
    "cn-east-3",
    "cn-south-1",
    "cn-southwest-2",
    "ap-southeast-2",
    "ap-southeast-1",
    "ap-southeast-3",
    "ru-northwest-2",
    "sa-brazil-1",
    "la-north-2",
    "cn-south-2",
    "na-mexico-1",
    "la-south-2",
    "cn-north-9",
    "cn-north-2",
    "tr-west-1",
    "ap-southeast-4",
    "ae-ad-1",
    "eu-west-101",
];

/// Whether `region` is in [`REGIONS`]
#[must_use]
pub fn is_known_region(region: &str) -> bool {
    REGIONS.contains(&region)
}

/// `https://rds.{region}.myhuaweicloud.com` for a known region
#[must_use]
pub fn default_endpoint(region: &str) -> Option<String> {
    is_known_region(region).then(|| format!("https://rds.{region}.myhuaweicloud.com"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        assert_eq!(REGIONS.len(), 22);
        assert!(is_known_region("cn-north-4"));
        assert!(is_known_region("eu-west-101"));
        assert!(!is_known_region("CN-NORTH-4"));
        assert!(!is_known_region("us-east-1"));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            default_endpoint("ap-southeast-1").as_deref(),
            Some("https://rds.ap-southeast-1.myhuaweicloud.com")
        );
        assert_eq!(default_endpoint("moon-base-1"), None);
    }
}
