//! Protocol constants for Bolide.

/// Default URL of the NASA meteorite landings dataset.
///
/// Returns a JSON array of records; consumed wholesale at startup.
pub const DATASET_URL: &str = "https://data.nasa.gov/resource/y77d-th95.json";

/// Response cache time-to-live in milliseconds (5 minutes).
///
/// Entries older than this are treated as absent on lookup.
pub const RESPONSE_CACHE_TTL_MS: u64 = 300_000;

/// Preferred listen port; probed upward by one while occupied.
pub const DEFAULT_PORT: u16 = 5000;

/// Page number assumed when the `page` query parameter is absent.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size assumed when the `limit` query parameter is absent.
pub const DEFAULT_LIMIT: u64 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_ttl_is_five_minutes() {
        assert_eq!(RESPONSE_CACHE_TTL_MS, 5 * 60 * 1000);
    }

    #[test]
    fn test_paging_defaults() {
        assert_eq!(DEFAULT_PAGE, 1);
        assert_eq!(DEFAULT_LIMIT, 10);
    }
}
