//! Query parameters recognized by the listing endpoint.

/// Raw query parameters for `/meteors`.
///
/// Values are kept as the strings they arrived as; numeric interpretation
/// is deferred to the pipeline so that unparseable input degrades instead
/// of erroring. Unrecognized parameters still participate in the cache key
/// but are otherwise ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeteorQuery {
    /// Calendar-year filter.
    pub year: Option<String>,
    /// Minimum-mass filter (strictly greater than).
    pub mass: Option<String>,
    /// 1-based page number; defaults to 1 when absent.
    pub page: Option<String>,
    /// Page size; defaults to 10 when absent.
    pub limit: Option<String>,
}

impl MeteorQuery {
    /// Builds a query from decoded parameter pairs, first occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };
        Self {
            year: first("year"),
            mass: first("mass"),
            page: first("page"),
            limit: first("limit"),
        }
    }
}
