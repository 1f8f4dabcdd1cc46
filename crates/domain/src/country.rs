use serde::{Deserialize, Serialize};

/// Sentinel id for the "Unknown" country row. Schema bootstrap inserts
/// `(251, "Unknown", "", "")` before the crawler runs.
pub const UNKNOWN_COUNTRY_ID: i64 = 251;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub cc_tld: String,
    pub iso_code: String,
}
