use serde::{Deserialize, Serialize};

/// Sentinel id for the "Unknown" ASN row. Schema bootstrap inserts
/// `(1, 0, "Unknown")` before the crawler runs — this crate never creates it.
pub const UNKNOWN_ASN_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asn {
    pub id: i64,
    pub number: i64,
    pub name: String,
}
