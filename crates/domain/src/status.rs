use std::fmt;
use std::str::FromStr;

/// Ternary IPv6-readiness classification for a single DNS-derived measurement.
///
/// Booleans cannot distinguish "never resolved" from "resolved but IPv4-only",
/// which matters both for enrichment suppression and for changelog wording
/// ("newly discovered IPv4-only" vs. "regressed to IPv4-only").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Supported,
    Unsupported,
    NoRecord,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Supported => "supported",
            Status::Unsupported => "unsupported",
            Status::NoRecord => "no_record",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = std::convert::Infallible;

    /// Empty string coerces to `NoRecord`; any other unknown value also
    /// falls back to `NoRecord` rather than failing, matching the
    /// empty-answer belt-and-suspenders policy callers apply before transition
    /// detection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "supported" => Status::Supported,
            "unsupported" => Status::Unsupported,
            _ => Status::NoRecord,
        })
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NoRecord
    }
}
