use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoipConfig {
    /// `GEOIP_PATH` — directory containing `GeoLite2-ASN.mmdb` and
    /// `GeoLite2-Country.mmdb`.
    pub dir: String,
}
