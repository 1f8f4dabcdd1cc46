use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::asn::UNKNOWN_ASN_ID;
use crate::country::UNKNOWN_COUNTRY_ID;
use crate::status::Status;

/// The four DNS-derived measurements every domain carries, plus the
/// timestamp each one last changed and the timestamp of the last
/// observation regardless of change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: i64,
    pub site: String,
    pub base: Status,
    pub www: Status,
    pub ns: Status,
    pub mx: Status,
    pub ts_base: Option<DateTime<Utc>>,
    pub ts_www: Option<DateTime<Utc>>,
    pub ts_ns: Option<DateTime<Utc>>,
    pub ts_mx: Option<DateTime<Utc>>,
    pub ts_check: Option<DateTime<Utc>>,
    pub ts_updated: Option<DateTime<Utc>>,
    pub asn_id: i64,
    pub country_id: i64,
    pub rank: i64,
    pub enabled: bool,
}

impl Domain {
    pub fn new(id: i64, site: impl Into<String>) -> Self {
        Self {
            id,
            site: site.into(),
            base: Status::NoRecord,
            www: Status::NoRecord,
            ns: Status::NoRecord,
            mx: Status::NoRecord,
            ts_base: None,
            ts_www: None,
            ts_ns: None,
            ts_mx: None,
            ts_check: None,
            ts_updated: None,
            asn_id: UNKNOWN_ASN_ID,
            country_id: UNKNOWN_COUNTRY_ID,
            rank: 0,
            enabled: true,
        }
    }
}

/// Same shape as `Domain`, scoped to one campaign's domain pool. Addressed
/// by `(campaign_id, site)` rather than a bare numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDomain {
    pub id: i64,
    pub campaign_id: Uuid,
    pub site: String,
    pub base: Status,
    pub www: Status,
    pub ns: Status,
    pub mx: Status,
    pub ts_base: Option<DateTime<Utc>>,
    pub ts_www: Option<DateTime<Utc>>,
    pub ts_ns: Option<DateTime<Utc>>,
    pub ts_mx: Option<DateTime<Utc>>,
    pub ts_check: Option<DateTime<Utc>>,
    pub ts_updated: Option<DateTime<Utc>>,
    pub asn_id: i64,
    pub country_id: i64,
    pub rank: i64,
    pub enabled: bool,
}

impl CampaignDomain {
    pub fn new(id: i64, campaign_id: Uuid, site: impl Into<String>) -> Self {
        Self {
            id,
            campaign_id,
            site: site.into(),
            base: Status::NoRecord,
            www: Status::NoRecord,
            ns: Status::NoRecord,
            mx: Status::NoRecord,
            ts_base: None,
            ts_www: None,
            ts_ns: None,
            ts_mx: None,
            ts_check: None,
            ts_updated: None,
            asn_id: UNKNOWN_ASN_ID,
            country_id: UNKNOWN_COUNTRY_ID,
            rank: 0,
            enabled: true,
        }
    }
}

/// Freshly observed measurements for one domain, produced by the resolver
/// and enricher, handed to the transition detector alongside the persisted
/// snapshot it is diffed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMeasurements {
    pub base: Status,
    pub www: Status,
    pub ns: Status,
    pub mx: Status,
    pub asn_id: i64,
    pub country_id: i64,
}

/// One of the four measurement slots a `Domain`/`CampaignDomain` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Base,
    Www,
    Ns,
    Mx,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::Base,
        Measurement::Www,
        Measurement::Ns,
        Measurement::Mx,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Measurement::Base => "base",
            Measurement::Www => "www",
            Measurement::Ns => "ns",
            Measurement::Mx => "mx",
        }
    }
}

/// Uniform accessor over `Domain` and `CampaignDomain` so the transition
/// detector is one implementation instead of two near-identical copies.
pub trait MeasurementSnapshot {
    fn id(&self) -> i64;
    fn site(&self) -> &str;
    fn campaign_id(&self) -> Option<Uuid>;
    fn measurement(&self, m: Measurement) -> Status;
    fn set_measurement(&mut self, m: Measurement, status: Status, ts: DateTime<Utc>);
    fn set_enrichment(&mut self, asn_id: i64, country_id: i64);
    fn set_ts_check(&mut self, ts: DateTime<Utc>);
}

macro_rules! impl_measurement_snapshot {
    ($ty:ty, $campaign_id_expr:expr) => {
        impl MeasurementSnapshot for $ty {
            fn id(&self) -> i64 {
                self.id
            }

            fn site(&self) -> &str {
                &self.site
            }

            fn campaign_id(&self) -> Option<Uuid> {
                $campaign_id_expr(self)
            }

            fn measurement(&self, m: Measurement) -> Status {
                match m {
                    Measurement::Base => self.base,
                    Measurement::Www => self.www,
                    Measurement::Ns => self.ns,
                    Measurement::Mx => self.mx,
                }
            }

            fn set_measurement(&mut self, m: Measurement, status: Status, ts: DateTime<Utc>) {
                match m {
                    Measurement::Base => {
                        self.base = status;
                        self.ts_base = Some(ts);
                    }
                    Measurement::Www => {
                        self.www = status;
                        self.ts_www = Some(ts);
                    }
                    Measurement::Ns => {
                        self.ns = status;
                        self.ts_ns = Some(ts);
                    }
                    Measurement::Mx => {
                        self.mx = status;
                        self.ts_mx = Some(ts);
                    }
                }
                self.ts_updated = Some(ts);
            }

            fn set_enrichment(&mut self, asn_id: i64, country_id: i64) {
                self.asn_id = asn_id;
                self.country_id = country_id;
            }

            fn set_ts_check(&mut self, ts: DateTime<Utc>) {
                self.ts_check = Some(ts);
            }
        }
    };
}

impl_measurement_snapshot!(Domain, |_: &Domain| None);
impl_measurement_snapshot!(CampaignDomain, |d: &CampaignDomain| Some(d.campaign_id));
