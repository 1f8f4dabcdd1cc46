pub mod asn;
pub mod campaign;
pub mod changelog;
pub mod config;
pub mod country;
pub mod domain_record;
pub mod errors;
pub mod metric;
pub mod rcode;
pub mod status;
pub mod validators;

pub use asn::{Asn, UNKNOWN_ASN_ID};
pub use campaign::{Campaign, CampaignDomainLog};
pub use changelog::{ChangelogDraft, ChangelogEntry};
pub use config::{CliOverrides, Config, ConfigError};
pub use country::{Country, UNKNOWN_COUNTRY_ID};
pub use domain_record::{CampaignDomain, Domain, Measurement, MeasurementSnapshot, NewMeasurements};
pub use errors::DomainError;
pub use metric::{CycleSummary, DomainStats, MetricSample};
pub use rcode::{is_terminal, RCODE_IDNA_ERROR, RCODE_NAME_ERROR, RCODE_OK, RCODE_SERVER_FAILURE};
pub use status::Status;
