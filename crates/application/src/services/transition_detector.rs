use chrono::{DateTime, Utc};
use v6crawl_domain::{ChangelogDraft, DomainError, Measurement, MeasurementSnapshot, NewMeasurements, Status};

/// Diffs a persisted snapshot against freshly observed measurements,
/// producing at most one changelog draft per changed measurement and
/// mutating the snapshot in place. Pure: no I/O beyond the
/// `&mut` it's handed.
pub struct TransitionDetectorService;

impl TransitionDetectorService {
    /// Applies `new` onto `current`. Unconditionally refreshes enrichment
    /// and `ts_check`; a changelog draft is emitted for each measurement
    /// whose value actually differs, in the order `base, www, ns, mx`.
    pub fn apply<T: MeasurementSnapshot>(
        current: &mut T,
        new: NewMeasurements,
        now: DateTime<Utc>,
    ) -> Result<Vec<ChangelogDraft>, DomainError> {
        let mut drafts = Vec::new();

        for m in Measurement::ALL {
            let from = current.measurement(m);
            let to = match m {
                Measurement::Base => new.base,
                Measurement::Www => new.www,
                Measurement::Ns => new.ns,
                Measurement::Mx => new.mx,
            };
            if from == to {
                continue;
            }

            let message = transition_message(current.site(), m, from, to).ok_or_else(|| {
                DomainError::UnknownTransition {
                    site: current.site().to_string(),
                    measurement: m.as_str().to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                }
            })?;

            drafts.push(ChangelogDraft {
                domain_id: current.id(),
                campaign_id: current.campaign_id(),
                message,
                new_status: to,
            });

            current.set_measurement(m, to, now);
        }

        current.set_enrichment(new.asn_id, new.country_id);
        current.set_ts_check(now);

        Ok(drafts)
    }
}

/// The message table. `{D}` is the site; `www` substitutes
/// `www.{D}`.
fn transition_message(site: &str, m: Measurement, from: Status, to: Status) -> Option<String> {
    use Status::*;

    let target: std::borrow::Cow<'_, str> = match m {
        Measurement::Www => std::borrow::Cow::Owned(format!("www.{site}")),
        _ => std::borrow::Cow::Borrowed(site),
    };

    let message = match (m, from, to) {
        (Measurement::Base | Measurement::Www, Unsupported, Supported)
        | (Measurement::Base | Measurement::Www, NoRecord, Supported) => {
            format!("IPv6 enabled for {target}")
        }
        (Measurement::Base | Measurement::Www, Supported, Unsupported) => {
            format!("IPv6 lost for {target}")
        }
        (Measurement::Base | Measurement::Www, NoRecord, Unsupported) => {
            format!("IPv4-only for {target}")
        }
        (Measurement::Base | Measurement::Www, _, NoRecord) => {
            format!("No DNS records found for {target}")
        }

        (Measurement::Ns, Unsupported, Supported) | (Measurement::Ns, NoRecord, Supported) => {
            format!("IPv6 enabled nameserver for {target}")
        }
        (Measurement::Ns, Supported, Unsupported) => {
            format!("Nameservers degraded to IPv4-only for {target}")
        }
        (Measurement::Ns, NoRecord, Unsupported) => {
            format!("IPv4-only nameservers for {target}")
        }
        (Measurement::Ns, _, NoRecord) => format!("No NS records found for {target}"),

        (Measurement::Mx, Unsupported, Supported) | (Measurement::Mx, NoRecord, Supported) => {
            format!("IPv6 enabled MX records for {target}")
        }
        (Measurement::Mx, Supported, Unsupported) => {
            format!("MX records degraded to IPv4-only for {target}")
        }
        (Measurement::Mx, NoRecord, Unsupported) => {
            format!("IPv4-only MX records for {target}")
        }
        (Measurement::Mx, _, NoRecord) => format!("No Mail records found for {target}"),

        _ => return None,
    };

    Some(message)
}
