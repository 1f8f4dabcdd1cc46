use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, RecordType};
use tracing::{instrument, warn};
use v6crawl_application::ports::{ClassifyResult, DnsResolver};
use v6crawl_domain::{
    DomainError, Status, RCODE_IDNA_ERROR, RCODE_NAME_ERROR, RCODE_OK, RCODE_SERVER_FAILURE,
};

use super::idna::to_ascii;
use super::message::build_query;
use super::transport::{query_tcp, query_udp};

/// Matches `maxCNAMEHops` in the original crawler: a chain longer than this
/// is treated as unresolvable rather than followed forever.
const MAX_CNAME_HOPS: usize = 10;

/// Best-effort registrable part of a host: its last two dot-separated
/// labels, with no Public Suffix List lookup — incorrect for multi-label
/// public suffixes like `example.co.uk`, but that's the documented
/// limitation this heuristic carries.
fn registrable_part(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        host.to_string()
    } else {
        labels[labels.len() - 2..].join(".")
    }
}

/// A from-scratch DNS client over raw UDP/TCP sockets, with ordered
/// nameserver failover and CNAME following — the Rust shape of the
/// resolver this crate's DNS adapters are all modeled on, minus the
/// caching/DNSSEC/filtering layers that crawler-side lookups don't need.
pub struct HickoryDnsResolver {
    nameservers: Vec<SocketAddr>,
    timeout: Duration,
}

impl HickoryDnsResolver {
    pub fn new(nameservers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self { nameservers, timeout }
    }

    /// Tries every configured nameserver in order, falling back to TCP when
    /// a UDP answer comes back with the truncated bit set. The first
    /// nameserver to answer at all wins; later ones are never consulted.
    async fn perform_query(&self, fqdn: &str, record_type: RecordType) -> Result<Message, DomainError> {
        let query_bytes = build_query(fqdn, record_type)?;
        let mut last_err = None;

        for server in &self.nameservers {
            let udp_bytes = match query_udp(*server, &query_bytes, self.timeout).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(%server, error = %e, "nameserver query failed, trying next");
                    last_err = Some(e);
                    continue;
                }
            };

            let message = Message::from_vec(&udp_bytes)
                .map_err(|e| DomainError::AllResolversFailed(format!("malformed response from {server}: {e}")))?;

            if !message.truncated() {
                return Ok(message);
            }

            match query_tcp(*server, &query_bytes, self.timeout).await {
                Ok(tcp_bytes) => {
                    return Message::from_vec(&tcp_bytes).map_err(|e| {
                        DomainError::AllResolversFailed(format!("malformed tcp response from {server}: {e}"))
                    });
                }
                Err(e) => {
                    warn!(%server, error = %e, "tcp retry after truncation failed, keeping truncated udp answer");
                    return Ok(message);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| DomainError::AllResolversFailed("no nameservers configured".to_string())))
    }

    /// Mirrors `queryDomainRecord`: queries `fqdn` for `record_type`,
    /// following CNAMEs, and classifies the terminal answer. NXDOMAIN
    /// collapses to `NoRecord`; any other non-success rcode is an error.
    async fn query_domain_record(&self, host: &str, record_type: RecordType) -> Result<Status, DomainError> {
        let mut target = format!("{host}.");

        for hop in 0..=MAX_CNAME_HOPS {
            let message = self.perform_query(&target, record_type).await?;

            match message.response_code() {
                ResponseCode::NoError => {}
                ResponseCode::NXDomain => return Ok(Status::NoRecord),
                other => {
                    return Err(DomainError::AllResolversFailed(format!(
                        "query for {target} failed with rcode {other:?}"
                    )))
                }
            }

            let mut next_cname = None;
            for record in message.answers() {
                match record.data() {
                    RData::AAAA(_) if record_type == RecordType::AAAA => return Ok(Status::Supported),
                    RData::A(_) if record_type == RecordType::A => return Ok(Status::Unsupported),
                    RData::CNAME(c) => next_cname = Some(c.to_utf8()),
                    _ => {}
                }
            }

            match next_cname {
                Some(c) if hop < MAX_CNAME_HOPS => target = c,
                _ => return Ok(Status::NoRecord),
            }
        }

        warn!(host, "exceeded cname hop limit");
        Ok(Status::NoRecord)
    }

    /// Mirrors `checkInetType`: a boolean probe over a single nameserver
    /// target (an NS or MX host, not the domain itself) that swallows any
    /// query failure as "not found" instead of propagating it.
    async fn has_inet_record(&self, host: &str, record_type: RecordType) -> bool {
        let mut target = format!("{host}.");

        for hop in 0..=MAX_CNAME_HOPS {
            let message = match self.perform_query(&target, record_type).await {
                Ok(m) => m,
                Err(e) => {
                    warn!(host, error = %e, "inet-type probe failed");
                    return false;
                }
            };

            let mut next_cname = None;
            for record in message.answers() {
                match record.data() {
                    RData::AAAA(_) if record_type == RecordType::AAAA => return true,
                    RData::A(_) if record_type == RecordType::A => return true,
                    RData::CNAME(c) => next_cname = Some(c.to_utf8()),
                    _ => {}
                }
            }

            match next_cname {
                Some(c) if hop < MAX_CNAME_HOPS => target = c,
                _ => return false,
            }
        }

        false
    }

    async fn check_domain_status(&self, host: &str) -> Result<Status, DomainError> {
        let status = self.query_domain_record(host, RecordType::AAAA).await?;
        if status != Status::NoRecord {
            return Ok(status);
        }
        self.query_domain_record(host, RecordType::A).await
    }

    async fn get_nameservers(&self, host: &str) -> Result<Vec<String>, DomainError> {
        let message = self.perform_query(&format!("{host}."), RecordType::NS).await?;
        Ok(message
            .answers()
            .iter()
            .filter_map(|r| match r.data() {
                RData::NS(ns) => Some(ns.to_utf8()),
                _ => None,
            })
            .collect())
    }

    async fn get_mx_records(&self, host: &str) -> Result<Vec<String>, DomainError> {
        let message = self.perform_query(&format!("{host}."), RecordType::MX).await?;
        Ok(message
            .answers()
            .iter()
            .filter_map(|r| match r.data() {
                RData::MX(mx) => Some(mx.exchange().to_utf8()),
                _ => None,
            })
            .collect())
    }

    async fn check_nameserver(&self, host: &str) -> Result<Status, DomainError> {
        let nameservers = self.get_nameservers(&registrable_part(host)).await?;
        Ok(self.first_supported(&nameservers).await)
    }

    async fn check_mx(&self, host: &str) -> Result<Status, DomainError> {
        let mx_records = self.get_mx_records(host).await?;
        Ok(self.first_supported(&mx_records).await)
    }

    async fn first_supported(&self, targets: &[String]) -> Status {
        for target in targets {
            if self.has_inet_record(target, RecordType::AAAA).await {
                return Status::Supported;
            }
        }
        for target in targets {
            if self.has_inet_record(target, RecordType::A).await {
                return Status::Unsupported;
            }
        }
        Status::NoRecord
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    #[instrument(skip(self))]
    async fn classify(&self, host: &str) -> Result<ClassifyResult, DomainError> {
        let ascii = to_ascii(host)?;

        let base = self.check_domain_status(&ascii).await?;
        let www = self.check_domain_status(&format!("www.{ascii}")).await?;
        let (ns, mx) = tokio::try_join!(self.check_nameserver(&ascii), self.check_mx(&ascii))?;

        Ok(ClassifyResult { base, www, ns, mx })
    }

    #[instrument(skip(self))]
    async fn validate(&self, host: &str) -> Result<u16, DomainError> {
        let ascii = match to_ascii(host) {
            Ok(a) => a,
            Err(_) => return Ok(RCODE_IDNA_ERROR),
        };

        let message = match self.perform_query(&format!("{ascii}."), RecordType::TXT).await {
            Ok(m) => m,
            Err(_) => return Ok(RCODE_SERVER_FAILURE),
        };

        match message.response_code() {
            ResponseCode::NoError => Ok(RCODE_OK),
            ResponseCode::NXDomain => Ok(RCODE_NAME_ERROR),
            _ => Ok(RCODE_SERVER_FAILURE),
        }
    }

    #[instrument(skip(self))]
    async fn resolve_ip(&self, host: &str) -> Result<Option<IpAddr>, DomainError> {
        let ascii = to_ascii(host)?;

        let message = self.perform_query(&format!("{ascii}."), RecordType::AAAA).await?;
        for record in message.answers() {
            if let RData::AAAA(addr) = record.data() {
                return Ok(Some(IpAddr::V6(addr.0)));
            }
        }

        let message = self.perform_query(&format!("{ascii}."), RecordType::A).await?;
        for record in message.answers() {
            if let RData::A(addr) = record.data() {
                return Ok(Some(IpAddr::V4(addr.0)));
            }
        }

        Ok(None)
    }
}
