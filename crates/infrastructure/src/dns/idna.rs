use v6crawl_domain::DomainError;

/// Converts a (possibly Unicode) domain to its ASCII/Punycode form, the way
/// every lookup in this crate expects it on the wire.
pub fn to_ascii(domain: &str) -> Result<String, DomainError> {
    idna::domain_to_ascii(domain)
        .map_err(|e| DomainError::InvalidDomainName(format!("IDNA conversion failed for '{domain}': {e:?}")))
}
