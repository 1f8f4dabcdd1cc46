use std::str::FromStr;

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use v6crawl_domain::DomainError;

/// Builds a single-question recursive query in wire format, the way
/// `MessageBuilder` does for the forwarding path this crate is modeled on.
pub fn build_query(fqdn: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
    let name = Name::from_str(fqdn)
        .map_err(|e| DomainError::InvalidDomainName(format!("invalid name '{fqdn}': {e}")))?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(rand::random::<u16>(), MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(128);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDomainName(format!("failed to encode query for '{fqdn}': {e}")))?;

    Ok(buf)
}
