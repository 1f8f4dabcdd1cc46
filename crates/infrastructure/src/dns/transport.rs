use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tracing::{debug, warn};
use v6crawl_domain::DomainError;

const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Sends one query over UDP and waits for a matching datagram, binding an
/// ephemeral local socket per query (no connection pooling — this crawler
/// is not latency-sensitive enough to warrant one).
pub async fn query_udp(server: SocketAddr, query: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
    let bind_addr: SocketAddr = if server.is_ipv4() {
        "0.0.0.0:0".parse().unwrap()
    } else {
        "[::]:0".parse().unwrap()
    };

    let socket = UdpSocket::bind(bind_addr)
        .await
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to bind UDP socket: {e}")))?;

    tokio::time::timeout(timeout, socket.send_to(query, server))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout sending UDP query to {server}")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to send UDP query to {server}: {e}")))?;

    let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    let (n, from) = tokio::time::timeout(timeout, socket.recv_from(&mut buf))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout waiting for UDP response from {server}")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to receive UDP response from {server}: {e}")))?;

    if from.ip() != server.ip() {
        warn!(expected = %server, received_from = %from, "UDP response from unexpected source");
    }

    buf.truncate(n);
    debug!(%server, bytes = n, "UDP response received");
    Ok(buf)
}

/// Retries a query over TCP with the standard 2-byte length prefix, used
/// when a UDP response comes back with the TC (truncated) bit set.
pub async fn query_tcp(server: SocketAddr, query: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
    let mut stream = tokio::time::timeout(timeout, TcpStream::connect(server))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout connecting to {server} over tcp")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to connect to {server} over tcp: {e}")))?;

    let mut framed = Vec::with_capacity(query.len() + 2);
    framed.extend_from_slice(&(query.len() as u16).to_be_bytes());
    framed.extend_from_slice(query);

    tokio::time::timeout(timeout, stream.write_all(&framed))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout sending tcp query to {server}")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to send tcp query to {server}: {e}")))?;

    let mut len_buf = [0u8; 2];
    tokio::time::timeout(timeout, stream.read_exact(&mut len_buf))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout reading tcp length from {server}")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to read tcp length from {server}: {e}")))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    let mut response = vec![0u8; response_len];
    tokio::time::timeout(timeout, stream.read_exact(&mut response))
        .await
        .map_err(|_| DomainError::AllResolversFailed(format!("timeout reading tcp body from {server}")))?
        .map_err(|e| DomainError::AllResolversFailed(format!("failed to read tcp body from {server}: {e}")))?;

    debug!(%server, bytes = response.len(), "TCP response received");
    Ok(response)
}
