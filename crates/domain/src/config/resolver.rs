use serde::{Deserialize, Serialize};

/// The original hardcoded dual-stack Cloudflare pair, kept as the fallback
/// when `NAMESERVER` is unset so a fresh checkout has a sane default.
fn default_nameservers() -> Vec<String> {
    vec![
        "[2606:4700:4700::1111]:53".to_string(),
        "[2606:4700:4700::1001]:53".to_string(),
        "1.1.1.1:53".to_string(),
        "1.0.0.1:53".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// `NAMESERVER` — ordered resolver list, `resolv.conf` `nameserver <addr>`
    /// syntax. Attempted in order with failover on transport/timeout error.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    /// Per-exchange read timeout (20s).
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

fn default_query_timeout_secs() -> u64 {
    20
}

/// Parses `resolv.conf`-style `nameserver <addr>` lines (one per line,
/// blank/comment lines ignored) into an ordered list of `host:port` strings,
/// appending the default DNS port `53` (bracketed for IPv6 literals) when
/// the line carries no port of its own.
pub fn parse_nameserver_env(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let addr = line.strip_prefix("nameserver").unwrap_or(line).trim();
            if addr.is_empty() {
                return None;
            }
            Some(with_default_port(addr))
        })
        .collect()
}

fn with_default_port(addr: &str) -> String {
    if addr.starts_with('[') {
        if addr.ends_with(']') {
            format!("{addr}:53")
        } else {
            addr.to_string()
        }
    } else if addr.contains(':') {
        if addr.matches(':').count() > 1 {
            format!("[{addr}]:53")
        } else {
            addr.to_string()
        }
    } else {
        format!("{addr}:53")
    }
}
