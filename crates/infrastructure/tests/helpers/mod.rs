#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::{oneshot, Mutex};

/// One canned answer this server hands back for a given `(name, record_type)`
/// query.
#[derive(Clone)]
pub enum Answer {
    Aaaa(Ipv6Addr),
    A(Ipv4Addr),
    Cname(String),
    Ns(String),
    Mx(String),
    NxDomain,
}

/// A local UDP DNS server answering from a programmable table instead of
/// dialing the real network, speaking real `hickory_proto` messages so it
/// exercises this crate's resolver end to end.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(table: HashMap<(String, RecordType), Vec<Answer>>) -> (Self, SocketAddr) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind mock dns socket");
        let addr = socket.local_addr().expect("mock dns local addr");
        let table = Arc::new(Mutex::new(table));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_bytes(&buf[..len]) else { continue };
                        let table = table.lock().await;
                        let response = build_response(&query, &table);
                        let mut out = Vec::with_capacity(256);
                        let mut encoder = BinEncoder::new(&mut out);
                        if response.emit(&mut encoder).is_ok() {
                            let _ = socket.send_to(&out, peer).await;
                        }
                    }
                }
            }
        });

        (Self { addr, shutdown_tx: Some(shutdown_tx) }, addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(query: &Message, table: &HashMap<(String, RecordType), Vec<Answer>>) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);

    let Some(q) = query.queries().first() else {
        response.set_response_code(ResponseCode::FormErr);
        return response;
    };
    response.add_query(q.clone());

    let key = (q.name().to_utf8().trim_end_matches('.').to_lowercase(), q.query_type());
    let Some(answers) = table.get(&key) else {
        response.set_response_code(ResponseCode::NXDomain);
        return response;
    };

    if answers.iter().any(|a| matches!(a, Answer::NxDomain)) {
        response.set_response_code(ResponseCode::NXDomain);
        return response;
    }

    let name = q.name().clone();
    for answer in answers {
        let record = match answer {
            Answer::Aaaa(ip) => Record::from_rdata(name.clone(), 60, RData::AAAA(AAAA(*ip))),
            Answer::A(ip) => Record::from_rdata(name.clone(), 60, RData::A(A(*ip))),
            Answer::Cname(target) => {
                let target = Name::from_str(&format!("{target}.")).expect("valid cname target");
                Record::from_rdata(name.clone(), 60, RData::CNAME(CNAME(target)))
            }
            Answer::Ns(target) => {
                let target = Name::from_str(&format!("{target}.")).expect("valid ns target");
                Record::from_rdata(name.clone(), 60, RData::NS(NS(target)))
            }
            Answer::Mx(target) => {
                let exchange = Name::from_str(&format!("{target}.")).expect("valid mx target");
                Record::from_rdata(name.clone(), 60, RData::MX(MX::new(10, exchange)))
            }
            Answer::NxDomain => unreachable!("filtered above"),
        };
        response.add_answer(record);
    }

    response.set_response_code(ResponseCode::NoError);
    response
}

/// One request this server recorded: method, request-target, and
/// `Authorization` header value if present.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

/// A local HTTP server that accepts connections in a loop, records each
/// request, and answers every one with a fixed status code — enough to
/// exercise `HttpHeartbeat`/`WebhookNotifier` without dialing the real
/// network.
pub struct MockHttpServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    pub async fn start(status_code: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock http listener");
        let addr = listener.local_addr().expect("mock http local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let requests_for_task = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((socket, _)) = accepted else { continue };
                        if let Some(request) = read_request(socket, status_code).await {
                            requests_for_task.lock().await.push(request);
                        }
                    }
                }
            }
        });

        Self { addr, requests, shutdown_tx: Some(shutdown_tx) }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn read_request(socket: tokio::net::TcpStream, status_code: u16) -> Option<CapturedRequest> {
    let mut reader = BufReader::new(socket);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await.ok()? == 0 {
        return None;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).await.ok()? == 0 || line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Authorization:").or_else(|| line.strip_prefix("authorization:")) {
            authorization = Some(value.trim().to_string());
        }
    }

    let reason = if (200..300).contains(&status_code) { "OK" } else { "Error" };
    let response = format!("HTTP/1.1 {status_code} {reason}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
    let mut socket = reader.into_inner();
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;

    Some(CapturedRequest { method, path, authorization })
}
