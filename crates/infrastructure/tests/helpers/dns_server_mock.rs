#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const TYPE_A: u16 = 1;
const TYPE_PTR: u16 = 12;
const TYPE_AAAA: u16 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockBehavior {
    /// Answer from the zone, NXDOMAIN for unknown names
    Answer,
    /// Reply SERVFAIL to everything
    ServFail,
    /// Swallow queries without replying
    Silent,
    /// Reply with a transaction ID that never matches
    WrongId,
}

#[derive(Clone, Debug, Default)]
pub struct MockZone {
    a: HashMap<String, Vec<Ipv4Addr>>,
    aaaa: HashMap<String, Vec<Ipv6Addr>>,
    ptr: HashMap<String, String>,
}

impl MockZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(mut self, name: &str, addr: Ipv4Addr) -> Self {
        self.a.entry(name.to_ascii_lowercase()).or_default().push(addr);
        self
    }

    pub fn with_aaaa(mut self, name: &str, addr: Ipv6Addr) -> Self {
        self.aaaa
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(addr);
        self
    }

    pub fn with_ptr(mut self, reverse_name: &str, target: &str) -> Self {
        self.ptr
            .insert(reverse_name.to_ascii_lowercase(), target.to_string());
        self
    }

    fn knows(&self, name: &str) -> bool {
        self.a.contains_key(name) || self.aaaa.contains_key(name) || self.ptr.contains_key(name)
    }
}

/// Blocking UDP DNS server on 127.0.0.1 with an ephemeral port.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(zone: MockZone) -> std::io::Result<Self> {
        Self::start_with(zone, MockBehavior::Answer)
    }

    pub fn start_with(zone: MockZone, behavior: MockBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0")?;
        socket.set_read_timeout(Some(Duration::from_millis(50)))?;
        let addr = socket.local_addr()?;

        let queries = Arc::new(AtomicUsize::new(0));
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_queries = Arc::clone(&queries);
        let thread_shutdown = Arc::clone(&shutdown);

        let handle = std::thread::spawn(move || {
            let mut buf = [0u8; 512];
            while !thread_shutdown.load(Ordering::Relaxed) {
                let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                    continue;
                };
                thread_queries.fetch_add(1, Ordering::Relaxed);

                if behavior == MockBehavior::Silent {
                    continue;
                }

                if let Some(response) = build_mock_response(&buf[..len], &zone, behavior) {
                    let _ = socket.send_to(&response, peer);
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Returns the lowercased query name and the offset just past QNAME.
fn read_qname(query: &[u8]) -> Option<(String, usize)> {
    let mut pos = 12;
    let mut labels = Vec::new();

    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
        pos += len;
    }

    Some((labels.join("."), pos))
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 2);
    for label in name.trim_end_matches('.').split('.') {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn push_answer(response: &mut Vec<u8>, record_type: u16, rdata: &[u8]) {
    response.extend_from_slice(&[0xc0, 0x0c]);
    response.extend_from_slice(&record_type.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
    response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    response.extend_from_slice(rdata);
}

pub fn build_mock_response(
    query: &[u8],
    zone: &MockZone,
    behavior: MockBehavior,
) -> Option<Vec<u8>> {
    let (name, qname_end) = read_qname(query)?;
    let question_end = qname_end + 4;
    let question = query.get(12..question_end)?;
    let qtype = u16::from_be_bytes([query[qname_end], query[qname_end + 1]]);

    let mut answers = Vec::new();
    let rcode = match behavior {
        MockBehavior::ServFail => 0x02,
        _ if !zone.knows(&name) => 0x03,
        _ => {
            match qtype {
                TYPE_A => {
                    for addr in zone.a.get(&name).into_iter().flatten() {
                        answers.push((TYPE_A, addr.octets().to_vec()));
                    }
                }
                TYPE_AAAA => {
                    for addr in zone.aaaa.get(&name).into_iter().flatten() {
                        answers.push((TYPE_AAAA, addr.octets().to_vec()));
                    }
                }
                TYPE_PTR => {
                    if let Some(target) = zone.ptr.get(&name) {
                        answers.push((TYPE_PTR, encode_name(target)));
                    }
                }
                _ => {}
            }
            0x00
        }
    };

    let mut response = Vec::with_capacity(512);

    if behavior == MockBehavior::WrongId {
        let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
        response.extend_from_slice(&id.to_be_bytes());
    } else {
        response.extend_from_slice(&query[0..2]);
    }

    response.push(0x81);
    response.push(0x80 | rcode);

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(question);

    for (record_type, rdata) in &answers {
        push_answer(&mut response, *record_type, rdata);
    }

    Some(response)
}
