#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// What the mock server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockReply {
    /// One A record, 93.184.216.34, TTL 60.
    Address,
    /// CNAME to `edge.example.net.` (TTL 300) followed by an A record.
    Alias,
    /// One TXT record holding `v=spf1 -all` and `second\tpart`.
    Text,
    /// NOERROR with an empty answer section.
    Empty,
    /// UDP reply has TC set and no answers; the TCP side answers in full.
    Truncated,
    /// Reply id does not match the query.
    WrongId,
    /// Never replies.
    Silent,
}

/// DNS server mock for exchange tests.
///
/// Listens on UDP and TCP on the same loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts on an OS-assigned port.
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let listener = TcpListener::bind(local_addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], reply, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            tokio::spawn(Self::serve_tcp(stream, reply));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn serve_tcp(mut stream: tokio::net::TcpStream, reply: MockReply) {
        let mut len_buf = [0u8; 2];
        if stream.read_exact(&mut len_buf).await.is_err() {
            return;
        }
        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        if stream.read_exact(&mut query).await.is_err() {
            return;
        }

        if let Some(response) = Self::build_response(&query, reply, true) {
            let mut framed = (response.len() as u16).to_be_bytes().to_vec();
            framed.extend_from_slice(&response);
            let _ = stream.write_all(&framed).await;
        }
    }

    fn build_response(query: &[u8], reply: MockReply, over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        let name = question.name().clone();

        let id = match reply {
            MockReply::WrongId => request.id().wrapping_add(1),
            MockReply::Silent => return None,
            _ => request.id(),
        };

        let mut response = Message::new(id, MessageType::Response, OpCode::Query);
        response.set_recursion_desired(true);
        response.set_recursion_available(true);
        response.add_query(question);

        match reply {
            MockReply::Address | MockReply::WrongId => {
                response.add_answer(Record::from_rdata(
                    name,
                    60,
                    RData::A(A::new(93, 184, 216, 34)),
                ));
            }
            MockReply::Alias => {
                let target = Name::from_str("edge.example.net.").ok()?;
                response.add_answer(Record::from_rdata(
                    name,
                    300,
                    RData::CNAME(CNAME(target.clone())),
                ));
                response.add_answer(Record::from_rdata(
                    target,
                    30,
                    RData::A(A::new(198, 51, 100, 7)),
                ));
            }
            MockReply::Text => {
                response.add_answer(Record::from_rdata(
                    name,
                    120,
                    RData::TXT(TXT::new(vec![
                        "v=spf1 -all".to_string(),
                        "second\tpart".to_string(),
                    ])),
                ));
            }
            MockReply::Truncated if !over_tcp => {
                response.set_truncated(true);
            }
            MockReply::Truncated => {
                for last_octet in 1..=3 {
                    response.add_answer(Record::from_rdata(
                        name.clone(),
                        45,
                        RData::A(A::new(203, 0, 113, last_octet)),
                    ));
                }
            }
            MockReply::Empty | MockReply::Silent => {}
        }

        response.to_bytes().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
