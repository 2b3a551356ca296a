use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;
use world_dns_domain::{AnswerRecord, DomainError};

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer section, in wire order.
    pub answers: Vec<AnswerRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            id = message.id(),
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    /// CNAME records keep only their target; everything else keeps its
    /// tab-separated presentation line (`name ttl class type rdata`).
    fn to_answer(record: &Record) -> AnswerRecord {
        let ttl = record.ttl();
        match record.data() {
            RData::CNAME(canonical) => AnswerRecord::alias(canonical.to_utf8(), ttl),
            rdata => AnswerRecord::presentation(
                RecordTypeMapper::from_hickory(record.record_type()),
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    record.name(),
                    ttl,
                    record.dns_class(),
                    record.record_type(),
                    Self::rdata_text(rdata)
                ),
                ttl,
            ),
        }
    }

    /// Character-string records render as quoted, escaped strings joined by
    /// spaces so string boundaries and embedded tabs survive.
    fn rdata_text(rdata: &RData) -> String {
        match rdata {
            RData::TXT(txt) => Self::quoted_strings(txt.txt_data()),
            other => other.to_string(),
        }
    }

    fn quoted_strings(strings: &[Box<[u8]>]) -> String {
        let mut out = String::new();
        for (i, bytes) in strings.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push('"');
            for &b in bytes.iter() {
                match b {
                    b'"' => out.push_str("\\\""),
                    b'\\' => out.push_str("\\\\"),
                    0x20..=0x7e => out.push(b as char),
                    _ => out.push_str(&format!("\\{:03}", b)),
                }
            }
            out.push('"');
        }
        out
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
