use super::RecordType;

/// Payload of one answer record, as handed over by a DNS exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    /// Alias (CNAME) record pointing at `target`.
    Alias { target: String },
    /// Zone-file rendering of any other record, fields separated by tabs:
    /// `name\tttl\tclass\ttype\trdata`.
    Presentation(String),
}

/// Transport-neutral answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    /// Record type as reported on the wire, `None` when outside the registry.
    pub record_type: Option<RecordType>,
    /// Time to live in seconds
    pub ttl: u32,
    pub data: AnswerData,
}

impl AnswerRecord {
    pub fn alias(target: impl Into<String>, ttl: u32) -> Self {
        Self {
            record_type: Some(RecordType::CNAME),
            ttl,
            data: AnswerData::Alias {
                target: target.into(),
            },
        }
    }

    pub fn presentation(record_type: Option<RecordType>, text: impl Into<String>, ttl: u32) -> Self {
        Self {
            record_type,
            ttl,
            data: AnswerData::Presentation(text.into()),
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.data, AnswerData::Alias { .. })
    }
}
