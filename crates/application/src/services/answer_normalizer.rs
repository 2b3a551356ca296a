use world_dns_domain::{AnswerData, AnswerRecord};

/// Turns answer records into the plain values shown in lookup reports.
pub struct AnswerNormalizer;

impl AnswerNormalizer {
    /// Alias records yield their target. Anything else keeps only the last
    /// tab-separated field of its presentation form (the rdata), or the whole
    /// text when there is no field structure.
    pub fn normalize(record: &AnswerRecord) -> String {
        match &record.data {
            AnswerData::Alias { target } => target.clone(),
            AnswerData::Presentation(text) => match text.rsplit_once('\t') {
                Some((_, value)) => value.to_string(),
                None => text.clone(),
            },
        }
    }

    pub fn normalize_all(records: &[AnswerRecord]) -> Vec<String> {
        records.iter().map(Self::normalize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_dns_domain::RecordType;

    #[test]
    fn test_alias_returns_target() {
        let record = AnswerRecord::alias("www.example.com.cdn.cloudflare.net.", 300);
        assert_eq!(
            AnswerNormalizer::normalize(&record),
            "www.example.com.cdn.cloudflare.net."
        );
    }

    #[test]
    fn test_presentation_keeps_last_field() {
        let a = AnswerRecord::presentation(
            Some(RecordType::A),
            "example.com.\t60\tIN\tA\t93.184.216.34",
            60,
        );
        assert_eq!(AnswerNormalizer::normalize(&a), "93.184.216.34");

        let mx = AnswerRecord::presentation(
            Some(RecordType::MX),
            "example.com.\t300\tIN\tMX\t10 mail.example.com.",
            300,
        );
        assert_eq!(AnswerNormalizer::normalize(&mx), "10 mail.example.com.");
    }

    #[test]
    fn test_presentation_without_tabs_falls_back_to_full_text() {
        let record = AnswerRecord::presentation(None, "opaque rdata", 10);
        assert_eq!(AnswerNormalizer::normalize(&record), "opaque rdata");
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let records = vec![
            AnswerRecord::alias("a.example.net.", 30),
            AnswerRecord::presentation(Some(RecordType::A), "a.example.net.\t30\tIN\tA\t192.0.2.1", 30),
            AnswerRecord::presentation(Some(RecordType::A), "a.example.net.\t30\tIN\tA\t192.0.2.2", 30),
        ];
        assert_eq!(
            AnswerNormalizer::normalize_all(&records),
            vec!["a.example.net.", "192.0.2.1", "192.0.2.2"]
        );
    }
}
