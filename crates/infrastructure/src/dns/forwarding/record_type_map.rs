use hickory_proto::rr::RecordType as HickoryRecordType;
use world_dns_domain::RecordType;

/// Converts between the registry record types and hickory's.
///
/// Both sides are keyed by the IANA type code, so types hickory has no
/// named variant for travel as `HickoryRecordType::Unknown(code)`.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Returns `None` for codes outside the registry.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types_map_to_named_variants() {
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::A), HickoryRecordType::A);
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::AAAA), HickoryRecordType::AAAA);
        assert_eq!(
            RecordTypeMapper::to_hickory(RecordType::CNAME),
            HickoryRecordType::CNAME
        );
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::MX), HickoryRecordType::MX);
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::HTTPS), HickoryRecordType::HTTPS);
    }

    #[test]
    fn test_every_registry_type_survives_the_trip() {
        for rt in RecordType::ALL {
            let hickory = RecordTypeMapper::to_hickory(*rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(*rt), "{}", rt);
        }
    }

    #[test]
    fn test_unregistered_code_is_none() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::Unknown(65000)),
            None
        );
    }
}
