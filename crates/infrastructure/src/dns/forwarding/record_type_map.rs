//! Mapping between `checkip_domain::RecordType` and `hickory_proto::rr::RecordType`

use checkip_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }

    /// `None` for every type this service never asks for.
    pub fn from_hickory(record_type: HickoryRecordType) -> Option<RecordType> {
        match record_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for rt in [RecordType::A, RecordType::AAAA] {
            let hickory = RecordTypeMapper::to_hickory(&rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(rt));
        }
    }

    #[test]
    fn test_unsupported_type() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::MX), None);
    }
}
