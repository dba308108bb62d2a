//! Fixed wire schema for pool records.
//!
//! Equivalent protobuf definition:
//!
//! ```text
//! message PoolData {
//!   optional string name = 1;
//!   repeated int64 stage_ids = 2;
//! }
//! ```
//!
//! `stage_ids` is written packed (proto3 default) and accepted in either
//! packed or unpacked form on decode. Fields with other tags are skipped.

/// Binary wire record for a scheduling pool.
///
/// This is the message layout only; conversion to and from
/// [`crate::domain::PoolData`] lives in [`super::PoolRecordCodec`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct PoolDataRecord {
    /// Pool name, field 1.
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,

    /// Stage identifiers widened to 64 bits, field 2.
    #[prost(int64, repeated, tag = "2")]
    pub stage_ids: Vec<i64>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn encodes_packed_stage_ids() {
        let record = PoolDataRecord {
            name: Some("a".to_string()),
            stage_ids: vec![3, 300],
        };
        // 300 = 0xAC 0x02 as a varint.
        assert_eq!(
            record.encode_to_vec(),
            vec![0x0A, 0x01, b'a', 0x12, 0x03, 0x03, 0xAC, 0x02]
        );
    }

    #[test]
    fn empty_name_is_still_written() {
        let record = PoolDataRecord {
            name: Some(String::new()),
            stage_ids: Vec::new(),
        };
        assert_eq!(record.encode_to_vec(), vec![0x0A, 0x00]);
    }

    #[test]
    fn negative_ids_use_ten_byte_varints() {
        let record = PoolDataRecord {
            name: None,
            stage_ids: vec![-1],
        };
        let bytes = record.encode_to_vec();
        // tag + length + 10 varint bytes
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes.get(1), Some(&0x0A));
    }

    #[test]
    fn unpacked_and_packed_decode_the_same() {
        let packed: &[u8] = &[0x12, 0x02, 0x05, 0x07];
        let unpacked: &[u8] = &[0x10, 0x05, 0x10, 0x07];
        let Ok(a) = PoolDataRecord::decode(packed) else {
            panic!("packed decode failed");
        };
        let Ok(b) = PoolDataRecord::decode(unpacked) else {
            panic!("unpacked decode failed");
        };
        assert_eq!(a, b);
        assert_eq!(a.stage_ids, vec![5, 7]);
    }

    #[test]
    fn wrong_wire_type_is_rejected() {
        // Field 2 carried as a fixed32 (wire type 5).
        let bytes: &[u8] = &[0x15, 0x01, 0x00, 0x00, 0x00];
        assert!(PoolDataRecord::decode(bytes).is_err());
    }
}
