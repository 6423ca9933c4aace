//! Property-based tests for the PWDG codec.
//!
//! Run with: cargo test -p wedge-io --test proptest_codec

use proptest::prelude::*;
use wedge_io::{decode, encode_with_timestamp, HEADER_SIZE, RECORD_SIZE};
use wedge_types::{Point3, Vector3, Wedge};

/// Any finite f32, including negative zero and subnormals.
fn arb_finite() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO
}

fn arb_wedge() -> impl Strategy<Value = Wedge> {
    prop::array::uniform9(arb_finite()).prop_map(|v| {
        Wedge::new(
            Point3::new(v[0], v[1], v[2]),
            Vector3::new(v[3], v[4], v[5]),
            Vector3::new(v[6], v[7], v[8]),
        )
    })
}

proptest! {
    #[test]
    fn roundtrip_is_bit_exact(
        wedges in prop::collection::vec(arb_wedge(), 0..64),
        timestamp in any::<i64>(),
    ) {
        let bytes = encode_with_timestamp(&wedges, timestamp);
        prop_assert_eq!(bytes.len(), HEADER_SIZE + RECORD_SIZE * wedges.len());

        let decoded = decode(&bytes).unwrap();
        prop_assert_eq!(decoded.len(), wedges.len());
        for (a, b) in wedges.iter().zip(&decoded) {
            for (x, y) in [
                (a.pos.x, b.pos.x), (a.pos.y, b.pos.y), (a.pos.z, b.pos.z),
                (a.rot.x, b.rot.x), (a.rot.y, b.rot.y), (a.rot.z, b.rot.z),
                (a.scale.x, b.scale.x), (a.scale.y, b.scale.y), (a.scale.z, b.scale.z),
            ] {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn any_signature_corruption_is_detected(
        wedges in prop::collection::vec(arb_wedge(), 0..8),
        index in 0usize..4,
        replacement in any::<u8>(),
    ) {
        let mut bytes = encode_with_timestamp(&wedges, 0);
        prop_assume!(bytes[index] != replacement);
        bytes[index] = replacement;
        prop_assert!(decode(&bytes).is_err());
    }

    #[test]
    fn truncation_anywhere_in_the_records_is_detected(
        wedges in prop::collection::vec(arb_wedge(), 1..8),
        cut in 1usize..RECORD_SIZE,
    ) {
        let bytes = encode_with_timestamp(&wedges, 0);
        let truncated = &bytes[..bytes.len() - cut];
        prop_assert!(decode(truncated).is_err());
    }
}
