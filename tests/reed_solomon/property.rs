//! Property-based tests for the GF(8) codec

use proptest::prelude::*;
use rs8::reed_solomon::{pack, unpack, Gf8, Rs8x2};

fn symbol() -> impl Strategy<Value = Gf8> + Clone {
    (0u8..8).prop_map(Gf8::from_bits)
}

proptest! {
    /// Property: unpack(pack(v)) == v
    #[test]
    fn prop_pack_unpack_inverse(values in prop::array::uniform8(symbol())) {
        let bytes = pack(&values);
        prop_assert_eq!(bytes.len(), 3);
        prop_assert_eq!(unpack::<8>(&bytes).unwrap(), values);
    }

    /// Property: pack is injective on four-symbol words as well
    #[test]
    fn prop_pack_unpack_short(values in prop::array::uniform4(symbol())) {
        prop_assert_eq!(unpack::<4>(&pack(&values)).unwrap(), values);
    }

    /// Property: errors of weight ≤ 3 are corrected
    #[test]
    fn prop_corrects_within_radius(
        message in 0u32..64,
        positions in prop::sample::subsequence((0..8usize).collect::<Vec<_>>(), 0..=3),
        magnitudes in prop::collection::vec(1u8..8, 3),
    ) {
        let code = rs8::default_code().unwrap();
        let mut received = code.encode_symbols(message).unwrap();
        for (&position, &magnitude) in positions.iter().zip(magnitudes.iter()) {
            received[position] += Gf8::from_bits(magnitude);
        }
        prop_assert_eq!(code.decode(&pack(&received)).unwrap(), message);
    }

    /// Property: syndrome(c + e) == syndrome(e)
    #[test]
    fn prop_syndrome_linear(
        message in 0u32..64,
        error in prop::array::uniform8(symbol()),
    ) {
        let code = rs8::default_code().unwrap();
        let codeword = code.encode_symbols(message).unwrap();
        let mut received = codeword;
        for (r, &e) in received.iter_mut().zip(error.iter()) {
            *r += e;
        }
        prop_assert_eq!(code.syndrome(&received), code.syndrome(&error));
    }

    /// Property: any well-sized transmission decodes to a message in range
    #[test]
    fn prop_decode_total(bytes in prop::array::uniform3(any::<u8>())) {
        let message = rs8::decode(&bytes).unwrap();
        prop_assert!(message < Rs8x2::MESSAGE_LIMIT);
    }

    /// Property: messages outside the domain are rejected
    #[test]
    fn prop_encode_rejects_out_of_range(message in 64u32..) {
        prop_assert!(rs8::encode(message).is_err());
    }
}
