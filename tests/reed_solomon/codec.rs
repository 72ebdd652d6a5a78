//! Encoding, packing and syndrome tests

use rs8::reed_solomon::{
    pack, packed_len, unpack, CodecError, Gf8, ReedSolomon, Rs4x2, Rs8x2,
};

fn g(v: u8) -> Gf8 {
    Gf8::new(v).unwrap()
}

#[test]
fn test_encode_33_scenario() {
    let code = Rs8x2::new().unwrap();

    assert_eq!(Rs8x2::message_symbols(33).unwrap(), [g(4), g(1)]);
    let codeword = code.encode_symbols(33).unwrap();
    assert_eq!(codeword.map(u8::from), [4, 5, 6, 7, 0, 1, 2, 3]);

    let transmission = code.encode(33).unwrap();
    assert_eq!(transmission, vec![0x97, 0x70, 0x53]);
    assert_eq!(code.decode(&transmission).unwrap(), 33);
}

#[test]
fn test_round_trip_every_message() {
    let code = Rs8x2::new().unwrap();
    for message in 0..Rs8x2::MESSAGE_LIMIT {
        let transmission = code.encode(message).unwrap();
        assert_eq!(transmission.len(), Rs8x2::TRANSMISSION_LEN);
        assert_eq!(code.decode(&transmission).unwrap(), message);
    }
}

#[test]
fn test_round_trip_short_code() {
    let code = Rs4x2::new().unwrap();
    for message in 0..Rs4x2::MESSAGE_LIMIT {
        let transmission = code.encode(message).unwrap();
        assert_eq!(transmission.len(), 2);
        assert_eq!(code.decode(&transmission).unwrap(), message);
    }
    assert_eq!(code.encode(33).unwrap(), vec![0x97, 0x70]);
    assert_eq!(code.encode(63).unwrap(), vec![0xE2, 0x30]);
}

#[test]
fn test_boundary_messages() {
    let code = Rs8x2::new().unwrap();

    // zero message maps to the zero codeword
    assert_eq!(code.encode_symbols(0).unwrap(), [Gf8::ZERO; 8]);
    assert_eq!(code.encode(0).unwrap(), vec![0, 0, 0]);

    // highest message uses the top slice
    assert_eq!(Rs8x2::message_symbols(63).unwrap(), [g(7), g(7)]);
    assert_eq!(code.encode(63).unwrap(), vec![0xE2, 0x33, 0x95]);

    // message 1 is row one of the generator: every field element in order
    assert_eq!(code.encode(1).unwrap(), vec![0x05, 0x39, 0x77]);
}

#[test]
fn test_message_out_of_range() {
    let code = Rs8x2::new().unwrap();
    assert_eq!(
        code.encode(64),
        Err(CodecError::MessageOutOfRange {
            message: 64,
            limit: 64
        })
    );
    assert!(code.encode(u32::MAX).is_err());
}

#[test]
fn test_malformed_transmission() {
    let code = Rs8x2::new().unwrap();
    for bad in [&[][..], &[0x97][..], &[0x97, 0x70][..], &[0x97, 0x70, 0x53, 0x00][..]] {
        assert_eq!(
            code.decode(bad),
            Err(CodecError::MalformedTransmission {
                expected: 3,
                actual: bad.len()
            })
        );
    }

    let short = Rs4x2::new().unwrap();
    assert!(short.decode(&[0x97, 0x70, 0x53]).is_err());
}

#[test]
fn test_pack_unpack_every_symbol_at_every_position() {
    for position in 0..8 {
        for value in Gf8::elements() {
            let mut symbols = [Gf8::ZERO; 8];
            symbols[position] = value;
            let bytes = pack(&symbols);
            assert_eq!(bytes.len(), packed_len(8));
            assert_eq!(unpack::<8>(&bytes).unwrap(), symbols);
        }
    }
}

#[test]
fn test_every_codeword_has_zero_syndrome() {
    let code = Rs8x2::new().unwrap();
    for message in 0..Rs8x2::MESSAGE_LIMIT {
        let codeword = code.encode_symbols(message).unwrap();
        assert!(code.is_codeword(&codeword), "message {}", message);
    }
}

#[test]
fn test_syndrome_depends_only_on_error() {
    let code = Rs8x2::new().unwrap();
    let error = [g(0), g(3), g(0), g(0), g(6), g(0), g(0), g(1)];
    let expected = code.syndrome(&error);
    assert!(expected.iter().any(|s| !s.is_zero()));

    for message in 0..Rs8x2::MESSAGE_LIMIT {
        let codeword = code.encode_symbols(message).unwrap();
        let mut received = codeword;
        for (r, &e) in received.iter_mut().zip(error.iter()) {
            *r += e;
        }
        assert_eq!(code.syndrome(&received), expected);
    }
}

#[test]
fn test_codewords_are_at_least_distance_apart() {
    let code = Rs8x2::new().unwrap();
    let words: Vec<[Gf8; 8]> = (0..Rs8x2::MESSAGE_LIMIT)
        .map(|m| code.encode_symbols(m).unwrap())
        .collect();
    let mut minimum = usize::MAX;
    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            minimum = minimum.min(rs8::reed_solomon::hamming_distance(a, b));
        }
    }
    assert_eq!(minimum, Rs8x2::DISTANCE);
}

#[test]
fn test_syndrome_table_sizes() {
    // 8·7 + C(8,2)·7² + C(8,3)·7³
    let code = Rs8x2::new().unwrap();
    assert_eq!(code.syndrome_table().len(), 56 + 1372 + 19208);
    assert_eq!(code.syndrome_table().max_weight(), 3);

    let short = ReedSolomon::<4, 2, 2>::new().unwrap();
    assert_eq!(short.syndrome_table().len(), 28);
}
