use assert_matches::assert_matches;
use test_case::test_case;
use wif_convert::base58;
use wif_convert::constants::*;
use wif_convert::*;

/// Deterministic byte stream for sample payloads.
fn sample_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn test_base58_roundtrip() {
    for len in 0..64 {
        for seed in 0..4u64 {
            let data = sample_bytes(seed + len as u64 * 31, len);
            assert_eq!(*base58::decode(&base58::encode(&data)).unwrap(), data);
            // same bytes behind a run of zeros
            let mut padded = vec![0u8; seed as usize];
            padded.extend_from_slice(&data);
            assert_eq!(*base58::decode(&base58::encode(&padded)).unwrap(), padded);
        }
    }
}

#[test_case(0; "no leading zeros")]
#[test_case(1; "one leading zero")]
#[test_case(2; "two leading zeros")]
#[test_case(3; "three leading zeros")]
#[test_case(4; "four leading zeros")]
#[test_case(5; "five leading zeros")]
fn test_leading_zero_preservation(zeros: usize) {
    let mut data = vec![0u8; zeros];
    data.extend_from_slice(&[0x01, 0x02, 0x03]);
    let text = base58::encode(&data);
    assert_eq!(text.chars().take_while(|&c| c == BASE58_ZERO).count(), zeros);
    assert_eq!(&text[zeros..], "Ldp");
    assert_eq!(*base58::decode(&text).unwrap(), data);
}

#[test]
fn test_transcode_preserves_secret_and_compression() {
    for seed in 0..16u64 {
        let secret = SecretBytes::from_slice(&sample_bytes(seed, SECRET_SIZE)).unwrap();
        for compressed in [false, true] {
            let source_version = sample_bytes(seed + 100, 1)[0];
            let wif = encode_wif(&WifKey::new(source_version, secret.clone(), compressed));
            for target in [0x00, 0x80, 0xef, 0xff] {
                let key = decode_wif(&transcode(&wif, target).unwrap()).unwrap();
                assert_eq!(key.version, target);
                assert_eq!(key.compressed, compressed);
                assert_eq!(key.secret, secret);
            }
        }
    }
}

#[test]
fn test_single_byte_flip_fails_checksum() {
    for wif in ["KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617", "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"] {
        let raw = base58::decode(wif).unwrap();
        for index in 0..raw.len() {
            let mut tampered = raw.clone();
            tampered[index] ^= 0x01;
            let text = base58::encode(&tampered);
            assert_matches!(decode_wif(&text), Err(WifError::InvalidChecksum { .. }), "flipped byte {} of {}", index, wif);
        }
    }
}

#[test_case(32; "one byte short")]
#[test_case(35; "one byte long")]
#[test_case(1; "version only")]
#[test_case(66; "double length")]
fn test_malformed_length(length: usize) {
    let mut payload = vec![0x80];
    payload.resize(length, 0x01);
    let wif = base58::encode_check(&payload);
    assert_matches!(decode_wif(&wif), Err(WifError::MalformedPayload { length: l }) if l == length);
}

#[test]
fn test_short_input_fails_checksum() {
    assert_matches!(decode_wif(""), Err(WifError::InvalidChecksum { .. }));
    assert_matches!(decode_wif("2"), Err(WifError::InvalidChecksum { .. }));
}

#[test]
fn test_checksum_is_first_four_bytes_of_double_hash() {
    let payload = b"wif";
    let raw = base58::decode(&base58::encode_check(payload)).unwrap();
    assert_eq!(&raw[..payload.len()], payload);
    assert_eq!(raw[payload.len()..], double_sha256(payload)[..4]);
}
