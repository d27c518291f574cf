use sha2::{Digest, Sha256};

use crate::constants::*;

/// SHA-256 applied twice, as used for Base58Check checksums.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// First four bytes of `double_sha256(data)`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let hash = double_sha256(data);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&hash[..CHECKSUM_SIZE]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256_empty() {
        assert_eq!(hex::encode(double_sha256(b"")), "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456");
    }

    #[test]
    fn test_double_sha256_is_deterministic() {
        assert_eq!(double_sha256(b"hello"), double_sha256(b"hello"));
        assert_eq!(hex::encode(double_sha256(b"hello")), "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50");
    }

    #[test]
    fn test_checksum_changes_on_single_bit_flip() {
        // 'o' (0x6f) and 'n' (0x6e) differ in the lowest bit only
        assert_eq!(checksum(b"hello"), [0x95, 0x95, 0xc9, 0xdf]);
        assert_eq!(checksum(b"helln"), [0x33, 0xec, 0xe4, 0x24]);
        assert_ne!(checksum(b"hello"), checksum(b"helln"));
    }
}
