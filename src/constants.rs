pub const BASE58_ZERO: char = '1';

pub const CHECKSUM_SIZE: usize = 4;
pub const SECRET_SIZE: usize = 32;
pub const COMPRESSION_MARKER: u8 = 0x01;

pub const UNCOMPRESSED_PAYLOAD_SIZE: usize = 1 + SECRET_SIZE;
pub const COMPRESSED_PAYLOAD_SIZE: usize = UNCOMPRESSED_PAYLOAD_SIZE + 1;

pub const MAINNET_VERSION: u8 = 0x80;
pub const TESTNET_VERSION: u8 = 0xef;
