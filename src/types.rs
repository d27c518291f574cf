use serde::Serialize;
use std::fmt;
use zeroize::Zeroizing;

use crate::constants::*;

/// A 32-byte private key secret, wiped from memory on drop.
///
/// Any 32 bytes are accepted; nothing here checks that the value is a valid
/// curve scalar.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretBytes {
    bytes: Zeroizing<[u8; SECRET_SIZE]>,
}

impl SecretBytes {
    pub fn new(bytes: [u8; SECRET_SIZE]) -> Self {
        Self { bytes: Zeroizing::new(bytes) }
    }

    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; SECRET_SIZE] = slice.try_into().ok()?;
        Some(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBytes(<redacted>)")
    }
}

/// Decoded contents of a WIF string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifKey {
    pub version: u8,
    pub secret: SecretBytes,
    pub compressed: bool,
}

impl WifKey {
    pub fn new(version: u8, secret: SecretBytes, compressed: bool) -> Self {
        Self { version, secret, compressed }
    }

    pub fn network(&self) -> Option<Network> {
        Network::from_version(self.version)
    }
}

/// Networks with a well-known WIF version byte.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_VERSION,
            Network::Testnet => TESTNET_VERSION,
        }
    }

    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            MAINNET_VERSION => Some(Network::Mainnet),
            TESTNET_VERSION => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Result of a conversion, as printed by `--json`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    pub wif: String,
    #[serde(with = "hex_byte")]
    pub version: u8,
    pub network: Option<Network>,
    pub compressed: bool,
}

mod hex_byte {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode([*value]))
    }
}
