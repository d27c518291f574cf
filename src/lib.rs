//! # wif-convert
//!
//! Convert a WIF (Wallet Import Format) private key from one network's version
//! byte to another, e.g. mainnet to testnet/regtest.
//!
//! The 32-byte secret is chain-agnostic; only the WIF envelope differs
//! (version byte, optional compression marker and checksum). The secret and the
//! compression flag are carried over unchanged, only the version byte is
//! replaced.
//!
//! ## Usage
//!
//! ```bash
//! # Using cargo
//! cargo run -- <WIF> <VERSION> [options]
//!
//! # Using the compiled binary
//! ./target/release/wif-convert <WIF> <VERSION> [options]
//! ```
//!
//! ### Mainnet to testnet/regtest
//!
//! ```bash
//! cargo run -- KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn ef
//! ```
//!
//! ### Testnet to mainnet
//!
//! ```bash
//! cargo run -- cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA 80
//! ```
//!
//! **Arguments:**
//! - `<WIF>` (Required): Base58Check-encoded private key
//! - `<VERSION>` (Required): Target version byte as two hex digits (`80`, `ef`, `0xef`)
//!
//! **Flags:**
//! - `--json` (Optional): Print `{"wif", "version", "network", "compressed"}` as JSON
//! - `--qr` (Optional): Display the converted key as a QR code
//! - `-v, --verbose` (Optional): Debug logging (also controllable through `RUST_LOG`)
//!
//! With the wrong number of arguments, or with `--help`, the usage text is
//! printed to stdout and the process exits with status 1. Any decoding failure (invalid character,
//! bad checksum, malformed payload) exits with status 1 and a message on stderr.
//!
//! ## Version bytes
//!
//! | Byte | Network | Compressed prefix | Uncompressed prefix |
//! |------|---------|-------------------|---------------------|
//! | `80` | mainnet | `K` / `L`         | `5`                 |
//! | `ef` | testnet, regtest, signet | `c` | `9`               |
//!
//! Any other byte is accepted as well; nothing validates the version or the
//! secret itself.
//!
//! ## Library
//!
//! ```rust
//! use wif_convert::{decode_wif, transcode};
//!
//! let testnet = transcode("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn", 0xef).unwrap();
//! assert_eq!(testnet, "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN87JcbXMTcA");
//!
//! let key = decode_wif(&testnet).unwrap();
//! assert_eq!(key.version, 0xef);
//! assert!(key.compressed);
//! ```

pub mod base58;
pub mod commands;
pub mod constants;
pub mod convert;
pub mod crypto;
pub mod error;
pub mod types;
pub mod utils;

pub use convert::{decode_wif, encode_wif, transcode};
pub use crypto::double_sha256;
pub use error::{Result, WifError};
pub use types::{ConversionReport, Network, SecretBytes, WifKey};
