use log::debug;
use std::io::Write;
use zeroize::Zeroizing;

use crate::base58;
use crate::constants::*;
use crate::error::{Result, WifError};
use crate::types::*;
use crate::utils::render_qr_code;

/// Decode a WIF string into its version byte, secret and compression flag.
pub fn decode_wif(wif: &str) -> Result<WifKey> {
    let payload = base58::decode_check(wif)?;
    debug!("Decoded WIF payload of {} bytes", payload.len());
    let compressed = match payload.len() {
        COMPRESSED_PAYLOAD_SIZE if payload[COMPRESSED_PAYLOAD_SIZE - 1] == COMPRESSION_MARKER => true,
        UNCOMPRESSED_PAYLOAD_SIZE => false,
        length => return Err(WifError::MalformedPayload { length }),
    };
    let secret = SecretBytes::from_slice(&payload[1..UNCOMPRESSED_PAYLOAD_SIZE]).ok_or(WifError::MalformedPayload { length: payload.len() })?;
    let key = WifKey::new(payload[0], secret, compressed);
    debug!("WIF version {:#04x}, compressed: {}", key.version, key.compressed);
    Ok(key)
}

/// Serialize a key as WIF. Any version byte and any 32-byte secret are accepted.
pub fn encode_wif(key: &WifKey) -> String {
    let mut payload = Zeroizing::new(Vec::with_capacity(COMPRESSED_PAYLOAD_SIZE));
    payload.push(key.version);
    payload.extend_from_slice(key.secret.as_bytes());
    if key.compressed {
        payload.push(COMPRESSION_MARKER);
    }
    debug!("Encoding WIF version {:#04x}, compressed: {}", key.version, key.compressed);
    base58::encode_check(&payload)
}

/// Re-encode `wif` under `target_version`, keeping the secret and compression flag.
pub fn transcode(wif: &str, target_version: u8) -> Result<String> {
    let key = decode_wif(wif)?;
    debug!("Converting version {:#04x} -> {:#04x}", key.version, target_version);
    Ok(encode_wif(&WifKey::new(target_version, key.secret, key.compressed)))
}

/// Build the report printed by the CLI for a conversion.
pub fn convert_report(wif: &str, target_version: u8) -> Result<ConversionReport> {
    let converted = transcode(wif, target_version)?;
    let key = decode_wif(&converted)?;
    Ok(ConversionReport { network: key.network(), version: key.version, compressed: key.compressed, wif: converted })
}

/// Render the converted key the way the CLI prints it: the WIF (or the JSON
/// report) on the first line, then an optional QR code.
pub fn render_conversion(report: &ConversionReport, json: bool, qr: bool) -> Result<String> {
    let mut out = if json { serde_json::to_string(report).map_err(std::io::Error::from)? } else { report.wif.clone() };
    out.push('\n');
    if qr {
        let label = match report.network {
            Some(network) => format!("WIF ({})", network),
            None => format!("WIF (version {:02x})", report.version),
        };
        out.push_str(&format!("{}:\n{}\n", label, render_qr_code(&report.wif)?));
    }
    Ok(out)
}

pub fn run_convert(wif: &str, target_version: u8, json: bool, qr: bool) -> Result<()> {
    let report = convert_report(wif, target_version)?;
    let rendered = Zeroizing::new(render_conversion(&report, json, qr)?);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
