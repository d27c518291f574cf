use log::LevelFilter;
use qrcode::{QrCode, render::unicode};

use crate::error::{Result, WifError};

/// Parse the target version argument: two hex digits, optionally `0x` prefixed.
pub fn parse_version(arg: &str) -> Result<u8> {
    let digits = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")).unwrap_or(arg);
    let mut version = [0u8; 1];
    hex::decode_to_slice(digits, &mut version).map_err(|_| WifError::InvalidHexVersion(arg.to_string()))?;
    Ok(version[0])
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = env_logger::Builder::new().filter_level(default_level).parse_default_env().format_timestamp(None).try_init();
}

/// Render `data` as a terminal QR code, two modules per character row.
pub fn render_qr_code(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code.render::<unicode::Dense1x2>().dark_color(unicode::Dense1x2::Light).light_color(unicode::Dense1x2::Dark).quiet_zone(true).build())
}
