//! Random credentials: device tokens and activation codes

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

const TOKEN_BYTES: usize = 24;
const SCAN_CODE_BYTES: usize = 7;

/// 192-bit device token, lowercase hex
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Short activation code handed to an employee, base64url without padding
pub fn generate_scan_code() -> String {
    let mut bytes = [0u8; SCAN_CODE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
