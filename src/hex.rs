//! Hex triplet helpers shared by the conversion engine.
//!
//! Feed colors arrive as `RRGGBB` strings without a leading `#`. Parsing is
//! lenient: a missing or malformed byte reads as `0` instead of failing.

/// Parse the `pair`-th two-character byte of a hex string.
///
/// `byte_at("ff8000", 1)` is `0x80`. Returns `0` when the substring is missing,
/// shorter than two characters, or not valid hex.
pub fn byte_at(hex: &str, pair: usize) -> u8 {
    let start = pair * 2;
    hex.get(start..start + 2)
        .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        .unwrap_or(0)
}

/// Read the first three bytes of a hex string as normalized `[0, 1]` channels.
pub fn normalized_rgb(hex: &str) -> (f64, f64, f64) {
    (
        byte_at(hex, 0) as f64 / 255.0,
        byte_at(hex, 1) as f64 / 255.0,
        byte_at(hex, 2) as f64 / 255.0,
    )
}

/// Encode a normalized channel as a two digit lowercase hex byte.
///
/// The scaled value is truncated toward zero. Values outside `[0, 1]` saturate
/// to `00` / `ff`.
pub fn channel_to_hex(value: f64) -> String {
    byte_to_hex((value * 255.0) as u8)
}

/// Format a byte as two lowercase hex digits.
pub fn byte_to_hex(byte: u8) -> String {
    format!("{byte:02x}")
}

/// Encode three normalized channels into an `rrggbb` string.
pub fn encode_rgb(r: f64, g: f64, b: f64) -> String {
    let mut hex = String::with_capacity(6);
    for channel in [r, g, b] {
        hex.push_str(&channel_to_hex(channel));
    }
    hex
}

/// Returns true if `hex` is exactly six hex digits.
pub fn is_triplet(hex: &str) -> bool {
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
