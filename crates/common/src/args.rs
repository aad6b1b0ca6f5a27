//! Parsing of `i32` fixture arguments from text.
//!
//! Accepts decimal (`-100`, `2147483647`) and hexadecimal (`0x0f`,
//! `-0x10`). Hex literals up to `0xffffffff` are reinterpreted as
//! two's complement, matching how a WASM `i32.const` is written.

use crate::error::FixtureError;

/// Parse one argument.
pub fn parse_arg(text: &str) -> Result<i32, FixtureError> {
    let invalid = || FixtureError::InvalidArgument(text.to_string());
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        let bits = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        let value = bits as i32;
        return Ok(if negative { value.wrapping_neg() } else { value });
    }

    trimmed.parse::<i32>().map_err(|_| invalid())
}

/// Parse a list of arguments, stopping at the first invalid one.
pub fn parse_args<S: AsRef<str>>(texts: &[S]) -> Result<Vec<i32>, FixtureError> {
    texts.iter().map(|t| parse_arg(t.as_ref())).collect()
}
