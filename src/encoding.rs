/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::string::FromUtf8Error;

use atoi::FromRadix16;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )` gets
/// escaped, the same set as JS `encodeURIComponent`.
const COOKIE_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error)]
pub enum CookieValueDecodeError {
    #[error("truncated percent escape sequence")]
    TruncatedEscape,
    #[error("invalid hex digit in percent escape")]
    InvalidHexDigit,
    #[error("invalid utf-8 encoding: {0}")]
    InvalidUtf8Encoding(#[from] FromUtf8Error),
}

pub fn encode_value(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s, COOKIE_VALUE_ENCODE_SET).to_string()
}

/// Strict percent decoding: every `%` must start a full two-digit hex
/// escape, and the decoded bytes must form valid UTF-8. The lenient
/// decoder in the percent-encoding crate passes malformed escapes through,
/// which would hide exactly the pairs the parser has to drop.
pub fn decode_value(s: &str) -> Result<String, CookieValueDecodeError> {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while let Some(p) = memchr::memchr(b'%', &bytes[offset..]) {
        let p = offset + p;
        out.extend_from_slice(&bytes[offset..p]);
        if p + 3 > bytes.len() {
            return Err(CookieValueDecodeError::TruncatedEscape);
        }
        let (byte, digits) = u8::from_radix_16(&bytes[p + 1..p + 3]);
        if digits != 2 {
            return Err(CookieValueDecodeError::InvalidHexDigit);
        }
        out.push(byte);
        offset = p + 3;
    }
    out.extend_from_slice(&bytes[offset..]);
    Ok(String::from_utf8(out)?)
}
