/*
 * SPDX-License-Identifier: Apache-2.0
 */

//! Codec for HTTP cookie header values.
//!
//! [`ResponseCookie::build_header_value`] builds the `Set-Cookie` wire
//! string, [`parse_cookie`] splits a `Cookie` or `Set-Cookie` header value
//! into its raw ordered pairs, and [`parse_set_cookie`] turns a
//! `Set-Cookie` header value into a typed [`ResponseCookie`].
//!
//! Parsing is best effort: a malformed percent escape drops that one pair,
//! an unrecognized attribute value drops that one field, and an empty
//! header yields no cookie. No input makes these operations fail.

mod encoding;
pub use encoding::{CookieValueDecodeError, decode_value, encode_value};

mod attr;
pub use attr::{CookiePriority, SameSite};

mod expires;
pub use expires::{CookieExpires, IMF_FIXDATE};

mod cookie;
pub use cookie::{RequestCookie, ResponseCookie};

mod parse;
pub use parse::{parse_cookie, parse_set_cookie};
