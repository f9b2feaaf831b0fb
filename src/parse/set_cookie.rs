/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::str::FromStr;

use crate::{CookieExpires, CookiePriority, ResponseCookie, SameSite};

use super::parse_cookie;

/// Parse a `Set-Cookie` header value.
///
/// The first pair is the cookie name/value, the remaining pairs are
/// attributes matched by lower-cased key; unrecognized keys are ignored
/// and a duplicate recognized key overwrites the earlier one. Malformed
/// attribute data never fails the parse: an unknown `SameSite` or
/// `Priority` value and a non-numeric or zero `Max-Age` leave the field
/// unset, unparseable `Expires` text is kept as [`CookieExpires::Invalid`].
/// Returns `None` for a header with no pairs at all.
pub fn parse_set_cookie(header: &str) -> Option<ResponseCookie> {
    let mut pairs = parse_cookie(header).into_iter();
    let (name, value) = pairs.next()?;
    let mut cookie = ResponseCookie::new(name, value);
    for (key, value) in pairs {
        match key.to_lowercase().as_str() {
            "domain" => cookie.domain = (!value.is_empty()).then_some(value),
            "path" => cookie.path = (!value.is_empty()).then_some(value),
            "expires" => {
                cookie.expires = (!value.is_empty()).then(|| CookieExpires::parse(&value));
            }
            "httponly" => cookie.http_only = !value.is_empty(),
            "max-age" | "maxage" => {
                // zero collapses to unset, same as the empty attributes
                cookie.max_age = value.parse::<i64>().ok().filter(|v| *v != 0);
            }
            "samesite" => cookie.same_site = SameSite::from_str(&value).ok(),
            "secure" => cookie.secure = !value.is_empty(),
            "priority" => cookie.priority = CookiePriority::from_str(&value).ok(),
            _ => {}
        }
    }
    Some(cookie)
}
