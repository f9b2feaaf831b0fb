/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use chrono::format::Numeric::*;
use chrono::format::{Fixed, Item, Pad};
use chrono::{DateTime, Utc};

/// RFC 7231 IMF-fixdate, e.g. `Wed, 21 Oct 2015 07:28:00 GMT`.
pub const IMF_FIXDATE: &[Item<'static>] = &[
    Item::Fixed(Fixed::ShortWeekdayName),
    Item::Literal(", "),
    Item::Numeric(Day, Pad::Zero),
    Item::Literal(" "),
    Item::Fixed(Fixed::ShortMonthName),
    Item::Literal(" "),
    Item::Numeric(Year, Pad::Zero),
    Item::Literal(" "),
    Item::Numeric(Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Second, Pad::Zero),
    Item::Literal(" GMT"),
];

/// Value of the `Expires` cookie attribute.
///
/// Date text that cannot be parsed is carried through as
/// [`CookieExpires::Invalid`] instead of failing the cookie, so the caller
/// can still see that an expiry was set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CookieExpires {
    At(DateTime<Utc>),
    Invalid(String),
}

impl CookieExpires {
    /// Build from a unix epoch value in milliseconds. Epoch 0 is a valid
    /// expiry, not an unset one.
    pub fn from_unix_millis(millis: i64) -> Self {
        match DateTime::from_timestamp_millis(millis) {
            Some(dt) => CookieExpires::At(dt),
            None => CookieExpires::Invalid(millis.to_string()),
        }
    }

    /// Parse the value of an `Expires` attribute. HTTP dates are RFC 2822
    /// style, including the obsolete `GMT` zone name; RFC 3339 is accepted
    /// as a fallback.
    pub fn parse(s: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return CookieExpires::At(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return CookieExpires::At(dt.with_timezone(&Utc));
        }
        CookieExpires::Invalid(s.to_string())
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CookieExpires::At(dt) => Some(*dt),
            CookieExpires::Invalid(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for CookieExpires {
    fn from(dt: DateTime<Utc>) -> Self {
        CookieExpires::At(dt)
    }
}

impl fmt::Display for CookieExpires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieExpires::At(dt) => write!(f, "{}", dt.format_with_items(IMF_FIXDATE.iter())),
            CookieExpires::Invalid(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_imf_fixdate() {
        let e = CookieExpires::from_unix_millis(0);
        assert_eq!(e.to_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn parse_http_date() {
        let e = CookieExpires::parse("Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(e.datetime().unwrap().timestamp(), 1445412480);
        assert_eq!(e.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn parse_rfc3339_fallback() {
        let e = CookieExpires::parse("2015-10-21T07:28:00Z");
        assert_eq!(e.datetime().unwrap().timestamp(), 1445412480);
    }

    #[test]
    fn invalid_date_text_kept() {
        let e = CookieExpires::parse("not a date");
        assert_eq!(e, CookieExpires::Invalid("not a date".to_string()));
        assert!(e.datetime().is_none());
        assert_eq!(e.to_string(), "not a date");
    }
}
