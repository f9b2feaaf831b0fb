/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::encoding::encode_value;
use crate::{CookieExpires, CookiePriority, SameSite};

/// A cookie as sent by a client in a `Cookie` header: just the name/value
/// pair, no attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCookie {
    pub name: String,
    pub value: String,
}

impl RequestCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        RequestCookie {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn build_header_value(&self) -> String {
        format!("{}={}", self.name, encode_value(&self.value))
    }
}

impl fmt::Display for RequestCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_header_value())
    }
}

/// A cookie as sent by a server in a `Set-Cookie` header.
///
/// Every attribute is independently optional; an unset field is simply not
/// emitted when serializing. The flag attributes default to `false`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub expires: Option<CookieExpires>,
    pub max_age: Option<i64>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    pub priority: Option<CookiePriority>,
}

impl ResponseCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ResponseCookie {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Build the `Set-Cookie` header value.
    ///
    /// Only the cookie value is percent encoded; `name`, `domain` and
    /// `path` are trusted to be header safe. Attribute tokens follow in
    /// fixed order: Path, Expires, Max-Age, Domain, Secure, HttpOnly,
    /// SameSite, Priority. An empty `path` or `domain` string is skipped,
    /// while `Max-Age` and `Expires` are emitted whenever set, including
    /// zero values.
    pub fn build_header_value(&self) -> String {
        let mut tokens = vec![format!("{}={}", self.name, encode_value(&self.value))];
        if let Some(path) = &self.path {
            if !path.is_empty() {
                tokens.push(format!("Path={path}"));
            }
        }
        if let Some(expires) = &self.expires {
            tokens.push(format!("Expires={expires}"));
        }
        if let Some(max_age) = self.max_age {
            tokens.push(format!("Max-Age={max_age}"));
        }
        if let Some(domain) = &self.domain {
            if !domain.is_empty() {
                tokens.push(format!("Domain={domain}"));
            }
        }
        if self.secure {
            tokens.push("Secure".to_string());
        }
        if self.http_only {
            tokens.push("HttpOnly".to_string());
        }
        if let Some(same_site) = self.same_site {
            tokens.push(format!("SameSite={same_site}"));
        }
        if let Some(priority) = self.priority {
            tokens.push(format!("Priority={priority}"));
        }
        tokens.join("; ")
    }
}

impl fmt::Display for ResponseCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_header_value())
    }
}
