/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::str::FromStr;

/// `SameSite` cookie attribute value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "strict",
            SameSite::Lax => "lax",
            SameSite::None => "none",
        }
    }
}

impl FromStr for SameSite {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(SameSite::Strict),
            "lax" => Ok(SameSite::Lax),
            "none" => Ok(SameSite::None),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Priority` cookie attribute value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CookiePriority {
    Low,
    Medium,
    High,
}

impl CookiePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookiePriority::Low => "low",
            CookiePriority::Medium => "medium",
            CookiePriority::High => "high",
        }
    }
}

impl FromStr for CookiePriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(CookiePriority::Low),
            "medium" => Ok(CookiePriority::Medium),
            "high" => Ok(CookiePriority::High),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CookiePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn same_site_from_str() {
        assert_eq!(SameSite::from_str("Lax"), Ok(SameSite::Lax));
        assert_eq!(SameSite::from_str("STRICT"), Ok(SameSite::Strict));
        assert_eq!(SameSite::from_str("none"), Ok(SameSite::None));
        assert!(SameSite::from_str("bogus").is_err());
    }

    #[test]
    fn priority_from_str() {
        assert_eq!(CookiePriority::from_str("HIGH"), Ok(CookiePriority::High));
        assert_eq!(CookiePriority::from_str("medium"), Ok(CookiePriority::Medium));
        assert!(CookiePriority::from_str("urgent").is_err());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(SameSite::Lax.to_string(), "lax");
        assert_eq!(CookiePriority::Low.to_string(), "low");
    }
}
