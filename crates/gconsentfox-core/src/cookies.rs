//! The consent cookies written into Firefox's `moz_cookies` table.

use crate::constants::CONSENT_EXPIRY;

/// A cookie to seed; a host with a leading dot also covers subdomains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsentCookie {
    pub name: &'static str,
    pub value: &'static str,
    pub host: &'static str,
}

/// Cookies that record an answered Google consent prompt
pub static CONSENT_COOKIES: &[ConsentCookie] = &[
    ConsentCookie {
        name: "ANID",
        value: "OPT_OUT",
        host: ".google.com",
    },
    ConsentCookie {
        name: "ANID",
        value: "OPT_OUT",
        host: ".google.co.uk",
    },
    ConsentCookie {
        name: "CONSENT",
        value: "YES+cb",
        host: ".google.com",
    },
    ConsentCookie {
        name: "CONSENT",
        value: "YES+cb",
        host: ".google.co.uk",
    },
    ConsentCookie {
        name: "CONSENT",
        value: "YES+cb",
        host: ".youtube.com",
    },
];

/// Path, originAttributes and the secure/httpOnly/sameSite/scheme flags are
/// fixed in the statement; schemeMap 2 is HTTPS.
pub const INSERT_COOKIE_SQL: &str = "\
INSERT OR IGNORE INTO moz_cookies
    (originAttributes, name, value, host, path, expiry, lastAccessed, creationTime,
     isSecure, isHttpOnly, inBrowserElement, sameSite, rawSameSite, schemeMap)
  VALUES ('', ?1, ?2, ?3, '/', ?4, ?5, ?6, 1, 1, 0, 0, 0, 2)";

/// Timestamps shared by every row written in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieTimes {
    /// Unix seconds
    pub expiry: i64,
    /// Unix microseconds, used for both lastAccessed and creationTime
    pub now_micros: i64,
}

impl CookieTimes {
    /// Sample the clock once
    pub fn now() -> Self {
        Self::at(chrono::Utc::now().timestamp_micros())
    }

    pub fn at(now_micros: i64) -> Self {
        Self {
            expiry: CONSENT_EXPIRY,
            now_micros,
        }
    }
}
