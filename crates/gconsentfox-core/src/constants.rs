//! Fixed locations and values for the Firefox cookie store.

use std::time::Duration;

/// Firefox executable that the process is replaced with
pub const FIREFOX_BIN: &str = "/usr/bin/firefox";

/// Firefox data directory, relative to the home directory
pub const FIREFOX_DATA_DIR: &str = ".mozilla/firefox";

/// Profile manifest inside the data directory
pub const PROFILES_INI: &str = "profiles.ini";

/// Sections naming the default profile of an installation start with this
pub const INSTALL_SECTION_PREFIX: &str = "Install";

/// Key holding the profile directory inside an install section
pub const DEFAULT_PROFILE_KEY: &str = "Default";

/// Cookie database inside a profile directory
pub const COOKIES_DB: &str = "cookies.sqlite";

/// How long to wait on a database held by a running Firefox
pub const DB_BUSY_TIMEOUT: Duration = Duration::from_millis(250);

/// 2100-01-01T00:00:00Z in unix seconds
pub const CONSENT_EXPIRY: i64 = 4_102_444_800;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_expiry_is_start_of_2100() {
        let expected = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(CONSENT_EXPIRY, expected.timestamp());
    }
}
