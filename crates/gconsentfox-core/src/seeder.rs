use crate::constants::DB_BUSY_TIMEOUT;
use crate::cookies::{ConsentCookie, CookieTimes, INSERT_COOKIE_SQL};
use crate::{Error, Result};
use rusqlite::{Connection, ErrorCode, OpenFlags, Transaction, params};
use std::path::Path;

/// Outcome of one seeding pass
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Rows written
    pub inserted: usize,
    /// Rows that already existed
    pub skipped: usize,
    /// SQLite failure that stopped the pass early, if any
    pub failure: Option<Error>,
}

impl SeedReport {
    /// True when the failure was another connection holding the database
    pub fn is_lock_contention(&self) -> bool {
        matches!(
            &self.failure,
            Some(Error::Sqlite(err))
                if matches!(
                    err.sqlite_error_code(),
                    Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
                )
        )
    }
}

/// Writes consent cookies into an existing Firefox cookie database
pub struct CookieSeeder {
    conn: Connection,
}

impl CookieSeeder {
    /// Open an existing cookie database for writing
    ///
    /// The file is never created; the `moz_cookies` schema must already be
    /// there.
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening cookie database: {}", path.display());

        let open_err = |source: rusqlite::Error| Error::OpenDatabase {
            path: path.to_path_buf(),
            source,
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(open_err)?;
        conn.busy_timeout(DB_BUSY_TIMEOUT).map_err(open_err)?;

        Ok(Self { conn })
    }

    /// Insert every cookie that is not stored yet, commit, and close
    ///
    /// A SQLite failure while inserting or committing ends the pass and is
    /// returned in the report instead of as an error; rows written before it
    /// are still committed.
    pub fn seed(mut self, cookies: &[ConsentCookie], times: CookieTimes) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        let tx = self.conn.transaction()?;

        if let Err(err) = insert_cookies(&tx, cookies, times, &mut report) {
            tracing::debug!("Cookie insert stopped early: {}", err);
            report.failure = Some(err.into());
        }

        if let Err(err) = tx.commit() {
            tracing::debug!("Cookie commit failed: {}", err);
            report.failure.get_or_insert(err.into());
        }

        self.conn.close().map_err(|(_, err)| Error::Sqlite(err))?;

        tracing::info!(
            "Seeded {} cookies ({} already present)",
            report.inserted,
            report.skipped
        );

        Ok(report)
    }
}

fn insert_cookies(
    tx: &Transaction<'_>,
    cookies: &[ConsentCookie],
    times: CookieTimes,
    report: &mut SeedReport,
) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare(INSERT_COOKIE_SQL)?;

    for cookie in cookies {
        let changed = stmt.execute(params![
            cookie.name,
            cookie.value,
            cookie.host,
            times.expiry,
            times.now_micros,
            times.now_micros,
        ])?;

        if changed == 0 {
            tracing::debug!("{} for {} already present", cookie.name, cookie.host);
            report.skipped += 1;
        } else {
            tracing::debug!("Inserted {} for {}", cookie.name, cookie.host);
            report.inserted += 1;
        }
    }

    Ok(())
}
