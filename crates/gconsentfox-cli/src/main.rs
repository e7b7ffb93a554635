use anyhow::Result;
use gconsentfox_core::constants::FIREFOX_BIN;
use gconsentfox_core::{
    CONSENT_COOKIES, CookieSeeder, CookieTimes, FirefoxLauncher, FirefoxPaths, ProfileLocator,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    init_logging();

    // Every argument belongs to Firefox; there are no options of our own.
    let firefox_args: Vec<OsString> = std::env::args_os().skip(1).collect();

    println!("Inserting Google cookie consent cookies");
    let cookies_db = ProfileLocator::new(FirefoxPaths::discover()?).cookies_db()?;
    seed_cookies(&cookies_db)?;

    println!("Starting Firefox");
    let launcher = FirefoxLauncher::new(PathBuf::from(FIREFOX_BIN), firefox_args);
    match launcher.launch()? {}
}

/// Seeding is best effort: a busy or broken table is reported and Firefox
/// starts anyway.
fn seed_cookies(cookies_db: &Path) -> Result<()> {
    let report = CookieSeeder::open(cookies_db)?.seed(CONSENT_COOKIES, CookieTimes::now())?;

    if let Some(err) = &report.failure {
        if report.is_lock_contention() {
            println!("Failed to add cookies: {}. Firefox already running?", err);
        } else {
            println!("Failed to add cookies: {}", err);
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gconsentfox=info,gconsentfox_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
