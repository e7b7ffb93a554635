//! Seed Google consent cookies into the default Firefox profile, then
//! become Firefox.

pub mod constants;
pub mod cookies;
mod error;
mod launcher;
mod profile;
pub mod profiles_ini;
mod seeder;

pub use cookies::{CONSENT_COOKIES, ConsentCookie, CookieTimes};
pub use error::{Error, Result};
pub use launcher::FirefoxLauncher;
pub use profile::{FirefoxPaths, ProfileLocator};
pub use seeder::{CookieSeeder, SeedReport};
