use crate::constants::{
    COOKIES_DB, DEFAULT_PROFILE_KEY, FIREFOX_DATA_DIR, INSTALL_SECTION_PREFIX, PROFILES_INI,
};
use crate::profiles_ini::ProfilesIni;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Firefox data directory holding profiles.ini and the profile directories
#[derive(Debug, Clone)]
pub struct FirefoxPaths {
    root: PathBuf,
}

impl FirefoxPaths {
    /// Data directory of the current user
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(Self::from_home(&home))
    }

    /// Data directory below an explicit home directory
    pub fn from_home(home: &Path) -> Self {
        Self {
            root: home.join(FIREFOX_DATA_DIR),
        }
    }

    /// Get the data directory path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the profiles.ini path
    pub fn profiles_ini(&self) -> PathBuf {
        self.root.join(PROFILES_INI)
    }
}

/// Resolves the cookie database of the default Firefox profile
pub struct ProfileLocator {
    paths: FirefoxPaths,
}

impl ProfileLocator {
    pub fn new(paths: FirefoxPaths) -> Self {
        Self { paths }
    }

    /// Find the cookie database of the installation's default profile
    ///
    /// The path is not checked for existence.
    pub fn cookies_db(&self) -> Result<PathBuf> {
        let ini_path = self.paths.profiles_ini();
        tracing::debug!("Reading Firefox profiles from: {}", ini_path.display());

        let content = std::fs::read_to_string(&ini_path).map_err(|source| Error::Io {
            path: ini_path.clone(),
            source,
        })?;
        let profiles = ProfilesIni::parse(&content)?;

        let profile = profiles
            .find_in_sections(INSTALL_SECTION_PREFIX, DEFAULT_PROFILE_KEY)
            .ok_or(Error::ProfileNotFound { ini: ini_path })?;

        let db_path = self.paths.root().join(profile).join(COOKIES_DB);
        tracing::debug!("Default profile cookie database: {}", db_path.display());

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_profiles_ini(home: &Path, content: &str) {
        let root = home.join(FIREFOX_DATA_DIR);
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(PROFILES_INI), content).unwrap();
    }

    #[test]
    fn test_resolves_default_profile() {
        let home = tempfile::tempdir().unwrap();
        write_profiles_ini(home.path(), "[Install123]\nDefault=abc\n");

        let locator = ProfileLocator::new(FirefoxPaths::from_home(home.path()));
        let path = locator.cookies_db().unwrap();

        assert!(path.ends_with(".mozilla/firefox/abc/cookies.sqlite"));
        assert!(path.starts_with(home.path()));
    }

    #[test]
    fn test_does_not_require_database_to_exist() {
        let home = tempfile::tempdir().unwrap();
        write_profiles_ini(home.path(), "[InstallABC]\nDefault=missing.profile\n");

        let locator = ProfileLocator::new(FirefoxPaths::from_home(home.path()));
        let path = locator.cookies_db().unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_missing_install_section_is_error() {
        let home = tempfile::tempdir().unwrap();
        write_profiles_ini(
            home.path(),
            "[Profile0]\nName=default\nPath=abc\nDefault=1\n\n[General]\nVersion=2\n",
        );

        let locator = ProfileLocator::new(FirefoxPaths::from_home(home.path()));
        let result = locator.cookies_db();

        assert!(matches!(result, Err(Error::ProfileNotFound { .. })));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to determine default Firefox profile")
        );
    }

    #[test]
    fn test_missing_profiles_ini_is_io_error() {
        let home = tempfile::tempdir().unwrap();

        let locator = ProfileLocator::new(FirefoxPaths::from_home(home.path()));
        let result = locator.cookies_db();

        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(result.unwrap_err().to_string().contains("profiles.ini"));
    }

    #[test]
    fn test_profiles_ini_path() {
        let paths = FirefoxPaths::from_home(Path::new("/home/user"));
        assert_eq!(
            paths.profiles_ini(),
            PathBuf::from("/home/user/.mozilla/firefox/profiles.ini")
        );
    }
}
