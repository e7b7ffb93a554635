use crate::{Error, Result};
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Hands the current process over to Firefox
pub struct FirefoxLauncher {
    firefox_path: PathBuf,
    args: Vec<OsString>,
}

impl FirefoxLauncher {
    /// Create a new FirefoxLauncher forwarding `args` verbatim
    pub fn new(firefox_path: PathBuf, args: Vec<OsString>) -> Self {
        Self { firefox_path, args }
    }

    /// Replace the current process with Firefox
    ///
    /// Only returns if Firefox could not be executed.
    #[cfg(unix)]
    pub fn launch(&self) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        tracing::debug!(
            "Executing {} with {} arguments",
            self.firefox_path.display(),
            self.args.len()
        );

        let source = self.build_command().exec();
        Err(Error::Launch {
            path: self.firefox_path.clone(),
            source,
        })
    }

    /// Run Firefox and exit with its status
    #[cfg(not(unix))]
    pub fn launch(&self) -> Result<Infallible> {
        let status = self
            .build_command()
            .status()
            .map_err(|source| Error::Launch {
                path: self.firefox_path.clone(),
                source,
            })?;

        std::process::exit(status.code().unwrap_or(1))
    }

    /// Build the Firefox command line; the environment is inherited
    fn build_command(&self) -> Command {
        let mut command = Command::new(&self.firefox_path);
        command.args(&self.args);
        command
    }
}
