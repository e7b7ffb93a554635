use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profiles.ini at line {line}: {message}")]
    ProfilesIni { line: usize, message: String },

    #[error("Failed to determine default Firefox profile from {}", ini.display())]
    ProfileNotFound { ini: PathBuf },

    #[error("Failed to open cookie database {}: {source}", path.display())]
    OpenDatabase {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to launch Firefox at {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
