use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_INVALID_ARGUMENT: u8 = 1;
pub const EXIT_INVALID_FILE_PATH: u8 = 2;

#[derive(Error, Debug)]
pub enum WatchError {
    /// Carries clap's diagnostic; only the usage line is displayed.
    #[error("USAGE: watchfd PATH")]
    Usage(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("Invalid configuration: {0:#}")]
    Config(anyhow::Error),

    #[error("Failed to initialize notification backend: {0}")]
    BackendInit(String),

    #[error("Error initializing inotify instance: {0}")]
    WatchCreate(#[source] io::Error),

    #[error("Failed to watch file at {}. Error: {source}", .path.display())]
    WatchRegister {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from inotify instance: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[source] io::Error),

    #[error("Failed to write to stdout: {0}")]
    Output(#[source] io::Error),

    /// Not fatal; the event loop reports it and moves on.
    #[error("Failed to show notification: {0}")]
    Show(String),
}

impl WatchError {
    pub fn exit_code(&self) -> u8 {
        match self {
            WatchError::Usage(_) => EXIT_INVALID_ARGUMENT,
            WatchError::InvalidPath(_) => EXIT_INVALID_FILE_PATH,
            _ => libc::EXIT_FAILURE as u8,
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
