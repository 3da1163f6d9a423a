use thiserror::Error;

/// Reasons the app could not be started in the current page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window is available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("mount element #{0} not found")]
    RootNotFound(String),

    #[error("failed to install console logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level {0:?}, expected one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}
