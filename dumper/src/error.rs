use std::{fmt::Display, io, str::Utf8Error};

#[derive(Debug)]
pub enum Error {
    NotConfigured,
    IoError(io::Error),
    InvalidBody(Utf8Error),
    InvalidHeaderValue(String, Utf8Error),
    UndecodableBody(&'static str),
    SettingsError(toml::de::Error),
    InvalidSetting(String),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotConfigured => write!(f, "The dumper hasn't been enabled"),
            Error::IoError(e) => write!(f, "IoError: {}", e),
            Error::InvalidBody(e) => write!(f, "The body is not valid UTF-8: {}", e),
            Error::InvalidHeaderValue(name, e) => {
                write!(f, "Invalid value for header {}: {}", name, e)
            }
            Error::UndecodableBody(encoding) => {
                write!(f, "The body is not valid {}", encoding)
            }
            Error::SettingsError(e) => write!(f, "Settings error: {}", e),
            Error::InvalidSetting(name) => write!(f, "Invalid value for setting {}", name),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Self {
        Error::InvalidBody(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::SettingsError(e)
    }
}
