use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    DumperError(crawl_dumper::Error),
    ReqwestError(reqwest::Error),
}

impl std::error::Error for Error {}

impl From<crawl_dumper::Error> for Error {
    fn from(e: crawl_dumper::Error) -> Self {
        Error::DumperError(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ReqwestError(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DumperError(e) => write!(f, "{}", e),
            Error::ReqwestError(e) => write!(f, "{}", e),
        }
    }
}
