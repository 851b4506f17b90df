use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// The input bundle did not match the contract record schema.
    InvalidRecord(String),
    Pdf(String),
    /// The document tree could not be written as JSON.
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidRecord(msg) => write!(f, "invalid contract record: {msg}"),
            Error::Pdf(msg) => write!(f, "PDF export failed: {msg}"),
            Error::Json(msg) => write!(f, "JSON export failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidRecord(e.to_string())
    }
}
