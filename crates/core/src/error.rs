use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigParse(String),
    IoError(std::io::Error),
    InvalidArchive(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigParse(msg) => write!(f, "Configuration parse error: {}", msg),
            Error::IoError(err) => write!(f, "IO error: {}", err),
            Error::InvalidArchive(msg) => write!(f, "Invalid archive: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Error::IoError(io),
            other => Error::InvalidArchive(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_io_error_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = zip::result::ZipError::Io(io).into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_io_error_message_appears_once() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "Is a directory");
        let err = Error::from(io);
        assert_eq!(err.to_string(), "IO error: Is a directory");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_zip_format_error_is_invalid_archive() {
        let err: Error = zip::result::ZipError::InvalidArchive("bad magic".into()).into();
        assert!(matches!(err, Error::InvalidArchive(_)));
        assert!(err.to_string().starts_with("Invalid archive:"));
    }
}
