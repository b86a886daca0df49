/// An error that can occur when loading generator input.
///
/// The translation pipeline itself never fails; metadata gaps degrade to
/// [`Warning`](crate::Warning)s. `Error` covers the operations that can
/// genuinely fail before a run starts, such as reading a metadata dump.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// The metadata dump could not be parsed.
    InvalidMetadata(serde_json::Error),
    /// An I/O failure while reading generator input.
    Io(std::io::Error),
    /// Anything bridged in from `anyhow`.
    Anyhow(anyhow::Error),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::InvalidMetadata(err) => Some(err),
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind() {
            ErrorKind::InvalidMetadata(err) => write!(f, "invalid metadata: {err}"),
            ErrorKind::Io(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(ErrorKind::InvalidMetadata(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(ErrorKind::Io(err))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_metadata_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("invalid metadata:"));
    }

    #[test]
    fn io_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }
}
