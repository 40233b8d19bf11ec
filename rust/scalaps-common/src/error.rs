use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// A key produced by a keying function was seen more than once.
    ///
    /// `key` is the rendered key, typically its `Debug` form.
    pub fn duplicate_key(key: impl Into<String>) -> Error {
        Error(ErrorKind::DuplicateKey { key: key.into() }.into())
    }

    pub fn overlapping_keys(count: usize) -> Error {
        Error(ErrorKind::OverlappingKeys { count }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("duplicate key {key}")]
    DuplicateKey { key: String },

    #[error("there are {count} keys in common when none were expected")]
    OverlappingKeys { count: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
