pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns an `InvalidArgument` error from the enclosing function when the
/// condition does not hold.
///
/// ```
/// use scalaps_common::{Result, verify_arg};
///
/// fn chunk_size(size: usize) -> Result<usize> {
///     verify_arg!(size, size > 0);
///     Ok(size)
/// }
///
/// assert!(chunk_size(3).is_ok());
/// assert!(chunk_size(0).is_err());
/// ```
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn checked_len(len: usize) -> super::Result<usize> {
        verify_arg!(len, len > 0);
        Ok(len)
    }

    #[test]
    fn test_verify_arg_passes() {
        assert_eq!(checked_len(4).unwrap(), 4);
    }

    #[test]
    fn test_verify_arg_fails_with_condition_text() {
        let err = checked_len(0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "len");
                assert_eq!(message, "len > 0");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
