use std::{fmt, str::FromStr};

use scalaps_common::Error;

/// Selects which keys [`ScDict::join`](crate::ScDict::join) produces rows for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Keys present on both sides.
    #[default]
    Inner,
    /// Keys present on either side.
    Outer,
    /// Every key of the left side.
    Left,
    /// Every key of the right side.
    Right,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "inner",
            JoinKind::Outer => "outer",
            JoinKind::Left => "left",
            JoinKind::Right => "right",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inner" => Ok(JoinKind::Inner),
            "outer" => Ok(JoinKind::Outer),
            "left" => Ok(JoinKind::Left),
            "right" => Ok(JoinKind::Right),
            _ => Err(Error::invalid_arg(
                "how",
                format!("invalid join {s:?}, must be either inner, outer, left or right"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalaps_common::ErrorKind;

    #[test]
    fn test_parse_all_kinds() {
        for kind in [
            JoinKind::Inner,
            JoinKind::Outer,
            JoinKind::Left,
            JoinKind::Right,
        ] {
            assert_eq!(kind.to_string().parse::<JoinKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "sideways".parse::<JoinKind>().unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "how");
                assert!(message.contains("\"sideways\""));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_default_is_inner() {
        assert_eq!(JoinKind::default(), JoinKind::Inner);
    }
}
