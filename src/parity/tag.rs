use serde::Serialize;
use std::fmt;

/// Disposition label attached to a source test, e.g. `[okTest()]`.
///
/// The label is the word that precedes `Test()` inside the brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `[Test()]`: not yet triaged.
    Plain,
    /// `[okTest()]`: confirmed to pass once ported.
    Ok,
    /// `[errorTest()]`: confirmed to raise an error once ported.
    Error,
    /// `[xTest()]`: out of scope for the port.
    Excluded,
    Other(String),
}

impl Tag {
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "" => Self::Plain,
            "ok" => Self::Ok,
            "error" => Self::Error,
            "x" => Self::Excluded,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn prefix(&self) -> &str {
        match self {
            Self::Plain => "",
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Excluded => "x",
            Self::Other(prefix) => prefix,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Ok | Self::Error)
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}Test()]", self.prefix())
    }
}

impl Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
