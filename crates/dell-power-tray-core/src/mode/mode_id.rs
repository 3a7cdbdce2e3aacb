use std::fmt;

/// Opaque, case-sensitive token naming one hardware operating mode.
///
/// The set of valid tokens per axis is defined by the
/// [`HardwareInterface`](crate::HardwareInterface) that enumerates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModeId(String);

impl ModeId {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModeId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ModeId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl PartialEq<str> for ModeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
