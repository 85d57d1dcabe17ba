//! Pattern compilation error types.

/// Why a pattern could not be turned into a matcher.
#[derive(Debug, Clone)]
pub enum PatternError {
    /// Empty or whitespace-only pattern.
    Blank,
    /// `regex:` prefix with nothing after it.
    EmptyRegex,
    /// The regex engine rejected the expression.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "pattern is blank"),
            Self::EmptyRegex => write!(f, "empty expression after '{}'", super::REGEX_PREFIX),
            Self::InvalidRegex { pattern, source } => {
                write!(f, "'{pattern}' does not compile: {source}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::Blank | Self::EmptyRegex => None,
        }
    }
}
