//! The closed set of renderable units a formatted line is built from.

/// One renderable unit of a log line. `Group` nests components that render
/// back to back, without the outer separator between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogComponent {
    /// The render instant, formatted by the configured timestamp rule.
    Timestamp,
    /// Lowercase level name.
    Level,
    Message,
    /// Calling function or module path.
    Function,
    File,
    /// Line number in decimal.
    Line,
    /// Caller-prettified metadata; empty when absent.
    Metadata,
    /// Literal text, rendered verbatim.
    Text(String),
    /// Children rendered and concatenated as a single unit.
    Group(Vec<LogComponent>),
}

impl LogComponent {
    /// Literal text component.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Group of `children`, rendered without separators between them.
    #[must_use]
    pub fn group(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Group(children.into_iter().collect())
    }

    /// Template parsing matches brace-delimited names against these.
    #[must_use]
    pub fn from_placeholder(name: &str) -> Option<Self> {
        match name {
            "timestamp" => Some(Self::Timestamp),
            "level" => Some(Self::Level),
            "message" | "msg" => Some(Self::Message),
            "function" => Some(Self::Function),
            "file" => Some(Self::File),
            "line" => Some(Self::Line),
            "metadata" => Some(Self::Metadata),
            _ => None,
        }
    }
}
