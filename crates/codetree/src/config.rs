use serde::{Deserialize, Serialize};

/// How one level of indentation is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    /// One tab per level (default).
    #[default]
    Tabs,
    /// The given number of spaces per level.
    Spaces(usize),
}

impl IndentStyle {
    pub(crate) fn unit(&self) -> String {
        match self {
            IndentStyle::Tabs => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Line terminator emitted for line breaks requested through the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for a [`Writer`](crate::Writer).
///
/// The defaults produce tab-indented output with `\n` line breaks starting at
/// column zero.
///
/// # Example
/// ```
/// use codetree::{IndentStyle, WriterConfig};
///
/// let config = WriterConfig::new().indent(IndentStyle::Spaces(4));
/// assert_eq!(config.indent, IndentStyle::Spaces(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Indentation unit.
    pub indent: IndentStyle,
    /// Line terminator used by `new_line`.
    pub line_ending: LineEnding,
    /// Indent depth the writer starts at.
    pub initial_indent: usize,
}

impl WriterConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn indent(mut self, style: IndentStyle) -> Self {
        self.indent = style;
        self
    }

    /// Set the line terminator.
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }

    /// Start rendering at the given indent depth.
    ///
    /// Useful when the output is spliced into an already indented block.
    pub fn initial_indent(mut self, depth: usize) -> Self {
        self.initial_indent = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.indent, IndentStyle::Tabs);
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.initial_indent, 0);
    }

    #[test]
    fn indent_units() {
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
        assert_eq!(IndentStyle::Spaces(2).unit(), "  ");
    }

    #[test]
    fn deserialize_partial() {
        let config: WriterConfig =
            serde_json::from_str(r#"{"indent":{"spaces":2},"line_ending":"cr_lf"}"#).unwrap();
        assert_eq!(config.indent, IndentStyle::Spaces(2));
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert_eq!(config.initial_indent, 0);
    }

    #[test]
    fn serialize_roundtrip() {
        let config = WriterConfig::new()
            .indent(IndentStyle::Spaces(4))
            .initial_indent(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: WriterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
