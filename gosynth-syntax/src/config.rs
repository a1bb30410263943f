//! Printer configuration.

use serde::Deserialize;

/// Indentation style for printed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, what gofmt produces.
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

/// Options forwarded to a [`Printer`](crate::printer::Printer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintConfig {
    /// One level of indentation.
    pub indent: Indent,
    /// Indentation levels applied to every line.
    pub base_indent: usize,
}

impl PrintConfig {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            base_indent: 0,
        }
    }

    /// Parse a configuration from a TOML document.
    ///
    /// ```
    /// use gosynth_syntax::{Indent, PrintConfig};
    ///
    /// let config = PrintConfig::from_toml_str("indent = { spaces = 4 }").unwrap();
    /// assert_eq!(config.indent, Indent::Spaces(4));
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
