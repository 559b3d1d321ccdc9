use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Output shape for rendered groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Call-like expression with one quoted argument per category
    #[serde(rename = "clsx")]
    ClsxCall,

    /// Array literal with one quoted element per category
    Array,

    /// Multi-line template literal, tokens unquoted
    #[serde(rename = "template")]
    TemplateLiteral,

    /// Ordered JSON dump of category name to token list
    #[serde(rename = "raw")]
    RawMapping,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::ClsxCall
    }
}

impl OutputFormat {
    /// Resolve a format from its wire name
    ///
    /// Unknown names are a configuration error the caller must handle; they
    /// are never coerced to a default.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "clsx" => Ok(Self::ClsxCall),
            "array" => Ok(Self::Array),
            "template" => Ok(Self::TemplateLiteral),
            "raw" => Ok(Self::RawMapping),
            other => Err(EngineError::unknown_format(other)),
        }
    }

    /// Get the wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClsxCall => "clsx",
            Self::Array => "array",
            Self::TemplateLiteral => "template",
            Self::RawMapping => "raw",
        }
    }
}

/// Options controlling gating and rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Output shape to render
    pub format: OutputFormat,

    /// Minimum token count before regrouping applies
    pub min_tokens: usize,

    /// Emit a category label comment above each segment
    pub include_comments: bool,

    /// Indentation prefix for each rendered line
    pub indent: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            min_tokens: 4,
            include_comments: true,
            indent: "  ".to_string(),
        }
    }
}

impl FormatOptions {
    /// Create options for a specific output format, defaults elsewhere
    #[must_use]
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_tokens == 0 {
            return Err(EngineError::invalid_config("min_tokens must be > 0"));
        }

        // A non-whitespace indent would leak into the rendered literal.
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(EngineError::invalid_config(
                "indent must contain only spaces or tabs",
            ));
        }

        Ok(())
    }
}
