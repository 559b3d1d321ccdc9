use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::error::Result;
use crate::gate::{skip_reason, SkipReason};
use crate::grouping::group;
use crate::render::render;

/// Result of one formatting pass
///
/// A declined gate is a valid outcome, not an error; `changed` tells hosts
/// whether anything needs splicing back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutcome {
    /// True when the output differs from the input
    pub changed: bool,

    /// Rendered text, or the input unchanged when the gate declined
    pub output: String,

    /// Why the gate declined, when it did
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub skip_reason: Option<SkipReason>,
}

/// Main formatter interface
///
/// Holds validated options and runs the gate -> group -> render pipeline.
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Create a formatter, validating the options up front
    pub fn new(options: FormatOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Get the options this formatter runs with
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a class string, or return it unchanged when the gate declines
    pub fn format(&self, class_string: &str) -> Result<FormatOutcome> {
        if let Some(reason) = skip_reason(class_string, &self.options) {
            log::debug!("leaving class string unchanged: {}", reason.as_str());
            return Ok(FormatOutcome {
                changed: false,
                output: class_string.to_string(),
                skip_reason: Some(reason),
            });
        }

        let grouping = group(class_string);
        let output = render(&grouping, &self.options)?;
        Ok(FormatOutcome {
            changed: output != class_string,
            output,
            skip_reason: None,
        })
    }
}

/// One-shot convenience over [`Formatter`]
pub fn format(class_string: &str, options: &FormatOptions) -> Result<FormatOutcome> {
    Formatter::new(options.clone())?.format(class_string)
}
