use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::grouping::group;

/// Why the gate declined to regroup a class string
///
/// These are valid "nothing to do" outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer tokens than the configured minimum
    TooFewTokens,

    /// Input already spans multiple lines, assumed pre-grouped
    AlreadyMultiline,

    /// All tokens fall into a single category; regrouping adds nothing
    SingleCategory,
}

impl SkipReason {
    /// Get a short human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooFewTokens => "too few tokens",
            Self::AlreadyMultiline => "already multiline",
            Self::SingleCategory => "single category",
        }
    }
}

/// Probe why regrouping would be skipped, if it would be
pub(crate) fn skip_reason(class_string: &str, options: &FormatOptions) -> Option<SkipReason> {
    let token_count = class_string.split_whitespace().count();
    if token_count < options.min_tokens {
        return Some(SkipReason::TooFewTokens);
    }

    // A string that already spans lines has been reformatted before; running
    // again must be a no-op.
    if class_string.contains('\n') {
        return Some(SkipReason::AlreadyMultiline);
    }

    if group(class_string).len() <= 1 {
        return Some(SkipReason::SingleCategory);
    }

    None
}

/// Decide whether a class string should be regrouped at all
#[must_use]
pub fn should_group(class_string: &str, options: &FormatOptions) -> bool {
    skip_reason(class_string, options).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(min_tokens: usize) -> FormatOptions {
        FormatOptions {
            min_tokens,
            ..Default::default()
        }
    }

    #[test]
    fn test_below_threshold_is_skipped() {
        // Three tokens, two categories, min_tokens 4.
        let opts = options(4);
        assert!(!should_group("flex mt-4 bg-white", &opts));
        assert_eq!(
            skip_reason("flex mt-4 bg-white", &opts),
            Some(SkipReason::TooFewTokens)
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let opts = options(4);
        // Exactly min_tokens - 1 tokens: never regrouped.
        assert!(!should_group("flex mt-4 bg-white", &opts));
        // Exactly min_tokens tokens with >= 2 categories: regrouped.
        assert!(should_group("flex mt-4 bg-white shadow-sm", &opts));
    }

    #[test]
    fn test_multiline_input_is_skipped() {
        let opts = options(2);
        assert_eq!(
            skip_reason("flex items-center\nmt-4 px-6", &opts),
            Some(SkipReason::AlreadyMultiline)
        );
    }

    #[test]
    fn test_single_category_is_skipped() {
        let opts = options(2);
        assert_eq!(
            skip_reason("flex items-center justify-between gap-2", &opts),
            Some(SkipReason::SingleCategory)
        );
    }

    #[test]
    fn test_empty_string_is_skipped() {
        assert_eq!(skip_reason("", &options(4)), Some(SkipReason::TooFewTokens));
    }

    #[test]
    fn test_multi_category_passes() {
        assert!(should_group(
            "mt-4 flex items-center px-6 py-3 bg-white",
            &options(4)
        ));
    }
}
