use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Semantic category a utility-class token belongs to
///
/// The set is closed: every token maps to exactly one of these, with
/// [`Category::Other`] as the guaranteed fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Width, height and box sizing
    Size,
    /// Display, position, flex/grid placement
    Layout,
    /// Margin, padding and gaps between siblings
    Spacing,
    /// Borders, rings, dividers, outlines and radii
    Border,
    /// Background colors, gradients and backdrops
    Background,
    /// Typography
    Text,
    /// Shadows, filters, transitions and interaction affordances
    Effects,
    /// State and variant prefixes (`hover:`, `dark:`, ...)
    States,
    /// Breakpoint prefixes (`sm:`, `md:`, ...)
    Responsive,
    /// Catch-all for tokens no rule claims
    Other,
}

impl Category {
    /// All categories in classification precedence order
    pub const ALL: [Self; 10] = [
        Self::Size,
        Self::Layout,
        Self::Spacing,
        Self::Border,
        Self::Background,
        Self::Text,
        Self::Effects,
        Self::States,
        Self::Responsive,
        Self::Other,
    ];

    /// Get the wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Layout => "layout",
            Self::Spacing => "spacing",
            Self::Border => "border",
            Self::Background => "background",
            Self::Text => "text",
            Self::Effects => "effects",
            Self::States => "states",
            Self::Responsive => "responsive",
            Self::Other => "other",
        }
    }

    /// Get the display label used for category comments
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Size => "Size",
            Self::Layout => "Layout",
            Self::Spacing => "Spacing",
            Self::Border => "Border",
            Self::Background => "Background",
            Self::Text => "Text",
            Self::Effects => "Effects",
            Self::States => "States & Variants",
            Self::Responsive => "Responsive",
            Self::Other => "Others",
        }
    }
}

/// A single row of the classification table
///
/// A token belongs to this rule's category when any pattern matches. The
/// catch-all row carries no patterns and is never matched directly.
pub struct CategoryRule {
    /// Category claimed by this rule
    pub category: Category,
    patterns: Vec<Regex>,
}

impl CategoryRule {
    fn new(category: Category, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).expect("built-in category pattern must compile"))
            .collect();
        Self { category, patterns }
    }

    /// Get the display label for this rule's category
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    fn matches(&self, token: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(token))
    }
}

/// Ordered classification table, first-match-wins
///
/// Precedence runs top to bottom: structural categories (size, layout) are
/// tested before the broad ones (text, effects) so a sizing utility is never
/// claimed by a looser pattern. Variant-prefixed tokens classify by their
/// prefix, not their suffix: `hover:bg-blue-600` is a state, not a
/// background.
static CATEGORY_TABLE: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    vec![
        CategoryRule::new(
            Category::Size,
            &[r"^(w|h|min-w|max-w|min-h|max-h|size)-"],
        ),
        CategoryRule::new(
            Category::Layout,
            &[
                r"^(flex|grid|inline|block|hidden|table|flow-root)",
                r"^(static|fixed|absolute|relative|sticky)",
                r"^(top|right|bottom|left|inset)-",
                r"^(float|clear|isolation|z)-",
                r"^(flex-|grid-|place-|items-|justify-|content-|self-|auto-)",
                r"^(cols|rows|gap|row|col|flow)-",
                r"^overflow-",
            ],
        ),
        CategoryRule::new(
            Category::Spacing,
            &[r"^(m|mx|my|mt|mr|mb|ml|p|px|py|pt|pr|pb|pl|space)-"],
        ),
        CategoryRule::new(
            Category::Border,
            &[r"^(border|divide|ring|rounded|outline)"],
        ),
        CategoryRule::new(
            Category::Background,
            &[r"^bg-", r"^(from|via|to)-", r"^gradient-to-", r"^backdrop-"],
        ),
        CategoryRule::new(
            Category::Text,
            &[
                r"^(text|font|tracking|leading|decoration|placeholder)-",
                r"^(break|whitespace|indent|list)-",
                r"^(underline|overline|line-through|no-underline)$",
                r"^(uppercase|lowercase|capitalize|normal-case|truncate)$",
                r"^(antialiased|subpixel-antialiased|italic|not-italic)$",
                r"^selection:",
            ],
        ),
        CategoryRule::new(
            Category::Effects,
            &[
                r"^(shadow|opacity|mix-blend|blur|brightness|contrast)(-|$)",
                r"^(grayscale|hue-rotate|invert|saturate|sepia|drop-shadow)(-|$)",
                r"^(transition|duration|ease|delay|animate)(-|$)",
                r"^(transform|scale|rotate|translate|skew|origin)(-|$)",
                r"^(filter|appearance|cursor|select|resize|pointer-events)(-|$)",
            ],
        ),
        CategoryRule::new(
            Category::States,
            &[
                r"^(hover|focus|active|visited|disabled|checked):",
                r"^(group-hover|focus-within|focus-visible):",
                r"^dark:",
                r"^(first|last|odd|even|group):",
            ],
        ),
        CategoryRule::new(Category::Responsive, &[r"^(sm|md|lg|xl|2xl):"]),
        // Catch-all: empty pattern list, lowest precedence, always last.
        CategoryRule::new(Category::Other, &[]),
    ]
});

/// Get the ordered classification table
#[must_use]
pub fn category_table() -> &'static [CategoryRule] {
    &CATEGORY_TABLE
}

/// Classify a single utility-class token
///
/// Total and pure: the first rule whose pattern set matches wins, and tokens
/// no rule claims fall back to [`Category::Other`].
#[must_use]
pub fn classify(token: &str) -> Category {
    CATEGORY_TABLE
        .iter()
        .find(|rule| rule.matches(token))
        .map_or(Category::Other, |rule| rule.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_category() {
        assert_eq!(classify("w-4"), Category::Size);
        assert_eq!(classify("min-h-screen"), Category::Size);
        assert_eq!(classify("flex"), Category::Layout);
        assert_eq!(classify("items-center"), Category::Layout);
        assert_eq!(classify("z-10"), Category::Layout);
        assert_eq!(classify("gap-2"), Category::Layout);
        assert_eq!(classify("overflow-hidden"), Category::Layout);
        assert_eq!(classify("mt-4"), Category::Spacing);
        assert_eq!(classify("space-x-2"), Category::Spacing);
        assert_eq!(classify("border"), Category::Border);
        assert_eq!(classify("rounded-lg"), Category::Border);
        assert_eq!(classify("ring-2"), Category::Border);
        assert_eq!(classify("bg-white"), Category::Background);
        assert_eq!(classify("from-sky-500"), Category::Background);
        assert_eq!(classify("backdrop-blur-sm"), Category::Background);
        assert_eq!(classify("font-medium"), Category::Text);
        assert_eq!(classify("leading-6"), Category::Text);
        assert_eq!(classify("shadow-sm"), Category::Effects);
        assert_eq!(classify("transition"), Category::Effects);
        assert_eq!(classify("cursor-pointer"), Category::Effects);
        assert_eq!(classify("hover:shadow-md"), Category::States);
        assert_eq!(classify("dark:bg-gray-800"), Category::States);
        assert_eq!(classify("md:grid-cols-2"), Category::Responsive);
    }

    #[test]
    fn test_named_text_sizes_are_text() {
        assert_eq!(classify("text-sm"), Category::Text);
        assert_eq!(classify("text-2xl"), Category::Text);
    }

    #[test]
    fn test_bare_keyword_utilities() {
        assert_eq!(classify("italic"), Category::Text);
        assert_eq!(classify("uppercase"), Category::Text);
        assert_eq!(classify("truncate"), Category::Text);
        assert_eq!(classify("shadow"), Category::Effects);
        assert_eq!(classify("transform"), Category::Effects);
    }

    #[test]
    fn test_unknown_token_falls_back_to_other() {
        assert_eq!(classify("btn-primary"), Category::Other);
        assert_eq!(classify("sr-only"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn test_variant_prefix_wins_over_suffix() {
        // The prefix decides the category, never the suffix.
        assert_eq!(classify("hover:bg-blue-600"), Category::States);
        assert_eq!(classify("focus:ring-2"), Category::States);
        assert_eq!(classify("dark:text-white"), Category::States);
        assert_eq!(classify("sm:flex"), Category::Responsive);
        assert_eq!(classify("2xl:px-8"), Category::Responsive);
    }

    #[test]
    fn test_classify_is_stable() {
        for _ in 0..3 {
            assert_eq!(classify("hover:bg-blue-600"), Category::States);
            assert_eq!(classify("text-sm"), Category::Text);
        }
    }

    #[test]
    fn test_table_covers_each_category_once() {
        let table = category_table();
        assert_eq!(table.len(), Category::ALL.len());
        for (rule, category) in table.iter().zip(Category::ALL) {
            assert_eq!(rule.category, category);
        }
    }

    #[test]
    fn test_catch_all_is_last_and_empty() {
        let table = category_table();
        let last = table.last().unwrap();
        assert_eq!(last.category, Category::Other);
        assert!(last.patterns.is_empty());
        for rule in &table[..table.len() - 1] {
            assert!(!rule.patterns.is_empty());
        }
    }

    #[test]
    fn test_category_names_and_labels() {
        assert_eq!(Category::States.as_str(), "states");
        assert_eq!(Category::States.label(), "States & Variants");
        assert_eq!(Category::Other.as_str(), "other");
        assert_eq!(Category::Other.label(), "Others");
    }
}
