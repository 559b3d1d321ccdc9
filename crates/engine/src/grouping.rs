use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::taxonomy::{classify, Category};

/// Tokens bucketed under one category, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Category shared by every token in this group
    pub category: Category,

    /// Tokens in the relative order they appeared in the class string
    pub tokens: Vec<String>,
}

/// Ordered category buckets produced from one class string
///
/// Group order is first-occurrence order of each category in the source, not
/// table precedence order; empty buckets are never materialized. Every input
/// token lands in exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    groups: Vec<CategoryGroup>,
}

impl Grouping {
    /// Get the groups in display order
    #[must_use]
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Number of non-empty categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether no tokens were grouped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total token count across all groups
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.groups.iter().map(|g| g.tokens.len()).sum()
    }

    /// Iterate over the groups in display order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a CategoryGroup;
    type IntoIter = std::slice::Iter<'a, CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Serializes as an ordered JSON map of category name to token list.
impl Serialize for Grouping {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.category.as_str(), &group.tokens)?;
        }
        map.end()
    }
}

/// Split a class string and bucket its tokens by category
///
/// Splits on runs of whitespace, classifies each token, and appends it to its
/// category's bucket, creating the bucket on first use. Classification
/// precedence decides which category a token joins; first occurrence decides
/// where that category's bucket appears.
#[must_use]
pub fn group(class_string: &str) -> Grouping {
    let mut grouping = Grouping::default();
    let mut slots = [None::<usize>; Category::ALL.len()];

    for token in class_string.split_whitespace() {
        let category = classify(token);
        match slots[category as usize] {
            Some(index) => grouping.groups[index].tokens.push(token.to_string()),
            None => {
                slots[category as usize] = Some(grouping.groups.len());
                grouping.groups.push(CategoryGroup {
                    category,
                    tokens: vec![token.to_string()],
                });
            }
        }
    }

    grouping
}
