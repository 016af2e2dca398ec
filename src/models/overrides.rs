use super::category::Category;
use serde::Serialize;
use std::collections::HashMap;

/// Stored row of `category_overrides`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOverride {
    pub user: String,
    pub section: String,
    pub category: Category,
    pub updated_at: String,
}

/// Section label → category chosen by an operator.
///
/// Keys are matched on the exact section string as the feed reports it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualOverrides(HashMap<String, Category>);

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: impl Into<String>, category: Category) {
        self.0.insert(section.into(), category);
    }

    pub fn get(&self, section: &str) -> Option<Category> {
        self.0.get(section).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Category)> for ManualOverrides {
    fn from_iter<I: IntoIterator<Item = (String, Category)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[CategoryOverride]> for ManualOverrides {
    fn from(rows: &[CategoryOverride]) -> Self {
        rows.iter()
            .map(|r| (r.section.clone(), r.category))
            .collect()
    }
}
