use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Ga,
    GaPlus,
    Vip,
    Shuttle,
    Concern,
    Uncategorized,
}

impl Category {
    /// Buckets always present in aggregate output.
    pub const TRACKED: [Category; 5] = [
        Category::Ga,
        Category::GaPlus,
        Category::Vip,
        Category::Shuttle,
        Category::Concern,
    ];

    /// Buckets that count as sellable supply in differentials.
    pub const SELLABLE: [Category; 4] = [
        Category::Ga,
        Category::GaPlus,
        Category::Vip,
        Category::Shuttle,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Ga => "GA",
            Category::GaPlus => "GA_PLUS",
            Category::Vip => "VIP",
            Category::Shuttle => "SHUTTLE",
            Category::Concern => "CONCERN",
            Category::Uncategorized => "UNCATEGORIZED",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "GA" => Some(Category::Ga),
            "GA_PLUS" => Some(Category::GaPlus),
            "VIP" => Some(Category::Vip),
            "SHUTTLE" => Some(Category::Shuttle),
            "CONCERN" => Some(Category::Concern),
            "UNCATEGORIZED" => Some(Category::Uncategorized),
            _ => None,
        }
    }

    /// Parse user input: "ga+", "ga plus", "GA_PLUS", "vip", ...
    pub fn from_code(code: &str) -> Option<Self> {
        let c: String = code
            .trim()
            .to_uppercase()
            .chars()
            .map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
            .collect();

        match c.as_str() {
            "GA+" | "GAPLUS" | "GA_PLUS" => Some(Category::GaPlus),
            other => Category::from_db_str(other),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ga => "GA",
            Category::GaPlus => "GA+",
            Category::Vip => "VIP",
            Category::Shuttle => "Shuttle",
            Category::Concern => "Concern",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit counts per category; every tracked bucket is present, zero when unseen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<Category, i64>);

impl Default for CategoryCounts {
    fn default() -> Self {
        Self(Category::TRACKED.iter().map(|c| (*c, 0)).collect())
    }
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds units to a bucket, saturating at `i64::MAX`. Uncategorized units
    /// are not tracked here.
    pub fn add(&mut self, category: Category, units: i64) {
        if category == Category::Uncategorized {
            return;
        }
        let slot = self.0.entry(category).or_insert(0);
        *slot = slot.saturating_add(units);
    }

    pub fn get(&self, category: Category) -> i64 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> i64 {
        self.0.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, i64)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }
}

impl<const N: usize> From<[(Category, i64); N]> for CategoryCounts {
    fn from(entries: [(Category, i64); N]) -> Self {
        let mut counts = CategoryCounts::new();
        for (c, n) in entries {
            counts.add(c, n);
        }
        counts
    }
}
