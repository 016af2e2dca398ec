//! Section label → category heuristics.
//!
//! The rules live in an ordered table; the first rule whose matcher accepts the
//! normalized label decides the category. Matching is case-insensitive and
//! ignores surrounding whitespace.

use crate::models::Category;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Matcher {
    /// Empty label.
    Empty,
    /// Label contains any of the needles.
    ContainsAny(&'static [&'static str]),
    /// Label contains one of `any` and none of `except`.
    ContainsExcept {
        any: &'static [&'static str],
        except: &'static [&'static str],
    },
    /// Label matches any of the patterns.
    Pattern(Vec<Regex>),
}

impl Matcher {
    /// `label` must already be normalized.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Matcher::Empty => label.is_empty(),
            Matcher::ContainsAny(needles) => needles.iter().any(|n| label.contains(n)),
            Matcher::ContainsExcept { any, except } => {
                any.iter().any(|n| label.contains(n)) && !except.iter().any(|n| label.contains(n))
            }
            Matcher::Pattern(patterns) => patterns.iter().any(|re| re.is_match(label)),
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub category: Category,
}

const GA_PLUS_VARIANTS: &[&str] = &["ga+", "ga plus"];

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("static section pattern")
}

pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "empty",
            matcher: Matcher::Empty,
            category: Category::Uncategorized,
        },
        Rule {
            name: "shuttle",
            matcher: Matcher::ContainsAny(&["shuttle"]),
            category: Category::Shuttle,
        },
        Rule {
            name: "vip",
            matcher: Matcher::ContainsAny(&["vip"]),
            category: Category::Vip,
        },
        Rule {
            name: "ga-plus",
            matcher: Matcher::ContainsAny(GA_PLUS_VARIANTS),
            category: Category::GaPlus,
        },
        Rule {
            name: "ga",
            matcher: Matcher::ContainsExcept {
                any: &["ga"],
                except: GA_PLUS_VARIANTS,
            },
            category: Category::Ga,
        },
        Rule {
            name: "general-admission",
            matcher: Matcher::ContainsAny(&["general admission", "general"]),
            category: Category::Ga,
        },
        Rule {
            name: "numbered-section",
            matcher: Matcher::Pattern(vec![
                pattern(r"^section \d+"),
                pattern(r"^\d+$"),
                pattern(r"^[a-z]+ \d+"),
            ]),
            category: Category::Ga,
        },
        Rule {
            name: "standing-area",
            matcher: Matcher::ContainsAny(&["pit", "lawn", "floor", "standing"]),
            category: Category::Ga,
        },
    ]
});

pub fn normalize_section(section: &str) -> String {
    section.trim().to_lowercase()
}

/// Category plus the name of the rule that produced it (`None` = fell through).
pub fn categorize_with_rule(section: Option<&str>) -> (Category, Option<&'static str>) {
    let label = normalize_section(section.unwrap_or_default());

    RULES
        .iter()
        .find(|rule| rule.matcher.matches(&label))
        .map(|rule| (rule.category, Some(rule.name)))
        .unwrap_or((Category::Uncategorized, None))
}

/// Map a free-text section label to a category. Total and deterministic.
pub fn categorize(section: Option<&str>) -> Category {
    categorize_with_rule(section).0
}
